//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{EntityKind, RecordId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity: EntityKind,

    /// Row id of the affected record
    pub record_id: RecordId,

    /// Business key (category or goal text) of the affected record
    pub key: String,

    /// Row state before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Row state after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Short human-readable description of what changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    fn blank(operation: Operation, entity: EntityKind, record_id: RecordId, key: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity,
            record_id,
            key: key.to_string(),
            before: None,
            after: None,
            summary: None,
        }
    }

    pub fn create<T: Serialize>(
        entity: EntityKind,
        record_id: RecordId,
        key: &str,
        row: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(row).ok(),
            ..Self::blank(Operation::Create, entity, record_id, key)
        }
    }

    pub fn update<T: Serialize>(
        entity: EntityKind,
        record_id: RecordId,
        key: &str,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            summary,
            ..Self::blank(Operation::Update, entity, record_id, key)
        }
    }

    pub fn delete<T: Serialize>(
        entity: EntityKind,
        record_id: RecordId,
        key: &str,
        row: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(row).ok(),
            ..Self::blank(Operation::Delete, entity, record_id, key)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} #{} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity,
            self.record_id,
            self.key
        );

        if let Some(summary) = &self.summary {
            output.push_str(&format!("\n  Changes: {}", summary));
        }

        output
    }
}
