//! Audit log for the budget tracker
//!
//! Every create, update and delete is appended to `audit.log` as one JSON
//! line holding the affected row before and/or after the change.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: appends entries and reads them back

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
