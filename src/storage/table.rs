//! Keyed record table backed by a JSON file
//!
//! Rows are held in id order, which is also insertion order because ids are
//! handed out from a monotonically increasing counter. A second index maps
//! each business key (category or goal text) to the ids of every row that
//! carries it, so update and delete by key can touch all matching rows.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{Amount, Record, RecordId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of a table file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableData<R> {
    #[serde(default = "first_id")]
    pub next_id: u64,
    #[serde(default = "Vec::new")]
    pub rows: Vec<R>,
}

fn first_id() -> u64 {
    1
}

impl<R> Default for TableData<R> {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            rows: Vec::new(),
        }
    }
}

/// A row before and after an update
#[derive(Debug, Clone)]
pub struct RowChange<R> {
    pub before: R,
    pub after: R,
}

#[derive(Clone)]
struct TableState<R> {
    next_id: u64,
    rows: BTreeMap<RecordId, R>,
    by_key: HashMap<String, Vec<RecordId>>,
}

impl<R: Record> TableState<R> {
    fn empty() -> Self {
        Self {
            next_id: first_id(),
            rows: BTreeMap::new(),
            by_key: HashMap::new(),
        }
    }

    fn ids_for(&self, key: &str) -> Vec<RecordId> {
        self.by_key.get(key).cloned().unwrap_or_default()
    }

    fn insert(&mut self, mut record: R) -> R {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        record.set_id(id);
        self.by_key
            .entry(record.key().to_string())
            .or_default()
            .push(id);
        self.rows.insert(id, record.clone());
        record
    }

    fn update_amount(&mut self, key: &str, amount: Amount) -> Vec<RowChange<R>> {
        let mut changes = Vec::new();
        for id in self.ids_for(key) {
            if let Some(row) = self.rows.get_mut(&id) {
                let before = row.clone();
                row.set_amount(amount);
                changes.push(RowChange {
                    before,
                    after: row.clone(),
                });
            }
        }
        changes
    }

    fn delete_by_key(&mut self, key: &str) -> Vec<R> {
        let ids = self.by_key.remove(key).unwrap_or_default();
        ids.iter().filter_map(|id| self.rows.remove(id)).collect()
    }

    fn to_data(&self) -> TableData<R> {
        TableData {
            next_id: self.next_id,
            rows: self.rows.values().cloned().collect(),
        }
    }
}

/// Repository for one kind of record
pub struct Table<R> {
    path: PathBuf,
    state: RwLock<TableState<R>>,
}

impl<R: Record> Table<R> {
    /// Create an empty table bound to a file; call `load` to read it
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(TableState::empty()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, TableState<R>>, TrackerError> {
        self.state
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TableState<R>>, TrackerError> {
        self.state
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load rows from disk and rebuild the key index
    ///
    /// Rows without an id (hand-edited files) are given fresh ones.
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: TableData<R> = read_json(&self.path)?;

        let mut state = self.write()?;
        *state = TableState::empty();

        let max_id = file_data
            .rows
            .iter()
            .map(|r| r.id().value())
            .max()
            .unwrap_or(0);
        state.next_id = file_data.next_id.max(max_id + 1);

        for record in file_data.rows {
            if !record.id().is_assigned() || state.rows.contains_key(&record.id()) {
                state.insert(record);
                continue;
            }
            let id = record.id();
            state
                .by_key
                .entry(record.key().to_string())
                .or_default()
                .push(id);
            state.rows.insert(id, record);
        }

        Ok(())
    }

    /// Save rows to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let state = self.read()?;
        write_json_atomic(&self.path, &state.to_data())
    }

    /// Apply `op` to a staged copy of the table and persist it
    ///
    /// The in-memory table only changes once the file write succeeds, so a
    /// failed commit leaves the table exactly as it was. Nothing is written
    /// when `changed` reports the outcome as a no-op.
    fn commit<T>(
        &self,
        op: impl FnOnce(&mut TableState<R>) -> T,
        changed: impl FnOnce(&T) -> bool,
    ) -> Result<T, TrackerError> {
        let mut state = self.write()?;
        let mut staged = state.clone();
        let outcome = op(&mut staged);

        if changed(&outcome) {
            write_json_atomic(&self.path, &staged.to_data())?;
            *state = staged;
        }

        Ok(outcome)
    }

    /// Insert a record and persist the table in one step
    pub fn insert_and_save(&self, record: R) -> Result<R, TrackerError> {
        self.commit(|state| state.insert(record), |_| true)
    }

    /// `update_amount`, persisted; a key with no rows writes nothing
    pub fn update_amount_and_save(
        &self,
        key: &str,
        amount: Amount,
    ) -> Result<Vec<RowChange<R>>, TrackerError> {
        self.commit(|state| state.update_amount(key, amount), |changes: &Vec<RowChange<R>>| !changes.is_empty())
    }

    /// `delete_by_key`, persisted; a key with no rows writes nothing
    pub fn delete_by_key_and_save(&self, key: &str) -> Result<Vec<R>, TrackerError> {
        self.commit(|state| state.delete_by_key(key), |removed: &Vec<R>| !removed.is_empty())
    }

    /// Store a new record, assigning its id
    pub fn insert(&self, record: R) -> Result<R, TrackerError> {
        let mut state = self.write()?;
        Ok(state.insert(record))
    }

    /// All rows in insertion order
    pub fn list_all(&self) -> Result<Vec<R>, TrackerError> {
        let state = self.read()?;
        Ok(state.rows.values().cloned().collect())
    }

    pub fn get(&self, id: RecordId) -> Result<Option<R>, TrackerError> {
        let state = self.read()?;
        Ok(state.rows.get(&id).cloned())
    }

    /// First row (by insertion order) whose key matches exactly
    pub fn find_by_key(&self, key: &str) -> Result<Option<R>, TrackerError> {
        let state = self.read()?;
        Ok(state
            .by_key
            .get(key)
            .and_then(|ids| ids.first())
            .and_then(|id| state.rows.get(id))
            .cloned())
    }

    /// Every row whose key matches exactly, in insertion order
    pub fn find_all_by_key(&self, key: &str) -> Result<Vec<R>, TrackerError> {
        let state = self.read()?;
        Ok(state
            .ids_for(key)
            .iter()
            .filter_map(|id| state.rows.get(id))
            .cloned()
            .collect())
    }

    pub fn contains_key(&self, key: &str) -> Result<bool, TrackerError> {
        let state = self.read()?;
        Ok(state.by_key.get(key).is_some_and(|ids| !ids.is_empty()))
    }

    /// Overwrite the amount on every row matching `key`
    ///
    /// Returns one change per touched row; no match is an empty result, not an error.
    pub fn update_amount(&self, key: &str, amount: Amount) -> Result<Vec<RowChange<R>>, TrackerError> {
        let mut state = self.write()?;
        Ok(state.update_amount(key, amount))
    }

    /// Remove every row matching `key`, returning the removed rows
    pub fn delete_by_key(&self, key: &str) -> Result<Vec<R>, TrackerError> {
        let mut state = self.write()?;
        Ok(state.delete_by_key(key))
    }

    /// Distinct keys in order of first appearance
    pub fn distinct_keys(&self) -> Result<Vec<String>, TrackerError> {
        let state = self.read()?;
        let mut keys: Vec<String> = Vec::new();
        for row in state.rows.values() {
            if !keys.iter().any(|k| k == row.key()) {
                keys.push(row.key().to_string());
            }
        }
        Ok(keys)
    }

    pub fn len(&self) -> Result<usize, TrackerError> {
        Ok(self.read()?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, TrackerError> {
        Ok(self.read()?.rows.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinancialGoal;
    use tempfile::TempDir;

    fn create_test_table() -> (TempDir, Table<FinancialGoal>) {
        let temp_dir = TempDir::new().unwrap();
        let table = Table::new(temp_dir.path().join("goals.json"));
        (temp_dir, table)
    }

    fn goal(name: &str, target: f64, saved: f64) -> FinancialGoal {
        FinancialGoal::new(name, Amount::new(target), Amount::new(saved))
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, table) = create_test_table();
        table.load().unwrap();
        assert!(table.is_empty().unwrap());
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let (_temp_dir, table) = create_test_table();

        let a = table.insert(goal("Vacation", 5000.0, 0.0)).unwrap();
        let b = table.insert(goal("Car", 20000.0, 0.0)).unwrap();

        assert_eq!(a.id, RecordId::new(1));
        assert_eq!(b.id, RecordId::new(2));
        assert_eq!(table.get(b.id).unwrap().unwrap().goal, "Car");
    }

    #[test]
    fn test_list_all_keeps_insertion_order() {
        let (_temp_dir, table) = create_test_table();
        for name in ["Zebra", "Apple", "Mango"] {
            table.insert(goal(name, 1.0, 0.0)).unwrap();
        }

        let names: Vec<_> = table.list_all().unwrap().into_iter().map(|g| g.goal).collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_update_touches_every_matching_row() {
        let (_temp_dir, table) = create_test_table();
        table.insert(goal("Vacation", 5000.0, 100.0)).unwrap();
        table.insert(goal("Car", 20000.0, 100.0)).unwrap();
        table.insert(goal("Vacation", 3000.0, 200.0)).unwrap();

        let changes = table.update_amount("Vacation", Amount::new(999.0)).unwrap();

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].before.saved_amount.value(), 100.0);
        assert!(table
            .find_all_by_key("Vacation")
            .unwrap()
            .iter()
            .all(|g| g.saved_amount.value() == 999.0));
        assert_eq!(
            table.find_by_key("Car").unwrap().unwrap().saved_amount.value(),
            100.0
        );
    }

    #[test]
    fn test_update_without_match_is_noop() {
        let (_temp_dir, table) = create_test_table();
        table.insert(goal("Car", 20000.0, 100.0)).unwrap();
        let before = table.list_all().unwrap();

        let changes = table.update_amount("Boat", Amount::new(1.0)).unwrap();

        assert!(changes.is_empty());
        assert_eq!(table.list_all().unwrap(), before);
    }

    #[test]
    fn test_delete_by_key_removes_all_matches() {
        let (_temp_dir, table) = create_test_table();
        table.insert(goal("Vacation", 5000.0, 0.0)).unwrap();
        table.insert(goal("Car", 20000.0, 0.0)).unwrap();
        table.insert(goal("Vacation", 3000.0, 0.0)).unwrap();

        let removed = table.delete_by_key("Vacation").unwrap();

        assert_eq!(removed.len(), 2);
        assert_eq!(table.len().unwrap(), 1);
        assert!(!table.contains_key("Vacation").unwrap());
        assert!(table.delete_by_key("Vacation").unwrap().is_empty());
    }

    #[test]
    fn test_distinct_keys() {
        let (_temp_dir, table) = create_test_table();
        for name in ["Car", "Vacation", "Car", "Laptop"] {
            table.insert(goal(name, 1.0, 0.0)).unwrap();
        }

        assert_eq!(
            table.distinct_keys().unwrap(),
            vec!["Car".to_string(), "Vacation".into(), "Laptop".into()]
        );
    }

    #[test]
    fn test_save_and_reload_preserves_ids_and_counter() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");

        {
            let table = Table::new(path.clone());
            table.insert(goal("Car", 20000.0, 0.0)).unwrap();
            let second = table.insert(goal("Boat", 9000.0, 0.0)).unwrap();
            table.delete_by_key(&second.goal).unwrap();
            table.save().unwrap();
        }

        let table: Table<FinancialGoal> = Table::new(path);
        table.load().unwrap();
        assert_eq!(table.len().unwrap(), 1);

        // Ids are never reused after a delete
        let next = table.insert(goal("Bike", 500.0, 0.0)).unwrap();
        assert_eq!(next.id, RecordId::new(3));
    }

    #[test]
    fn test_load_assigns_missing_ids() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");
        std::fs::write(
            &path,
            r#"{"rows": [
                {"goal": "Car", "target_amount": 100.0, "saved_amount": 0.0},
                {"id": 7, "goal": "Boat", "target_amount": 100.0, "saved_amount": 0.0}
            ]}"#,
        )
        .unwrap();

        let table: Table<FinancialGoal> = Table::new(path);
        table.load().unwrap();

        let car = table.find_by_key("Car").unwrap().unwrap();
        assert!(car.id.is_assigned());
        assert_ne!(car.id, RecordId::new(7));
        assert!(table.get(RecordId::new(7)).unwrap().is_some());
    }

    /// Make the atomic-write temp path unusable so every save fails
    fn block_writes(table: &Table<FinancialGoal>) {
        std::fs::create_dir_all(table.path().with_extension("json.tmp")).unwrap();
    }

    #[test]
    fn test_committed_mutations_reach_disk() {
        let (_temp_dir, table) = create_test_table();
        table.insert_and_save(goal("Car", 100.0, 0.0)).unwrap();
        table.insert_and_save(goal("Boat", 100.0, 0.0)).unwrap();
        table.update_amount_and_save("Car", Amount::new(50.0)).unwrap();
        table.delete_by_key_and_save("Boat").unwrap();

        let reloaded: Table<FinancialGoal> = Table::new(table.path().to_path_buf());
        reloaded.load().unwrap();
        assert_eq!(reloaded.list_all().unwrap(), table.list_all().unwrap());
        assert_eq!(reloaded.len().unwrap(), 1);
    }

    #[test]
    fn test_failed_insert_leaves_table_unchanged() {
        let (_temp_dir, table) = create_test_table();
        table.insert_and_save(goal("Car", 100.0, 0.0)).unwrap();
        block_writes(&table);

        assert!(table.insert_and_save(goal("Boat", 100.0, 0.0)).is_err());

        assert!(!table.contains_key("Boat").unwrap());
        assert_eq!(table.len().unwrap(), 1);
    }

    #[test]
    fn test_failed_update_and_delete_leave_table_unchanged() {
        let (_temp_dir, table) = create_test_table();
        table.insert_and_save(goal("Car", 100.0, 10.0)).unwrap();
        table.insert_and_save(goal("Car", 200.0, 20.0)).unwrap();
        let before = table.list_all().unwrap();
        block_writes(&table);

        assert!(table.update_amount_and_save("Car", Amount::new(99.0)).is_err());
        assert!(table.delete_by_key_and_save("Car").is_err());

        assert_eq!(table.list_all().unwrap(), before);
        assert_eq!(table.find_all_by_key("Car").unwrap().len(), 2);
    }

    #[test]
    fn test_noop_commit_writes_nothing() {
        let (_temp_dir, table) = create_test_table();

        assert!(table.update_amount_and_save("Car", Amount::new(1.0)).unwrap().is_empty());
        assert!(table.delete_by_key_and_save("Car").unwrap().is_empty());
        assert!(!table.path().exists());
    }
}
