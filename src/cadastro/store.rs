//! The in-memory record collection.
//!
//! [`RecordStore`] is the sole owner of the records during a session, and
//! positional index is the only identity. Removing a record shifts every
//! later record down one position, so callers holding an index across a
//! removal must re-select. Uniqueness is the validator's contract, checked
//! before anything reaches the store; the store trusts its caller.

use crate::error::{CadastroError, Result};
use crate::model::{Record, ValidRecord};
use chrono::Utc;

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from a loaded collection, preserving order.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Append a new record. `created_at` is stamped here, once.
    pub fn add(&mut self, valid: ValidRecord) -> &Record {
        self.records.push(Record {
            name: valid.name,
            id_number: valid.id_number,
            age: valid.age,
            email: valid.email,
            postal_code: valid.postal_code,
            created_at: Utc::now(),
            updated_at: None,
        });
        self.records.last().expect("just pushed")
    }

    /// Replace the record at `index`, keeping its original `created_at`
    /// and stamping `updated_at`.
    pub fn update(&mut self, index: usize, valid: ValidRecord) -> Result<&Record> {
        let count = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(CadastroError::IndexOutOfRange { index, count })?;
        let created_at = slot.created_at;
        *slot = Record {
            name: valid.name,
            id_number: valid.id_number,
            age: valid.age,
            email: valid.email,
            postal_code: valid.postal_code,
            created_at,
            updated_at: Some(Utc::now()),
        };
        Ok(&self.records[index])
    }

    /// Remove and return the record at `index`. Later records shift down.
    pub fn remove(&mut self, index: usize) -> Result<Record> {
        if index >= self.records.len() {
            return Err(CadastroError::IndexOutOfRange {
                index,
                count: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .ok_or(CadastroError::IndexOutOfRange {
                index,
                count: self.records.len(),
            })
    }

    /// Records in insertion order. No implicit sorting.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
