//! # Persistence Layer
//!
//! The durable-storage contract for the record collection. The
//! [`RecordGateway`] trait abstracts the backend so the command layer can
//! be tested against [`memory::InMemoryGateway`] without touching the
//! filesystem, while production uses [`fs::FileGateway`].
//!
//! ## Storage format
//!
//! One UTF-8 JSON file holding the full collection as a pretty-printed
//! array of record objects, array order = display order:
//!
//! ```text
//! [
//!   {
//!     "name": "Ana Silva",
//!     "id_number": "111.444.777-35",
//!     "age": 30,
//!     "email": "ana@ex.com",
//!     "postal_code": "01001-000",
//!     "created_at": "2026-08-30T12:00:00Z"
//!   }
//! ]
//! ```
//!
//! ## Write discipline
//!
//! `save` rewrites the whole file on every successful mutation, and the
//! rewrite is atomic: content goes to a temporary sibling first, then a
//! rename replaces the target. A failure mid-write leaves the previous
//! file intact.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for durable record storage.
pub trait RecordGateway {
    /// Persist the full collection, replacing any prior content. Either
    /// the new content lands completely or the old content survives.
    fn save(&mut self, records: &[Record]) -> Result<()>;

    /// Restore the collection. A missing backing file is the normal
    /// first-run state and yields an empty collection, not an error.
    fn load(&self) -> Result<Vec<Record>>;
}
