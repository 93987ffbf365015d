//! # API Facade
//!
//! The single entry point for every registry operation, regardless of the
//! UI driving it. The facade dispatches to the command layer and returns
//! structured `Result<CmdResult>` values; it never prints, never exits,
//! never assumes a terminal.
//!
//! `CadastroApi<G: RecordGateway>` is generic over the persistence
//! backend: `FileGateway` in production, `InMemoryGateway` in tests.

use crate::commands::{self, CmdMessage};
use crate::error::Result;
use crate::model::{Record, RecordDraft};
use crate::persist::RecordGateway;
use crate::store::RecordStore;

pub struct CadastroApi<G: RecordGateway> {
    records: RecordStore,
    gateway: G,
}

impl<G: RecordGateway> CadastroApi<G> {
    /// Load the persisted collection and wrap it in a live store. An
    /// unreadable or corrupt data file degrades to an empty collection;
    /// the returned warning tells the presentation layer to say so. A
    /// missing file is the normal first run and produces no warning.
    pub fn open(gateway: G) -> (Self, Option<CmdMessage>) {
        let (records, warning) = match gateway.load() {
            Ok(records) => (records, None),
            Err(e) => (
                Vec::new(),
                Some(CmdMessage::warning(format!(
                    "Could not read saved records, starting empty: {}",
                    e
                ))),
            ),
        };
        (
            Self {
                records: RecordStore::from_records(records),
                gateway,
            },
            warning,
        )
    }

    /// Create a record (`edit_target: None`) or update an existing one.
    pub fn submit(
        &mut self,
        draft: &RecordDraft,
        edit_target: Option<usize>,
    ) -> Result<commands::CmdResult> {
        commands::submit::run(&mut self.records, &mut self.gateway, draft, edit_target)
    }

    pub fn delete(&mut self, index: usize, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.records, &mut self.gateway, index, skip_confirm)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.records)
    }

    /// The stored record at `index`, e.g. to pre-fill an edit form.
    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records.get(index)
    }

    pub fn count(&self) -> usize {
        self.records.count()
    }
}

pub use crate::commands::{CmdMessage as Message, CmdResult, ListedRecord, MessageLevel};
