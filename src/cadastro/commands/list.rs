use crate::commands::{CmdResult, ListedRecord};
use crate::error::Result;
use crate::store::RecordStore;

/// Snapshot the collection in display order.
pub fn run(store: &RecordStore) -> Result<CmdResult> {
    let listed = store
        .list()
        .iter()
        .cloned()
        .enumerate()
        .map(|(position, record)| ListedRecord { position, record })
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}
