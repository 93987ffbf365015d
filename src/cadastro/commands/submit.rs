use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordDraft;
use crate::persist::RecordGateway;
use crate::store::RecordStore;
use crate::validate;

/// Create a new record, or update the one at `edit_target`. The draft
/// goes through the validator first; the store is only touched on a clean
/// pass, and a successful mutation is persisted before returning.
pub fn run<G: RecordGateway>(
    store: &mut RecordStore,
    gateway: &mut G,
    draft: &RecordDraft,
    edit_target: Option<usize>,
) -> Result<CmdResult> {
    let valid = validate::validate(draft, store.list(), edit_target)?;

    let mut result = CmdResult::default();
    let record = match edit_target {
        None => {
            let record = store.add(valid).clone();
            result.add_message(CmdMessage::success(format!(
                "Record created: {}",
                record.name
            )));
            record
        }
        Some(index) => {
            let record = store.update(index, valid)?.clone();
            result.add_message(CmdMessage::success(format!(
                "Record updated ({}): {}",
                index + 1,
                record.name
            )));
            record
        }
    };
    gateway.save(store.list())?;

    result.affected.push(record);
    Ok(result)
}
