use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CadastroError, Result};
use crate::persist::RecordGateway;
use crate::store::RecordStore;
use std::io::{self, Write};

/// Remove the record at `index` and persist the shrunken collection.
/// Prompts for confirmation on stdin unless `skip_confirm` is set.
pub fn run<G: RecordGateway>(
    store: &mut RecordStore,
    gateway: &mut G,
    index: usize,
    skip_confirm: bool,
) -> Result<CmdResult> {
    let name = store.get(index)?.name.clone();

    if !skip_confirm {
        print!("Remove {} ({})? [Y] to confirm: ", name, index + 1);
        io::stdout().flush().map_err(CadastroError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(CadastroError::Io)?;

        if input.trim() != "Y" {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    let removed = store.remove(index)?;
    gateway.save(store.list())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record removed: {}", removed.name)));
    result.affected.push(removed);
    Ok(result)
}
