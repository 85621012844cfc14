use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Source;
use crate::store::{ExhibitionStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut ExhibitionStore<B>,
    id: u64,
    source: Option<Source>,
) -> Result<CmdResult> {
    let removed = store.remove(id, source)?;
    let mut result = CmdResult::default();

    if removed == 0 {
        result.add_message(CmdMessage::info(format!(
            "No artwork with id {} in your exhibition.",
            id
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed {} artwork(s) with id {} from your exhibition.",
            removed, id
        )));
    }
    Ok(result)
}
