use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ExhibitionStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &ExhibitionStore<B>) -> Result<CmdResult> {
    let exhibition = store.list()?;
    let mut result = CmdResult::default();
    if exhibition.is_empty() {
        result.add_message(CmdMessage::info("No artworks in your exhibition yet."));
    }
    Ok(result.with_exhibition(exhibition))
}
