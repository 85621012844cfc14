use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{ExhibitionStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut ExhibitionStore<B>) -> Result<CmdResult> {
    let removed = store.clear()?;
    let mut result = CmdResult::default();
    if removed == 0 {
        result.add_message(CmdMessage::info("Your exhibition is already empty."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed {} artwork(s) from your exhibition.",
            removed
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookmarkedArtwork, Source};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn clears_everything() {
        let mut store = ExhibitionStore::new(MemBackend::new());
        store.add(BookmarkedArtwork::new(Source::Met, 1)).unwrap();

        let result = run(&mut store).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Removed 1 artwork(s) from your exhibition."
        );
        assert!(store.list().unwrap().is_empty());
    }
}
