use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ExhibitError, Result};
use crate::gateway::MuseumGateway;
use crate::liveness::Liveness;
use crate::store::{AddOutcome, ExhibitionStore, StorageBackend};

/// Fetch an artwork from its museum and bookmark it.
pub async fn run<G, B>(
    gateway: &G,
    store: &mut ExhibitionStore<B>,
    id: u64,
    liveness: &Liveness,
) -> Result<CmdResult>
where
    G: MuseumGateway + ?Sized,
    B: StorageBackend,
{
    let loaded = gateway.artwork(id).await;
    let loaded = liveness.guard(loaded).ok_or(ExhibitError::Cancelled)?;

    let mut result = CmdResult::default();
    let artwork = match loaded {
        Ok(Some(artwork)) => artwork,
        Ok(None) => {
            result.add_message(CmdMessage::error(format!(
                "No artwork details found for {} at {}.",
                id,
                gateway.source().display_name()
            )));
            return Ok(result);
        }
        Err(e) => {
            tracing::warn!(source = %gateway.source(), id, error = %e, "artwork fetch failed");
            result.add_message(CmdMessage::error(format!(
                "Error fetching artwork details: {}",
                e
            )));
            return Ok(result);
        }
    };

    let title = artwork.display_title().to_string();
    match store.add(artwork)? {
        AddOutcome::Added => result.add_message(CmdMessage::success(format!(
            "{} has been added to your exhibition!",
            title
        ))),
        AddOutcome::AlreadyPresent => result.add_message(CmdMessage::warning(format!(
            "{} is already in your exhibition.",
            title
        ))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::gateway::mock::MockGateway;
    use crate::model::Source;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_collection;

    #[tokio::test]
    async fn adds_then_reports_duplicate() {
        let gateway = MockGateway::new(Source::Met, sample_collection(Source::Met));
        let mut store = ExhibitionStore::new(MemBackend::new());
        let live = Liveness::new();

        let first = run(&gateway, &mut store, 436535, &live).await.unwrap();
        assert_eq!(first.messages[0].level, MessageLevel::Success);
        assert_eq!(
            first.messages[0].content,
            "Wheat Field with Cypresses has been added to your exhibition!"
        );

        let second = run(&gateway, &mut store, 436535, &live).await.unwrap();
        assert_eq!(second.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            second.messages[0].content,
            "Wheat Field with Cypresses is already in your exhibition."
        );
        assert_eq!(store.list().unwrap().met.len(), 1);
    }

    #[tokio::test]
    async fn untitled_artwork_uses_the_sentinel_in_messages() {
        let gateway = MockGateway::new(Source::Cleveland, sample_collection(Source::Cleveland));
        let mut store = ExhibitionStore::new(MemBackend::new());

        let result = run(&gateway, &mut store, 160011, &Liveness::new())
            .await
            .unwrap();
        assert_eq!(
            result.messages[0].content,
            "Untitled has been added to your exhibition!"
        );
        let listed = store.list().unwrap();
        assert_eq!(listed.cleveland[0].title, None);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_store_untouched() {
        let gateway =
            MockGateway::new(Source::Met, sample_collection(Source::Met)).fail_artwork(436535);
        let mut store = ExhibitionStore::new(MemBackend::new());

        let result = run(&gateway, &mut store, 436535, &Liveness::new())
            .await
            .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancelled_view_does_not_bookmark() {
        let gateway = MockGateway::new(Source::Met, sample_collection(Source::Met));
        let mut store = ExhibitionStore::new(MemBackend::new());
        let live = Liveness::new();
        live.cancel();

        let err = run(&gateway, &mut store, 436535, &live).await.unwrap_err();
        assert!(matches!(err, ExhibitError::Cancelled));
        assert!(store.list().unwrap().is_empty());
    }
}
