use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ExhibitError, Result};
use crate::gateway::MuseumGateway;
use crate::liveness::Liveness;

pub async fn run<G>(gateway: &G, id: u64, liveness: &Liveness) -> Result<CmdResult>
where
    G: MuseumGateway + ?Sized,
{
    let loaded = gateway.artwork(id).await;
    let loaded = liveness.guard(loaded).ok_or(ExhibitError::Cancelled)?;

    let mut result = CmdResult::default();
    match loaded {
        Ok(Some(artwork)) => Ok(result.with_detail(artwork)),
        Ok(None) => {
            result.add_message(CmdMessage::error(format!(
                "No artwork details found for {} at {}.",
                id,
                gateway.source().display_name()
            )));
            Ok(result)
        }
        Err(e) => {
            tracing::warn!(source = %gateway.source(), id, error = %e, "artwork fetch failed");
            result.add_message(CmdMessage::error(format!(
                "Error fetching artwork details: {}",
                e
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::gateway::mock::MockGateway;
    use crate::model::Source;
    use crate::test_utils::sample_collection;

    #[tokio::test]
    async fn returns_the_detail() {
        let gateway = MockGateway::new(Source::Met, sample_collection(Source::Met));
        let result = run(&gateway, 436535, &Liveness::new()).await.unwrap();
        assert_eq!(result.detail.unwrap().display_title(), "Wheat Field with Cypresses");
    }

    #[tokio::test]
    async fn unknown_id_is_a_message_not_an_error() {
        let gateway = MockGateway::new(Source::Cleveland, sample_collection(Source::Cleveland));
        let result = run(&gateway, 1, &Liveness::new()).await.unwrap();
        assert!(result.detail.is_none());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("Cleveland Museum of Art"));
    }

    #[tokio::test]
    async fn fetch_failure_is_reported() {
        let gateway =
            MockGateway::new(Source::Met, sample_collection(Source::Met)).fail_artwork(436535);
        let result = run(&gateway, 436535, &Liveness::new()).await.unwrap();
        assert!(result.detail.is_none());
        assert!(result.messages[0]
            .content
            .starts_with("Error fetching artwork details"));
    }
}
