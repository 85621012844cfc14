use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ExhibitError, Result};
use crate::gateway::MuseumGateway;
use crate::liveness::Liveness;
use crate::model::BookmarkedArtwork;

/// A few random artworks from each museum, fetched concurrently.
/// A museum that fails contributes nothing.
pub async fn run(
    gateways: &[&dyn MuseumGateway],
    per_museum: usize,
    liveness: &Liveness,
) -> Result<CmdResult> {
    let samples = futures::future::join_all(gateways.iter().map(|gateway| async move {
        match gateway.sample(per_museum).await {
            Ok(artworks) => artworks,
            Err(e) => {
                tracing::warn!(source = %gateway.source(), error = %e, "highlights fetch failed");
                Vec::new()
            }
        }
    }))
    .await;
    let samples = liveness.guard(samples).ok_or(ExhibitError::Cancelled)?;

    let listed: Vec<BookmarkedArtwork> = samples.into_iter().flatten().collect();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No artworks found."));
    }
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::MockGateway;
    use crate::model::Source;
    use crate::test_utils::sample_collection;

    #[tokio::test]
    async fn samples_each_museum() {
        let met = MockGateway::new(Source::Met, sample_collection(Source::Met));
        let cma = MockGateway::new(Source::Cleveland, sample_collection(Source::Cleveland));

        let result = run(&[&met, &cma], 2, &Liveness::new()).await.unwrap();
        let met_count = result.listed.iter().filter(|a| a.source == Source::Met).count();
        let cma_count = result
            .listed
            .iter()
            .filter(|a| a.source == Source::Cleveland)
            .count();
        assert_eq!(met_count, 2);
        assert_eq!(cma_count, 2);
        assert!(result.listed.iter().all(|a| a.has_image()));
    }

    #[tokio::test]
    async fn failing_museum_is_skipped() {
        let met = MockGateway::new(Source::Met, sample_collection(Source::Met)).fail_gallery();
        let cma = MockGateway::new(Source::Cleveland, sample_collection(Source::Cleveland));

        let result = run(&[&met, &cma], 3, &Liveness::new()).await.unwrap();
        assert_eq!(result.listed.len(), 3);
        assert!(result.listed.iter().all(|a| a.source == Source::Cleveland));
    }
}
