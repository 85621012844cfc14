use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ExhibitError, Result};
use crate::gateway::{GalleryPage, GalleryRequest, MuseumGateway};
use crate::liveness::Liveness;
use crate::store::{PageMemory, StorageBackend};

/// Load one gallery page and remember it as the museum's current page.
///
/// A gateway failure is not an error for the view: it is logged, the page
/// comes back empty and the remembered page stays as it was. `filter`
/// narrows the loaded page by title or artist, the way the gallery search
/// box did.
pub async fn run<G, B>(
    gateway: &G,
    pages: &PageMemory<B>,
    request: GalleryRequest,
    filter: Option<&str>,
    liveness: &Liveness,
) -> Result<CmdResult>
where
    G: MuseumGateway + ?Sized,
    B: StorageBackend,
{
    let loaded = gateway.gallery(&request).await;
    let loaded = liveness.guard(loaded).ok_or(ExhibitError::Cancelled)?;

    let mut page = match loaded {
        Ok(page) => {
            pages.remember(gateway.source(), request.page)?;
            page
        }
        Err(e) => {
            tracing::warn!(source = %gateway.source(), page = request.page, error = %e, "gallery fetch failed");
            GalleryPage::empty(&request)
        }
    };

    if let Some(term) = filter.filter(|t| !t.trim().is_empty()) {
        page.artworks.retain(|a| a.matches(term.trim()));
    }

    let mut result = CmdResult::default();
    if page.artworks.is_empty() {
        result.add_message(CmdMessage::info("No artworks found."));
    }
    Ok(result.with_gallery(page))
}
