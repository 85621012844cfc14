//! # Museum Gateways
//!
//! Read-only clients for the two museum collections. Each client converts the
//! museum's own record schema into [`BookmarkedArtwork`] exactly once, in
//! [`normalize`], so nothing downstream re-derives sentinels.
//!
//! - [`met::MetClient`]: id enumeration + per-object fetch
//! - [`cleveland::ClevelandClient`]: offset-paginated listing
//! - [`mock::MockGateway`]: canned data for tests and offline runs

pub mod cleveland;
pub mod met;
pub mod mock;
pub mod normalize;

use crate::config::ExhibitConfig;
use crate::error::{ExhibitError, Result};
use crate::model::{BookmarkedArtwork, Source};
use futures::future::join_all;
use rand::seq::SliceRandom;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Records considered by the default [`MuseumGateway::sample`].
pub const SAMPLE_POOL: u32 = 100;

const USER_AGENT: &str = concat!("exhibit/", env!("CARGO_PKG_VERSION"));

/// One page of a gallery, as asked for by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRequest {
    /// 1-based
    pub page: u32,
    pub per_page: u32,
    /// Free-text search handled by the museum API
    pub query: Option<String>,
    pub has_image: bool,
}

impl GalleryRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            query: None,
            has_image: true,
        }
    }

    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query.filter(|q| !q.trim().is_empty());
        self
    }

    pub fn with_has_image(mut self, has_image: bool) -> Self {
        self.has_image = has_image;
        self
    }

    /// Zero-based offset of the first record on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryPage {
    pub page: u32,
    pub per_page: u32,
    /// Total records in the collection, when the museum reports it.
    pub total: Option<u64>,
    pub artworks: Vec<BookmarkedArtwork>,
}

impl GalleryPage {
    pub fn empty(request: &GalleryRequest) -> Self {
        Self {
            page: request.page,
            per_page: request.per_page,
            total: None,
            artworks: Vec::new(),
        }
    }

    pub fn total_pages(&self) -> Option<u32> {
        let total = self.total?;
        if self.per_page == 0 {
            return None;
        }
        let pages = total.div_ceil(u64::from(self.per_page));
        Some(u32::try_from(pages).unwrap_or(u32::MAX))
    }
}

/// A museum collection the views can read from.
#[async_trait::async_trait]
pub trait MuseumGateway: Send + Sync {
    fn source(&self) -> Source;

    /// Load one gallery page.
    async fn gallery(&self, request: &GalleryRequest) -> Result<GalleryPage>;

    /// Load one artwork. `Ok(None)` when the museum does not know the id.
    async fn artwork(&self, id: u64) -> Result<Option<BookmarkedArtwork>>;

    /// A random handful of artworks with images, for the highlights view.
    ///
    /// The default draws from the first [`SAMPLE_POOL`] records of the
    /// collection.
    async fn sample(&self, count: usize) -> Result<Vec<BookmarkedArtwork>> {
        let page = self.gallery(&GalleryRequest::new(1, SAMPLE_POOL)).await?;
        let mut pool: Vec<BookmarkedArtwork> =
            page.artworks.into_iter().filter(|a| a.has_image()).collect();
        pool.shuffle(&mut rand::thread_rng());
        pool.truncate(count);
        Ok(pool)
    }
}

/// Build the shared HTTP client from configuration.
pub fn http_client(config: &ExhibitConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET `url` and decode the JSON body. 404 maps to `Ok(None)`, any other
/// non-success status to [`ExhibitError::Gateway`].
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<Option<T>> {
    tracing::debug!(url, ?query, "gateway request");
    let response = http.get(url).query(query).send().await?;
    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(ExhibitError::Gateway {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.json::<T>().await?;
    Ok(Some(body))
}

/// Fetch every id concurrently and wait for the whole batch.
///
/// A failing fetch is logged and treated as absent; it never aborts the batch.
/// Results keep the order of `ids`.
pub async fn join_batch<F, Fut>(ids: &[u64], fetch: F) -> Vec<BookmarkedArtwork>
where
    F: Fn(u64) -> Fut,
    Fut: Future<Output = Result<Option<BookmarkedArtwork>>>,
{
    let fetches = ids.iter().map(|&id| {
        let pending = fetch(id);
        async move {
            match pending.await {
                Ok(found) => found,
                Err(e) => {
                    tracing::warn!(id, error = %e, "artwork fetch failed, skipping");
                    None
                }
            }
        }
    });

    join_all(fetches).await.into_iter().flatten().collect()
}
