//! Cleveland Museum of Art open access API.

use super::normalize::from_cleveland;
use super::{get_json, GalleryPage, GalleryRequest, MuseumGateway};
use crate::error::Result;
use crate::model::{BookmarkedArtwork, Source};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Creator {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub web: Option<ImageRef>,
}

/// The subset of an artwork record this crate reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ClevelandArtwork {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub creators: Option<Vec<Creator>>,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingInfo {
    #[serde(default)]
    pub total: Option<u64>,
}

/// Response of `/artworks/`. `info` is not always present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub info: Option<ListingInfo>,
    #[serde(default)]
    pub data: Vec<ClevelandArtwork>,
}

#[derive(Debug, Clone, Deserialize)]
struct Single {
    data: ClevelandArtwork,
}

pub struct ClevelandClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClevelandClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// One `limit`/`skip` window of the collection.
    pub async fn listing(&self, request: &GalleryRequest) -> Result<Listing> {
        let url = format!("{}/artworks/", self.base_url);
        let mut query = vec![
            ("limit", request.per_page.to_string()),
            ("skip", request.offset().to_string()),
        ];
        if request.has_image {
            query.push(("has_image", "1".to_string()));
        }
        if let Some(q) = &request.query {
            query.push(("q", q.clone()));
        }
        let listing: Option<Listing> = get_json(&self.http, &url, &query).await?;
        Ok(listing.unwrap_or_default())
    }

    pub async fn record(&self, id: u64) -> Result<Option<ClevelandArtwork>> {
        let url = format!("{}/artworks/{}", self.base_url, id);
        let single: Option<Single> = get_json(&self.http, &url, &[]).await?;
        Ok(single.map(|s| s.data))
    }
}

#[async_trait::async_trait]
impl MuseumGateway for ClevelandClient {
    fn source(&self) -> Source {
        Source::Cleveland
    }

    async fn gallery(&self, request: &GalleryRequest) -> Result<GalleryPage> {
        let listing = self.listing(request).await?;
        let total = listing.info.and_then(|info| info.total);

        let mut artworks: Vec<BookmarkedArtwork> =
            listing.data.into_iter().map(from_cleveland).collect();
        if request.has_image {
            artworks.retain(BookmarkedArtwork::has_image);
        }

        Ok(GalleryPage {
            page: request.page,
            per_page: request.per_page,
            total,
            artworks,
        })
    }

    async fn artwork(&self, id: u64) -> Result<Option<BookmarkedArtwork>> {
        Ok(self.record(id).await?.map(from_cleveland))
    }
}
