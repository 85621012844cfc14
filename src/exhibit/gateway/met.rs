//! Metropolitan Museum of Art collection API.
//!
//! The Met has no paginated listing: galleries enumerate object ids
//! (optionally through a search) and then fetch each object on the page.

use super::normalize::from_met;
use super::{get_json, join_batch, GalleryPage, GalleryRequest, MuseumGateway};
use crate::error::Result;
use crate::model::{BookmarkedArtwork, Source};
use rand::seq::SliceRandom;
use serde::Deserialize;

/// Objects fetched per highlights request; some have no image.
const SAMPLE_CANDIDATES: usize = 10;

/// Response of `/objects` and `/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectIds {
    #[serde(default)]
    pub total: u64,
    /// `null` when a search has no hits
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<u64>>,
}

/// The subset of `/objects/{id}` this crate reads.
#[derive(Debug, Clone, Deserialize)]
pub struct MetObject {
    #[serde(rename = "objectID")]
    pub object_id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "primaryImageSmall", default)]
    pub primary_image_small: Option<String>,
    #[serde(rename = "artistDisplayName", default)]
    pub artist_display_name: Option<String>,
    #[serde(rename = "objectDate", default)]
    pub object_date: Option<String>,
}

pub struct MetClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Every object id in the collection.
    pub async fn object_ids(&self, has_images: bool) -> Result<Vec<u64>> {
        let url = format!("{}/objects", self.base_url);
        let mut query = Vec::new();
        if has_images {
            query.push(("hasImages", "true".to_string()));
        }
        let ids: Option<ObjectIds> = get_json(&self.http, &url, &query).await?;
        Ok(ids.and_then(|r| r.object_ids).unwrap_or_default())
    }

    /// Object ids matching a free-text search.
    pub async fn search(&self, term: &str, has_images: bool) -> Result<Vec<u64>> {
        let url = format!("{}/search", self.base_url);
        let mut query = Vec::new();
        if has_images {
            query.push(("hasImages", "true".to_string()));
        }
        query.push(("q", term.to_string()));
        let ids: Option<ObjectIds> = get_json(&self.http, &url, &query).await?;
        Ok(ids.and_then(|r| r.object_ids).unwrap_or_default())
    }

    pub async fn object(&self, id: u64) -> Result<Option<MetObject>> {
        let url = format!("{}/objects/{}", self.base_url, id);
        get_json(&self.http, &url, &[]).await
    }
}

#[async_trait::async_trait]
impl MuseumGateway for MetClient {
    fn source(&self) -> Source {
        Source::Met
    }

    async fn gallery(&self, request: &GalleryRequest) -> Result<GalleryPage> {
        let ids = match &request.query {
            Some(term) => self.search(term, request.has_image).await?,
            None => self.object_ids(request.has_image).await?,
        };

        let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let page_ids: Vec<u64> = ids
            .iter()
            .skip(start)
            .take(request.per_page as usize)
            .copied()
            .collect();

        let mut artworks = join_batch(&page_ids, |id| self.artwork(id)).await;
        if request.has_image {
            artworks.retain(BookmarkedArtwork::has_image);
        }

        Ok(GalleryPage {
            page: request.page,
            per_page: request.per_page,
            total: Some(ids.len() as u64),
            artworks,
        })
    }

    async fn artwork(&self, id: u64) -> Result<Option<BookmarkedArtwork>> {
        Ok(self.object(id).await?.map(from_met))
    }

    /// Picks random ids from the whole collection instead of the first page;
    /// the id list is cheap and the object fetches are the expensive part.
    async fn sample(&self, count: usize) -> Result<Vec<BookmarkedArtwork>> {
        let ids = self.object_ids(true).await?;
        let picked: Vec<u64> = {
            let mut rng = rand::thread_rng();
            ids.choose_multiple(&mut rng, SAMPLE_CANDIDATES)
                .copied()
                .collect()
        };

        let mut artworks = join_batch(&picked, |id| self.artwork(id)).await;
        artworks.retain(BookmarkedArtwork::has_image);
        artworks.truncate(count);
        Ok(artworks)
    }
}
