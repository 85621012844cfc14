//! Mock gateway implementation
//!
//! Serves a fixed list of artworks and records calls for test assertions.
//! Thread-safe via `Arc<Mutex<>>`.

use super::{GalleryPage, GalleryRequest, MuseumGateway};
use crate::error::{ExhibitError, Result};
use crate::model::{BookmarkedArtwork, Source};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MockState {
    failing_ids: HashSet<u64>,
    fail_gallery: bool,
    report_total: bool,
    calls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MockGateway {
    source: Source,
    artworks: Arc<Vec<BookmarkedArtwork>>,
    state: Arc<Mutex<MockState>>,
}

impl MockGateway {
    pub fn new(source: Source, artworks: Vec<BookmarkedArtwork>) -> Self {
        Self {
            source,
            artworks: Arc::new(artworks),
            state: Arc::new(Mutex::new(MockState {
                report_total: true,
                ..MockState::default()
            })),
        }
    }

    /// `artwork(id)` fails for this id.
    pub fn fail_artwork(self, id: u64) -> Self {
        self.with_state(|s| {
            s.failing_ids.insert(id);
        });
        self
    }

    /// Every `gallery` call fails.
    pub fn fail_gallery(self) -> Self {
        self.with_state(|s| s.fail_gallery = true);
        self
    }

    /// Galleries come back without a total, like some listing responses.
    pub fn without_total(self) -> Self {
        self.with_state(|s| s.report_total = false);
        self
    }

    /// Calls seen so far, as `gallery:<page>` / `artwork:<id>`.
    pub fn calls(&self) -> Vec<String> {
        self.state
            .lock()
            .map(|s| s.calls.clone())
            .unwrap_or_default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> Option<R> {
        self.state.lock().ok().map(|mut s| f(&mut s))
    }

    fn failure(&self, what: String) -> ExhibitError {
        ExhibitError::Gateway {
            url: format!("mock://{}/{}", self.source, what),
            status: 500,
        }
    }
}

#[async_trait::async_trait]
impl MuseumGateway for MockGateway {
    fn source(&self) -> Source {
        self.source
    }

    async fn gallery(&self, request: &GalleryRequest) -> Result<GalleryPage> {
        let (fail, report_total) = self
            .with_state(|s| {
                s.calls.push(format!("gallery:{}", request.page));
                (s.fail_gallery, s.report_total)
            })
            .unwrap_or((true, false));
        if fail {
            return Err(self.failure(format!("gallery/{}", request.page)));
        }

        let matching: Vec<&BookmarkedArtwork> = self
            .artworks
            .iter()
            .filter(|a| !request.has_image || a.has_image())
            .filter(|a| request.query.as_deref().map_or(true, |q| a.matches(q)))
            .collect();
        let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let artworks = matching
            .iter()
            .skip(start)
            .take(request.per_page as usize)
            .map(|a| (*a).clone())
            .collect();

        Ok(GalleryPage {
            page: request.page,
            per_page: request.per_page,
            total: report_total.then_some(matching.len() as u64),
            artworks,
        })
    }

    async fn artwork(&self, id: u64) -> Result<Option<BookmarkedArtwork>> {
        let fail = self
            .with_state(|s| {
                s.calls.push(format!("artwork:{}", id));
                s.failing_ids.contains(&id)
            })
            .unwrap_or(true);
        if fail {
            return Err(self.failure(format!("artwork/{}", id)));
        }
        Ok(self.artworks.iter().find(|a| a.id == id).cloned())
    }
}
