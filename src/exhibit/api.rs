//! # API Facade
//!
//! The single entry point for exhibit operations. It picks the gateway for a
//! museum, fills request defaults from configuration (page size, image filter,
//! remembered page) and dispatches to `commands/*.rs`.
//!
//! Like the command layer it never prints. Results come back as
//! [`CmdResult`] for the UI to render.
//!
//! `ExhibitApi<B>` is generic over the storage backend:
//! - Production: `ExhibitApi<FsBackend>`
//! - Testing: `ExhibitApi<&MemBackend>`
//!
//! The backend is cloned once so the exhibition and the page memory share
//! one key space.

use crate::commands;
use crate::config::ExhibitConfig;
use crate::error::Result;
use crate::gateway::{GalleryRequest, MuseumGateway};
use crate::liveness::Liveness;
use crate::model::Source;
use crate::store::{ExhibitionStore, PageMemory, StorageBackend};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, ExhibitPaths, MessageLevel};

pub struct ExhibitApi<B: StorageBackend + Clone> {
    store: ExhibitionStore<B>,
    pages: PageMemory<B>,
    met: Box<dyn MuseumGateway>,
    cleveland: Box<dyn MuseumGateway>,
    config: ExhibitConfig,
    paths: ExhibitPaths,
    liveness: Liveness,
}

impl<B: StorageBackend + Clone> ExhibitApi<B> {
    pub fn new(
        backend: B,
        met: Box<dyn MuseumGateway>,
        cleveland: Box<dyn MuseumGateway>,
        config: ExhibitConfig,
        paths: ExhibitPaths,
    ) -> Self {
        Self {
            store: ExhibitionStore::new(backend.clone()).with_policy(config.dedup),
            pages: PageMemory::new(backend),
            met,
            cleveland,
            config,
            paths,
            liveness: Liveness::new(),
        }
    }

    /// A handle that cancels every in-flight operation of this API.
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    fn gateway(&self, source: Source) -> &dyn MuseumGateway {
        match source {
            Source::Met => self.met.as_ref(),
            Source::Cleveland => self.cleveland.as_ref(),
        }
    }

    /// One gallery page. Without an explicit page, resumes the page last
    /// viewed in that museum.
    /// `all_images` lifts the configured image filter for this request.
    pub async fn browse(
        &self,
        source: Source,
        page: Option<u32>,
        query: Option<String>,
        filter: Option<&str>,
        all_images: bool,
    ) -> Result<CmdResult> {
        let page = match page {
            Some(page) => page,
            None => self.pages.last_page(source)?,
        };
        let request = GalleryRequest::new(page, self.config.page_size)
            .with_query(query)
            .with_has_image(self.config.only_with_images && !all_images);
        commands::browse::run(
            self.gateway(source),
            &self.pages,
            request,
            filter,
            &self.liveness,
        )
        .await
    }

    pub async fn show(&self, source: Source, id: u64) -> Result<CmdResult> {
        commands::show::run(self.gateway(source), id, &self.liveness).await
    }

    pub async fn add(&mut self, source: Source, id: u64) -> Result<CmdResult> {
        let gateway = match source {
            Source::Met => self.met.as_ref(),
            Source::Cleveland => self.cleveland.as_ref(),
        };
        commands::add::run(gateway, &mut self.store, id, &self.liveness).await
    }

    /// Remove `id` from one museum's bucket, or from both when `source` is `None`.
    pub fn remove(&mut self, id: u64, source: Option<Source>) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id, source)
    }

    pub fn exhibition(&self) -> Result<CmdResult> {
        commands::exhibition::run(&self.store)
    }

    pub async fn highlights(&self, per_museum: usize) -> Result<CmdResult> {
        commands::highlights::run(
            &[self.met.as_ref(), self.cleveland.as_ref()],
            per_museum,
            &self.liveness,
        )
        .await
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }
}
