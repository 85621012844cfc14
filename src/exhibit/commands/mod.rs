use crate::config::ExhibitConfig;
use crate::gateway::GalleryPage;
use crate::model::BookmarkedArtwork;
use crate::store::Exhibition;
use std::path::PathBuf;

pub mod add;
pub mod browse;
pub mod clear;
pub mod config;
pub mod exhibition;
pub mod highlights;
pub mod remove;
pub mod show;

#[derive(Debug, Clone)]
pub struct ExhibitPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Flat listings (highlights)
    pub listed: Vec<BookmarkedArtwork>,
    pub gallery: Option<GalleryPage>,
    pub detail: Option<BookmarkedArtwork>,
    pub exhibition: Option<Exhibition>,
    pub config: Option<ExhibitConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, artworks: Vec<BookmarkedArtwork>) -> Self {
        self.listed = artworks;
        self
    }

    pub fn with_gallery(mut self, page: GalleryPage) -> Self {
        self.gallery = Some(page);
        self
    }

    pub fn with_detail(mut self, artwork: BookmarkedArtwork) -> Self {
        self.detail = Some(artwork);
        self
    }

    pub fn with_exhibition(mut self, exhibition: Exhibition) -> Self {
        self.exhibition = Some(exhibition);
        self
    }

    pub fn with_config(mut self, config: ExhibitConfig) -> Self {
        self.config = Some(config);
        self
    }
}
