//! # Storage Layer
//!
//! The exhibition lives in a small key/value space, the same shape a browser's
//! local storage offers. [`backend::StorageBackend`] handles the "how" (files or
//! memory) and the stores on top of it handle the "what":
//!
//! - [`exhibition::ExhibitionStore`]: the bookmarked artworks, key `exhibitionArtworks`
//! - [`pages::PageMemory`]: the last viewed gallery page of each museum, keys
//!   `currentPage` (Met) and `currentPage.cleveland`
//!
//! ## Document Format
//!
//! ```text
//! <data dir>/
//! ├── exhibitionArtworks.json   # {"version": 1, "artworks": [...]}
//! ├── currentPage.json          # 3
//! ├── currentPage.cleveland.json
//! └── config.json               # ExhibitConfig
//! ```
//!
//! Every mutation that changes something rewrites the whole document.
//! Documents written by the browser app (a bare JSON array) are still read
//! and get upgraded on the next write.
//!
//! ## Failure Model
//!
//! The exhibition is a best-effort local cache. A missing or unparsable
//! document reads as empty. A document from a newer version is read but a
//! mutation refuses to replace it. Backend I/O errors still propagate.

pub mod backend;
pub mod exhibition;
pub mod fs_backend;
pub mod mem_backend;
pub mod pages;

pub use backend::StorageBackend;
pub use exhibition::{AddOutcome, DedupPolicy, Exhibition, ExhibitionStore};
pub use pages::{page_key, PageMemory};

pub const EXHIBITION_KEY: &str = "exhibitionArtworks";
pub const CURRENT_PAGE_KEY: &str = "currentPage";
