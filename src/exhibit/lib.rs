//! # Exhibit Architecture
//!
//! Exhibit browses the open collections of the Metropolitan Museum of Art and the
//! Cleveland Museum of Art and keeps a personal "exhibition" of bookmarked
//! artworks on disk. The library is UI-agnostic; the `exhibit` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, installs logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Picks the museum gateway, fills request defaults         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns `CmdResult`                      │
//! │  - No I/O assumptions                                       │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                              │
//!                  ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Storage Layer (store/)       │ │  Gateways (gateway/)      │
//! │  - StorageBackend trait       │ │  - MuseumGateway trait    │
//! │  - FsBackend, MemBackend      │ │  - Met, Cleveland, mock   │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Asynchronous Completions
//!
//! Gateway calls are async. A [`liveness::Liveness`] token travels with every
//! command; a completion that arrives after the token was cancelled is dropped
//! before it can touch the store or the page memory.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests over `MemBackend` and `MockGateway`. Most tests live here.
//! 2. **API**: dispatch tests, checking which gateway and store a call reaches.
//! 3. **Gateways**: HTTP tests against `wiremock` servers.
//! 4. **CLI**: `assert_cmd` tests in `tests/`, offline commands only.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction, the exhibition and the page memory
//! - [`gateway`]: Museum API clients and record normalization
//! - [`model`]: `BookmarkedArtwork`, `Source` and display sentinels
//! - [`liveness`]: Cancellation of asynchronous completions
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod gateway;
pub mod liveness;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
