//! Guards asynchronous completions against a view that has gone away.
//!
//! Gateway requests are not aborted when the user navigates away (or hits
//! Ctrl-C); instead every completion checks the token before it touches the
//! store, the page memory, or the command result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Mark the owning view as gone. Every clone observes it.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Pass a completed value through only while the view is alive.
    pub fn guard<T>(&self, value: T) -> Option<T> {
        if self.is_alive() {
            Some(value)
        } else {
            tracing::debug!("dropping completion for a cancelled view");
            None
        }
    }
}
