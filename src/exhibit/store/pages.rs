use super::backend::StorageBackend;
use super::CURRENT_PAGE_KEY;
use crate::error::Result;
use crate::model::Source;

/// Storage key holding the last viewed page of `source`'s gallery.
///
/// The Met keeps the key the browser app used so its value carries over.
pub fn page_key(source: Source) -> &'static str {
    match source {
        Source::Met => CURRENT_PAGE_KEY,
        Source::Cleveland => "currentPage.cleveland",
    }
}

/// Remembers the last viewed gallery page of each museum across runs.
pub struct PageMemory<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PageMemory<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The remembered page for `source`, 1 when nothing usable is stored.
    pub fn last_page(&self, source: Source) -> Result<u32> {
        let key = page_key(source);
        let Some(raw) = self.backend.read(key)? else {
            return Ok(1);
        };
        match serde_json::from_str::<i64>(raw.trim()) {
            Ok(page) if page >= 1 => Ok(u32::try_from(page).unwrap_or(u32::MAX)),
            Ok(_) => Ok(1),
            Err(e) => {
                tracing::warn!(error = %e, key, "ignoring unreadable page memory");
                Ok(1)
            }
        }
    }

    pub fn remember(&self, source: Source, page: u32) -> Result<()> {
        let raw = serde_json::to_string(&page.max(1))?;
        self.backend.write(page_key(source), &raw)
    }
}
