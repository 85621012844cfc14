use super::backend::StorageBackend;
use super::EXHIBITION_KEY;
use crate::error::{ExhibitError, Result};
use crate::model::{ArtworkKey, BookmarkedArtwork, Source};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const DOCUMENT_VERSION: u32 = 1;

/// How `add` decides that a record is already in the exhibition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupPolicy {
    /// Membership by `(source, id)`.
    #[default]
    SourceAndId,
    /// Membership by `id` alone, as the browser app did. A Met and a Cleveland
    /// artwork sharing a numeric id collide and the second is reported as a
    /// duplicate.
    IdOnly,
}

impl fmt::Display for DedupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DedupPolicy::SourceAndId => write!(f, "source-and-id"),
            DedupPolicy::IdOnly => write!(f, "id-only"),
        }
    }
}

impl FromStr for DedupPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "source-and-id" => Ok(DedupPolicy::SourceAndId),
            "id-only" => Ok(DedupPolicy::IdOnly),
            other => Err(format!(
                "Invalid dedup policy '{}' (expected 'source-and-id' or 'id-only')",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// The exhibition, partitioned by source. Each bucket keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Exhibition {
    pub met: Vec<BookmarkedArtwork>,
    pub cleveland: Vec<BookmarkedArtwork>,
}

impl Exhibition {
    pub fn from_records(records: Vec<BookmarkedArtwork>) -> Self {
        let mut exhibition = Exhibition::default();
        for record in records {
            match record.source {
                Source::Met => exhibition.met.push(record),
                Source::Cleveland => exhibition.cleveland.push(record),
            }
        }
        exhibition
    }

    pub fn by_source(&self, source: Source) -> &[BookmarkedArtwork] {
        match source {
            Source::Met => &self.met,
            Source::Cleveland => &self.cleveland,
        }
    }

    pub fn len(&self) -> usize {
        self.met.len() + self.cleveland.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookmarkedArtwork> {
        self.met.iter().chain(self.cleveland.iter())
    }
}

#[derive(Serialize)]
struct Document<'a> {
    version: u32,
    artworks: &'a [BookmarkedArtwork],
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    artworks: Vec<Value>,
}

/// Version reported for a bare array and for a document that does not parse.
const LEGACY_VERSION: u32 = 0;

/// A decoded document together with the version it was written at.
struct Stored {
    version: u32,
    records: Vec<BookmarkedArtwork>,
}

impl Stored {
    fn empty() -> Self {
        Self {
            version: LEGACY_VERSION,
            records: Vec::new(),
        }
    }

    fn absent() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            records: Vec::new(),
        }
    }

    fn is_legacy(&self) -> bool {
        self.version < DOCUMENT_VERSION
    }
}

/// The bookmark store behind the "exhibition" feature.
///
/// Every operation loads the whole document and mutations write the whole
/// document back. Mutations take `&mut self`; the read-modify-write is only
/// safe because the store has a single owner.
///
/// A document written by a newer build is read best effort but never
/// written: every mutation that would replace it fails instead.
pub struct ExhibitionStore<B: StorageBackend> {
    backend: B,
    policy: DedupPolicy,
}

impl<B: StorageBackend> ExhibitionStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            policy: DedupPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DedupPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Bookmark `record` unless it is already present under the store's policy.
    pub fn add(&mut self, mut record: BookmarkedArtwork) -> Result<AddOutcome> {
        let mut stored = self.load()?;

        if self.holds(&stored.records, record.key()) {
            tracing::debug!(key = %record.key(), policy = %self.policy, "artwork already bookmarked");
            return Ok(AddOutcome::AlreadyPresent);
        }

        if record.added_at.is_none() {
            record.added_at = Some(Utc::now());
        }
        tracing::debug!(key = %record.key(), "bookmarking artwork");
        stored.records.push(record);
        self.save(stored.version, &stored.records)?;
        Ok(AddOutcome::Added)
    }

    /// Drop every record with `id`, limited to `source` when given.
    /// Returns how many records were removed; zero is not an error.
    pub fn remove(&mut self, id: u64, source: Option<Source>) -> Result<usize> {
        let stored = self.load()?;
        let legacy = stored.is_legacy();
        let before = stored.records.len();
        let kept: Vec<BookmarkedArtwork> = stored
            .records
            .into_iter()
            .filter(|r| !(r.id == id && source.map_or(true, |s| s == r.source)))
            .collect();
        let removed = before - kept.len();

        // A legacy document is upgraded even when nothing matched, which also
        // flushes its unreadable records. A current one is left untouched.
        if removed == 0 && !legacy {
            return Ok(0);
        }
        self.save(stored.version, &kept)?;
        tracing::debug!(id, removed, "removed artworks");
        Ok(removed)
    }

    pub fn list(&self) -> Result<Exhibition> {
        Ok(Exhibition::from_records(self.load()?.records))
    }

    /// Membership under the store's policy, the same test `add` applies.
    pub fn contains(&self, key: ArtworkKey) -> Result<bool> {
        Ok(self.holds(&self.load()?.records, key))
    }

    /// Remove everything. Returns how many records were dropped.
    pub fn clear(&mut self) -> Result<usize> {
        let stored = self.load()?;
        self.save(stored.version, &[])?;
        Ok(stored.records.len())
    }

    fn holds(&self, records: &[BookmarkedArtwork], key: ArtworkKey) -> bool {
        match self.policy {
            DedupPolicy::SourceAndId => records.iter().any(|r| r.key() == key),
            DedupPolicy::IdOnly => records.iter().any(|r| r.id == key.id),
        }
    }

    fn load(&self) -> Result<Stored> {
        match self.backend.read(EXHIBITION_KEY)? {
            Some(raw) => Ok(decode_document(&raw)),
            None => Ok(Stored::absent()),
        }
    }

    /// Write `records` over a document that was loaded at `loaded_version`.
    fn save(&self, loaded_version: u32, records: &[BookmarkedArtwork]) -> Result<()> {
        if loaded_version > DOCUMENT_VERSION {
            tracing::warn!(
                version = loaded_version,
                supported = DOCUMENT_VERSION,
                "refusing to overwrite a newer exhibition document"
            );
            return Err(ExhibitError::Store(
                "exhibition was written by a newer exhibit".into(),
            ));
        }
        let document = Document {
            version: DOCUMENT_VERSION,
            artworks: records,
        };
        let raw = serde_json::to_string_pretty(&document)?;
        self.backend.write(EXHIBITION_KEY, &raw)
    }
}

/// Decode a persisted document, never failing.
///
/// Accepts the versioned envelope and the legacy bare array. Anything that
/// does not parse reads as empty; individual records that do not decode
/// (unknown source, missing id) are skipped.
fn decode_document(raw: &str) -> Stored {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "exhibition document is corrupt, treating as empty");
            return Stored::empty();
        }
    };

    let (version, entries) = match value {
        Value::Array(items) => (LEGACY_VERSION, items),
        Value::Object(_) => match serde_json::from_value::<Envelope>(value) {
            Ok(envelope) => {
                if envelope.version > DOCUMENT_VERSION {
                    tracing::warn!(
                        version = envelope.version,
                        supported = DOCUMENT_VERSION,
                        "exhibition document is newer than this build, reading best effort"
                    );
                }
                (envelope.version, envelope.artworks)
            }
            Err(e) => {
                tracing::warn!(error = %e, "exhibition document has an unexpected shape");
                return Stored::empty();
            }
        },
        Value::Null => return Stored::empty(),
        _ => {
            tracing::warn!("exhibition document is not a list, treating as empty");
            return Stored::empty();
        }
    };

    let records = entries
        .into_iter()
        .filter_map(
            |entry| match serde_json::from_value::<BookmarkedArtwork>(entry) {
                Ok(record) => Some(record.normalized()),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable exhibition record");
                    None
                }
            },
        )
        .collect();
    Stored { version, records }
}
