use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const DATE_UNKNOWN: &str = "Date Unknown";

/// The museum a record came from. The serialized names are part of the
/// persisted document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    Met,
    Cleveland,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::Met, Source::Cleveland];

    pub fn display_name(&self) -> &'static str {
        match self {
            Source::Met => "The Metropolitan Museum of Art",
            Source::Cleveland => "The Cleveland Museum of Art",
        }
    }

    /// Route segment of the detail view for this source (`art/5`, `art2/5`).
    pub fn detail_route(&self, id: u64) -> String {
        match self {
            Source::Met => format!("art/{}", id),
            Source::Cleveland => format!("art2/{}", id),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Met => write!(f, "Met"),
            Source::Cleveland => write!(f, "Cleveland"),
        }
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "met" | "metropolitan" => Ok(Source::Met),
            "cleveland" | "cma" => Ok(Source::Cleveland),
            other => Err(format!(
                "Unknown source '{}' (expected 'met' or 'cleveland')",
                other
            )),
        }
    }
}

/// Identity of a bookmark. Ids are only unique within a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtworkKey {
    pub source: Source,
    pub id: u64,
}

impl fmt::Display for ArtworkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkedArtwork {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub source: Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl BookmarkedArtwork {
    pub fn new(source: Source, id: u64) -> Self {
        Self {
            id,
            title: None,
            image: None,
            artist: None,
            date: None,
            source,
            added_at: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_blank(Some(title.into()));
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = non_blank(Some(image.into()));
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = non_blank(Some(artist.into()));
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = non_blank(Some(date.into()));
        self
    }

    /// Blank fields become missing, so records stored with empty strings
    /// still display their sentinels.
    pub fn normalized(mut self) -> Self {
        self.title = non_blank(self.title.take());
        self.image = non_blank(self.image.take());
        self.artist = non_blank(self.artist.take());
        self.date = non_blank(self.date.take());
        self
    }

    pub fn key(&self) -> ArtworkKey {
        ArtworkKey {
            source: self.source,
            id: self.id,
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    pub fn display_artist(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }

    pub fn display_date(&self) -> &str {
        self.date.as_deref().unwrap_or(DATE_UNKNOWN)
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Case-insensitive match against title or artist line.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let hit = |field: &Option<String>| {
            field
                .as_deref()
                .map(|v| v.to_lowercase().contains(&term))
                .unwrap_or(false)
        };
        hit(&self.title) || hit(&self.artist)
    }
}

/// Collapses empty and whitespace-only values to `None`, which is how the
/// gateways report missing fields.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_apply_to_missing_fields() {
        let art = BookmarkedArtwork::new(Source::Met, 1);
        assert_eq!(art.display_title(), "Untitled");
        assert_eq!(art.display_artist(), "Unknown Artist");
        assert_eq!(art.display_date(), "Date Unknown");
    }

    #[test]
    fn blank_values_are_absent() {
        let art = BookmarkedArtwork::new(Source::Cleveland, 2)
            .with_title("   ")
            .with_artist("");
        assert_eq!(art.title, None);
        assert_eq!(art.artist, None);
    }

    #[test]
    fn source_parses_aliases() {
        assert_eq!("MET".parse::<Source>().unwrap(), Source::Met);
        assert_eq!("cma".parse::<Source>().unwrap(), Source::Cleveland);
        assert!("louvre".parse::<Source>().is_err());
    }

    #[test]
    fn source_serializes_with_wire_names() {
        let json = serde_json::to_string(&Source::Cleveland).unwrap();
        assert_eq!(json, "\"Cleveland\"");
    }

    #[test]
    fn reads_records_written_by_the_browser_app() {
        let json = r#"{"id":436535,"title":"Wheat Field","image":null,"artist":"Vincent van Gogh","date":"1889","source":"Met"}"#;
        let art: BookmarkedArtwork = serde_json::from_str(json).unwrap();
        assert_eq!(art.key().to_string(), "Met:436535");
        assert_eq!(art.image, None);
        assert_eq!(art.added_at, None);
    }

    #[test]
    fn matches_title_or_artist() {
        let art = BookmarkedArtwork::new(Source::Met, 3)
            .with_title("Sunflowers")
            .with_artist("Vincent van Gogh");
        assert!(art.matches("sunflower"));
        assert!(art.matches("GOGH"));
        assert!(!art.matches("monet"));
    }
}
