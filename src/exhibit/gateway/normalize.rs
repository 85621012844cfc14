//! Gateway records → [`BookmarkedArtwork`]. The only place that knows which
//! museum field feeds which display line.

use super::cleveland::ClevelandArtwork;
use super::met::MetObject;
use crate::model::{non_blank, BookmarkedArtwork, Source};

pub fn from_met(object: MetObject) -> BookmarkedArtwork {
    BookmarkedArtwork {
        id: object.object_id,
        title: non_blank(object.title),
        image: non_blank(object.primary_image_small),
        artist: non_blank(object.artist_display_name),
        date: non_blank(object.object_date),
        source: Source::Met,
        added_at: None,
    }
}

pub fn from_cleveland(artwork: ClevelandArtwork) -> BookmarkedArtwork {
    // Several creators share one artist line.
    let artist = artwork.creators.map(|creators| {
        creators
            .into_iter()
            .filter_map(|c| non_blank(c.description))
            .collect::<Vec<_>>()
            .join(", ")
    });
    let image = artwork.images.and_then(|i| i.web).and_then(|w| w.url);

    BookmarkedArtwork {
        id: artwork.id,
        title: non_blank(artwork.title),
        image: non_blank(image),
        artist: non_blank(artist),
        date: non_blank(artwork.creation_date),
        source: Source::Cleveland,
        added_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn met_empty_strings_become_sentinels() {
        let object: MetObject = serde_json::from_str(
            r#"{"objectID": 45734, "title": "", "primaryImageSmall": "", "artistDisplayName": "", "objectDate": ""}"#,
        )
        .unwrap();
        let art = from_met(object);
        assert_eq!(art.key().to_string(), "Met:45734");
        assert_eq!(art.display_title(), "Untitled");
        assert_eq!(art.display_artist(), "Unknown Artist");
        assert_eq!(art.display_date(), "Date Unknown");
        assert!(!art.has_image());
    }

    #[test]
    fn cleveland_joins_creators() {
        let artwork: ClevelandArtwork = serde_json::from_str(
            r#"{"id": 94979, "title": "The Large Plane Trees",
                "creators": [{"description": "Vincent van Gogh"}, {"description": " "}, {"description": "Workshop"}],
                "creation_date": "1889",
                "images": {"web": {"url": "https://openaccess-cdn.clevelandart.org/94979/web.jpg"}}}"#,
        )
        .unwrap();
        let art = from_cleveland(artwork);
        assert_eq!(art.display_artist(), "Vincent van Gogh, Workshop");
        assert_eq!(art.source, Source::Cleveland);
        assert!(art.has_image());
    }

    #[test]
    fn cleveland_without_creators_or_images() {
        let artwork: ClevelandArtwork =
            serde_json::from_str(r#"{"id": 1, "creators": [], "images": null}"#).unwrap();
        let art = from_cleveland(artwork);
        assert_eq!(art.artist, None);
        assert_eq!(art.image, None);
        assert_eq!(art.display_title(), "Untitled");
    }
}
