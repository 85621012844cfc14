use crate::model::{BookmarkedArtwork, Source};
use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Held so the directory outlives the test
    pub _temp_dir: TempDir,
    pub backend: FsBackend,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            backend: FsBackend::new(root.clone()),
            _temp_dir: temp_dir,
            root,
        }
    }
}

/// A small, fixed slice of each collection for gateway mocks.
pub fn sample_collection(source: Source) -> Vec<BookmarkedArtwork> {
    match source {
        Source::Met => vec![
            BookmarkedArtwork::new(Source::Met, 436535)
                .with_title("Wheat Field with Cypresses")
                .with_artist("Vincent van Gogh")
                .with_date("1889")
                .with_image("https://images.metmuseum.org/CRDImages/ep/web-large/DT1567.jpg"),
            BookmarkedArtwork::new(Source::Met, 436532)
                .with_title("Self-Portrait with a Straw Hat")
                .with_artist("Vincent van Gogh")
                .with_date("1887")
                .with_image("https://images.metmuseum.org/CRDImages/ep/web-large/DT1502.jpg"),
            BookmarkedArtwork::new(Source::Met, 437127)
                .with_title("Bridge over a Pond of Water Lilies")
                .with_artist("Claude Monet")
                .with_date("1899")
                .with_image("https://images.metmuseum.org/CRDImages/ep/web-large/DT1924.jpg"),
            BookmarkedArtwork::new(Source::Met, 45734).with_date("ca. 1800"),
        ],
        Source::Cleveland => vec![
            BookmarkedArtwork::new(Source::Cleveland, 135382)
                .with_title("Water Lilies (Agapanthus)")
                .with_artist("Claude Monet (French, 1840-1926)")
                .with_date("c. 1915-1926")
                .with_image("https://openaccess-cdn.clevelandart.org/1960.81/1960.81_web.jpg"),
            BookmarkedArtwork::new(Source::Cleveland, 94979)
                .with_title("The Large Plane Trees")
                .with_artist("Vincent van Gogh (Dutch, 1853-1890)")
                .with_date("1889")
                .with_image("https://openaccess-cdn.clevelandart.org/1958.32/1958.32_web.jpg"),
            BookmarkedArtwork::new(Source::Cleveland, 160011)
                .with_image("https://openaccess-cdn.clevelandart.org/1916.1975/1916.1975_web.jpg"),
            BookmarkedArtwork::new(Source::Cleveland, 129541)
                .with_title("Twilight in the Wilderness")
                .with_artist("Frederic Edwin Church (American, 1826-1900)")
                .with_date("1860")
                .with_image("https://openaccess-cdn.clevelandart.org/1965.233/1965.233_web.jpg"),
            BookmarkedArtwork::new(Source::Cleveland, 5)
                .with_title("Fragment of a Textile"),
        ],
    }
}
