use crate::error::{ExhibitError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::{DedupPolicy, StorageBackend};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Storage key of the config document, `config.json` in the data directory.
const CONFIG_KEY: &str = "config";

pub const DEFAULT_MET_BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";
pub const DEFAULT_CLEVELAND_BASE_URL: &str = "https://openaccess-api.clevelandart.org/api";
pub const DEFAULT_PAGE_SIZE: u32 = 60;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_PAGE_SIZE: u32 = 1000;

/// Every key accepted by `get`/`set`, in display order.
pub const CONFIG_KEYS: [&str; 6] = [
    "met-base-url",
    "cleveland-base-url",
    "page-size",
    "timeout",
    "dedup",
    "only-with-images",
];

/// Configuration for exhibit, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExhibitConfig {
    #[serde(default = "default_met_base_url")]
    pub met_base_url: String,

    #[serde(default = "default_cleveland_base_url")]
    pub cleveland_base_url: String,

    /// Artworks per gallery page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request HTTP timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub dedup: DedupPolicy,

    /// Hide gallery entries that have no preview image
    #[serde(default = "default_only_with_images")]
    pub only_with_images: bool,
}

fn default_met_base_url() -> String {
    DEFAULT_MET_BASE_URL.to_string()
}

fn default_cleveland_base_url() -> String {
    DEFAULT_CLEVELAND_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_only_with_images() -> bool {
    true
}

impl Default for ExhibitConfig {
    fn default() -> Self {
        Self {
            met_base_url: default_met_base_url(),
            cleveland_base_url: default_cleveland_base_url(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            dedup: DedupPolicy::default(),
            only_with_images: true,
        }
    }
}

impl ExhibitConfig {
    /// Read `config.json` from the data directory.
    ///
    /// A missing file yields the defaults and keys absent from the file keep
    /// their default values. A file that does not parse is a config error
    /// naming its path.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let backend = FsBackend::new(data_dir.as_ref());
        let Some(raw) = backend.read(CONFIG_KEY)? else {
            return Ok(Self::default());
        };
        serde_json::from_str(&raw).map_err(|e| {
            ExhibitError::Config(format!(
                "{}: {}",
                backend.location(CONFIG_KEY).display(),
                e
            ))
        })
    }

    /// Write `config.json` through the same atomic file backend the stores use.
    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        FsBackend::new(data_dir.as_ref()).write(CONFIG_KEY, &raw)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "met-base-url" => Some(self.met_base_url.clone()),
            "cleveland-base-url" => Some(self.cleveland_base_url.clone()),
            "page-size" => Some(self.page_size.to_string()),
            "timeout" => Some(self.timeout_secs.to_string()),
            "dedup" => Some(self.dedup.to_string()),
            "only-with-images" => Some(self.only_with_images.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "met-base-url" => self.met_base_url = parse_base_url(value)?,
            "cleveland-base-url" => self.cleveland_base_url = parse_base_url(value)?,
            "page-size" => {
                let size: u32 = value
                    .parse()
                    .map_err(|_| format!("Invalid page size: {}", value))?;
                if size == 0 || size > MAX_PAGE_SIZE {
                    return Err(format!(
                        "Page size must be between 1 and {}",
                        MAX_PAGE_SIZE
                    ));
                }
                self.page_size = size;
            }
            "timeout" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| format!("Invalid timeout: {}", value))?;
                if secs == 0 {
                    return Err("Timeout must be at least 1 second".to_string());
                }
                self.timeout_secs = secs;
            }
            "dedup" => self.dedup = value.parse()?,
            "only-with-images" => {
                self.only_with_images = match value {
                    "true" | "yes" | "1" => true,
                    "false" | "no" | "0" => false,
                    _ => return Err(format!("Invalid boolean: {}", value)),
                }
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_base_url(value: &str) -> std::result::Result<String, String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(format!("Base URL must start with http:// or https://: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ExhibitConfig::default();
        assert_eq!(config.page_size, 60);
        assert_eq!(config.dedup, DedupPolicy::SourceAndId);
        assert!(config.only_with_images);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ExhibitConfig::load(dir.path()).unwrap();
        assert_eq!(config, ExhibitConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = ExhibitConfig::default();
        config.set("page-size", "24").unwrap();
        config.set("dedup", "id-only").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ExhibitConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 24);
        assert_eq!(loaded.dedup, DedupPolicy::IdOnly);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"page_size": 12}"#).unwrap();

        let config = ExhibitConfig::load(dir.path()).unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.met_base_url, DEFAULT_MET_BASE_URL);
    }

    #[test]
    fn test_unparsable_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "{page_size").unwrap();

        let err = ExhibitConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ExhibitError::Config(_)));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_save_creates_the_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        ExhibitConfig::default().save(&nested).unwrap();
        assert!(nested.join("config.json").exists());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = ExhibitConfig::default();
        assert!(config.set("page-size", "0").is_err());
        assert!(config.set("page-size", "lots").is_err());
        assert!(config.set("timeout", "0").is_err());
        assert!(config.set("met-base-url", "ftp://example").is_err());
        assert!(config.set("only-with-images", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, ExhibitConfig::default());
    }

    #[test]
    fn test_base_url_is_normalized() {
        let mut config = ExhibitConfig::default();
        config
            .set("cleveland-base-url", "http://localhost:8080/api/")
            .unwrap();
        assert_eq!(
            config.get("cleveland-base-url").unwrap(),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = ExhibitConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing key {}", key);
        }
    }
}
