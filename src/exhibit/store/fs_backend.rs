use super::backend::StorageBackend;
use crate::error::{ExhibitError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-per-key backend rooted at the data directory.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ExhibitError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ExhibitError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.key_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(ExhibitError::Io)?;
        fs::rename(&tmp, &target).map_err(ExhibitError::Io)?;

        tracing::debug!(key, path = %target.display(), bytes = value.len(), "wrote storage key");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(ExhibitError::Io)?;
        }
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        self.key_path(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn missing_key_reads_as_none() {
        let env = TestEnv::new();
        assert_eq!(env.backend.read("exhibitionArtworks").unwrap(), None);
    }

    #[test]
    fn write_replaces_and_leaves_no_temp_files() {
        let env = TestEnv::new();
        env.backend.write("currentPage", "2").unwrap();
        env.backend.write("currentPage", "3").unwrap();

        assert_eq!(env.backend.read("currentPage").unwrap().as_deref(), Some("3"));
        let names: Vec<String> = fs::read_dir(&env.root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["currentPage.json".to_string()]);
    }

    #[test]
    fn write_creates_the_data_dir() {
        let env = TestEnv::new();
        let nested = FsBackend::new(env.root.join("a").join("b"));
        nested.write("k", "v").unwrap();
        assert!(nested.location("k").exists());
    }

    #[test]
    fn remove_is_idempotent() {
        let env = TestEnv::new();
        env.backend.write("k", "v").unwrap();
        env.backend.remove("k").unwrap();
        env.backend.remove("k").unwrap();
        assert_eq!(env.backend.read("k").unwrap(), None);
    }
}
