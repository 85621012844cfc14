use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
///
/// Values are opaque strings (JSON in practice). Implementations only move
/// bytes; parsing and defaulting belong to the stores built on top.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when nothing has been written yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic so readers never observe a partial document.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Drop the value stored under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Where the value for `key` lives. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> PathBuf;
}

/// Lets several stores share one backend by reference.
impl<T: StorageBackend + ?Sized> StorageBackend for &T {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn location(&self, key: &str) -> PathBuf {
        (**self).location(key)
    }
}
