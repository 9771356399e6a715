//! Local cache directory shared with the hub library.
//!
//! The directory lives next to the installed binary (`<exe_dir>/../.hf-cache`)
//! unless `GRANITE_CACHE_DIR` points somewhere else. It is handed to the hub
//! library only through `HF_HOME` and `TRANSFORMERS_CACHE`, so it must be
//! installed before any tokenizer or model is requested.

use crate::api::error::HubResult;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the cache location.
pub const CACHE_DIR_ENV: &str = "GRANITE_CACHE_DIR";

/// Directory name used when the cache sits beside the executable.
pub const CACHE_DIR_NAME: &str = ".hf-cache";

/// Variables the hub library reads its cache location from.
const EXPORTED_VARS: [&str; 2] = ["HF_HOME", "TRANSFORMERS_CACHE"];

/// Cache directory for downloaded model and tokenizer files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDir {
    path: PathBuf,
}

impl CacheDir {
    /// Use an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `GRANITE_CACHE_DIR` if set and non-empty, otherwise the directory
    /// beside the running executable.
    pub fn resolve() -> HubResult<Self> {
        match std::env::var_os(CACHE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(Self::new(dir)),
            _ => Self::beside_executable(),
        }
    }

    /// `<exe_dir>/../.hf-cache`, with symlinks in the executable path resolved.
    pub fn beside_executable() -> HubResult<Self> {
        let exe = std::env::current_exe()?.canonicalize()?;
        let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::new(exe_dir.join("..").join(CACHE_DIR_NAME)))
    }

    /// Path of the cache directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory (and parents). A no-op when it already exists.
    pub fn prepare(&self) -> HubResult<()> {
        std::fs::create_dir_all(&self.path)?;
        Ok(())
    }

    /// Point `HF_HOME` and `TRANSFORMERS_CACHE` at this directory.
    pub fn export_env(&self) {
        for var in EXPORTED_VARS {
            std::env::set_var(var, &self.path);
        }
    }

    /// Prepare the directory, then export it.
    pub fn install(&self) -> HubResult<()> {
        self.prepare()?;
        self.export_env();
        log::debug!("cache directory: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = CacheDir::new(tmp.path().join("nested").join(CACHE_DIR_NAME));
        assert!(!cache.path().exists());
        cache.prepare().unwrap();
        assert!(cache.path().is_dir());
    }

    #[test]
    fn test_prepare_leaves_existing_directory_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = CacheDir::new(tmp.path().join(CACHE_DIR_NAME));
        cache.prepare().unwrap();
        std::fs::write(cache.path().join("marker"), b"kept").unwrap();

        cache.prepare().unwrap();
        assert_eq!(std::fs::read(cache.path().join("marker")).unwrap(), b"kept");
    }

    #[test]
    fn test_beside_executable_uses_cache_dir_name() {
        let cache = CacheDir::beside_executable().unwrap();
        assert!(cache.path().ends_with(CACHE_DIR_NAME));
        let parent = cache.path().parent().unwrap();
        assert!(parent.ends_with(".."));
    }

    // The only test in this crate that touches process environment.
    #[test]
    fn test_install_exports_both_variables() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = CacheDir::new(tmp.path().join(CACHE_DIR_NAME));
        cache.install().unwrap();
        assert!(cache.path().is_dir());
        for var in EXPORTED_VARS {
            assert_eq!(std::env::var_os(var).unwrap(), cache.path().as_os_str());
        }
    }
}
