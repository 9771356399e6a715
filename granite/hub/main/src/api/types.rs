//! Data types for hub API operations

use crate::api::error::HubResult;
use std::path::PathBuf;

/// A bundle of downloaded model files (SafeTensors format)
#[derive(Debug, Clone)]
pub struct ModelBundle {
    /// Model identifier
    pub model_id: String,
    /// Snapshot directory holding the downloaded files
    pub model_dir: PathBuf,
    /// Path to config.json
    pub config_path: PathBuf,
    /// SafeTensors files, one per shard
    pub weight_files: Vec<PathBuf>,
}

impl ModelBundle {
    /// Read config.json as raw bytes, for typed deserialization by the caller.
    pub fn config_bytes(&self) -> HubResult<Vec<u8>> {
        Ok(std::fs::read(&self.config_path)?)
    }
}
