//! Facade re-exports for granite-hub

pub use crate::api::types::*;
pub use crate::api::error::*;
pub use crate::core::cache_dir::{CacheDir, CACHE_DIR_ENV, CACHE_DIR_NAME};
pub use crate::core::hub_api::{shard_files, HubApi};
