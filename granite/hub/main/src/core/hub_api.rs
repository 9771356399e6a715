//! HuggingFace Hub API client (synchronous, via hf-hub).

use crate::api::error::{HubError, HubResult};
use crate::api::types::ModelBundle;
use hf_hub::api::sync::{ApiBuilder, ApiRepo};
use hf_hub::Cache;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";
const TOKENIZER_FILE: &str = "tokenizer.json";
const WEIGHTS_FILE: &str = "model.safetensors";
const WEIGHTS_INDEX_FILE: &str = "model.safetensors.index.json";

/// HuggingFace Hub API client
#[derive(Debug, Clone)]
pub struct HubApi {
    /// hf-hub cache directory (`$HF_HOME/hub` by default)
    cache_dir: PathBuf,
    /// API token (optional, for gated or private models)
    token: Option<String>,
}

impl Default for HubApi {
    fn default() -> Self {
        Self::new()
    }
}

impl HubApi {
    /// Create a new Hub API client.
    ///
    /// Reads `HF_HOME` at construction time, so the cache directory must be
    /// exported first.
    pub fn new() -> Self {
        let cache_dir = match std::env::var_os("HF_HOME") {
            Some(home) if !home.is_empty() => PathBuf::from(home).join("hub"),
            _ => Cache::default().path().clone(),
        };

        // Auto-detect HF_TOKEN from environment
        let token = std::env::var("HF_TOKEN").ok().filter(|t| !t.is_empty());

        Self { cache_dir, token }
    }

    /// Create with custom hub cache directory
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ..Self::new()
        }
    }

    /// Get the hub cache directory
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Build the hf-hub sync API, passing through any token from self.token.
    /// The hf-hub crate does NOT read HF_TOKEN from the environment;
    /// it only reads a token file in the cache dir.  We bridge that gap here.
    fn hf_sync_api(&self) -> HubResult<hf_hub::api::sync::Api> {
        let builder = ApiBuilder::new().with_cache_dir(self.cache_dir.clone());
        match self.token {
            Some(ref t) => builder.with_token(Some(t.clone())),
            None => builder,
        }
        .build()
        .map_err(|e| HubError::NetworkError(format!("Failed to create hf-hub API: {}", e)))
    }

    /// Download `tokenizer.json` for a model, or reuse the cached copy.
    pub fn download_tokenizer_sync(&self, model_id: &str) -> HubResult<PathBuf> {
        let api = self.hf_sync_api()?;
        let repo = api.model(model_id.to_string());
        fetch(&repo, TOKENIZER_FILE)
    }

    /// Download config and SafeTensors weights for a model.
    ///
    /// Sharded checkpoints are resolved through `model.safetensors.index.json`;
    /// repositories without an index fall back to a single `model.safetensors`.
    pub fn download_model_sync(&self, model_id: &str) -> HubResult<ModelBundle> {
        let api = self.hf_sync_api()?;
        let repo = api.model(model_id.to_string());

        let config_path = fetch(&repo, CONFIG_FILE)?;
        let model_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config_path.clone());

        let weight_files = match repo.get(WEIGHTS_INDEX_FILE) {
            Ok(index_path) => {
                let content = std::fs::read_to_string(&index_path)?;
                let index: serde_json::Value = serde_json::from_str(&content)
                    .map_err(|e| HubError::ParseError(format!("{}: {}", WEIGHTS_INDEX_FILE, e)))?;
                let shards = shard_files(&index)?;
                log::info!("{} has {} weight shards", model_id, shards.len());
                shards
                    .iter()
                    .map(|shard| fetch(&repo, shard))
                    .collect::<HubResult<Vec<_>>>()?
            }
            Err(e) => {
                log::debug!("no {} for {} ({}), using {}", WEIGHTS_INDEX_FILE, model_id, e, WEIGHTS_FILE);
                vec![fetch(&repo, WEIGHTS_FILE)?]
            }
        };

        Ok(ModelBundle {
            model_id: model_id.to_string(),
            model_dir,
            config_path,
            weight_files,
        })
    }

    /// Check if a model's config is already in the local hub cache.
    pub fn is_cached(&self, model_id: &str) -> bool {
        Cache::new(self.cache_dir.clone())
            .model(model_id.to_string())
            .get(CONFIG_FILE)
            .is_some()
    }
}

fn fetch(repo: &ApiRepo, filename: &str) -> HubResult<PathBuf> {
    log::debug!("resolving {}", filename);
    repo.get(filename)
        .map_err(|e| HubError::NetworkError(format!("Failed to download {}: {}", filename, e)))
}

/// Distinct shard file names listed in a SafeTensors index, sorted.
pub fn shard_files(index: &serde_json::Value) -> HubResult<Vec<String>> {
    let weight_map = index
        .get("weight_map")
        .and_then(|m| m.as_object())
        .ok_or_else(|| HubError::ParseError("index has no weight_map object".to_string()))?;

    let mut files = BTreeSet::new();
    for (tensor, file) in weight_map {
        let file = file.as_str().ok_or_else(|| {
            HubError::ParseError(format!("weight_map entry for {} is not a string", tensor))
        })?;
        files.insert(file.to_string());
    }
    Ok(files.into_iter().collect())
}
