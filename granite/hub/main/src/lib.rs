//! # Granite Hub
//!
//! Hugging Face Hub integration for loading the Granite checkpoint.
//!
//! This crate provides functionality to:
//! - Prepare the local cache directory and export it to the hub library
//! - Download tokenizer, config, and SafeTensors weights (single file or sharded)
//! - Check whether a model is already present in the hub cache
//!
//! ## Example
//!
//! ```rust,ignore
//! use granite_hub::{CacheDir, HubApi};
//!
//! CacheDir::resolve()?.install()?;
//! let api = HubApi::new();
//! let tokenizer_json = api.download_tokenizer_sync("ibm-granite/granite-3.1-8b-instruct")?;
//! let bundle = api.download_model_sync("ibm-granite/granite-3.1-8b-instruct")?;
//! ```

pub mod api;
pub(crate) mod core;
mod saf;

pub use saf::*;
