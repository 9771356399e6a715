//! # Granite NLP
//!
//! Causal language model loading and the prompt-to-text pipeline.
//!
//! This crate provides:
//! - `LanguageModel` and `ModelSource` contracts
//! - `GraniteModel`, a greedy generator over candle's Granite implementation
//! - `HubModelSource`, which resolves tokenizer and weights through the hub cache
//! - `Pipeline`: encode, generate (capped at `MAX_NEW_TOKENS`), decode, print
//!
//! ## Example
//!
//! ```rust,ignore
//! use granite_hub::HubApi;
//! use granite_nlp::{HubModelSource, Pipeline, MODEL_ID};
//!
//! let source = HubModelSource::new(HubApi::new(), candle_core::Device::Cpu);
//! let text = Pipeline::new(&source, MODEL_ID).run("Hello world")?;
//! println!("{}", text);
//! ```

pub mod api;
pub(crate) mod core;
mod saf;

pub use saf::*;
