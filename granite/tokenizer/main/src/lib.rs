//! # Granite Tokenizer
//!
//! Tokenizer contract used by the generation pipeline, with a wrapper over
//! the HuggingFace `tokenizers` crate for `tokenizer.json` files.

pub mod api;
pub(crate) mod core;
pub(crate) mod spi;
mod saf;

pub use saf::*;
