//! Public contracts and constants for the generation pipeline

use crate::api::error::NlpResult;
use granite_tokenizer::Tokenizer;

/// Checkpoint loaded by the pipeline.
pub const MODEL_ID: &str = "ibm-granite/granite-3.1-8b-instruct";

/// Cap on newly generated tokens per prompt.
pub const MAX_NEW_TOKENS: usize = 100;

/// A causal language model capable of autoregressive generation.
pub trait LanguageModel {
    /// Extend `input` by at most `max_new_tokens` tokens.
    ///
    /// Returns the whole sequence: the input tokens followed by the generated
    /// ones. Generation may stop early on an end-of-sequence token, which is
    /// kept in the returned sequence.
    fn generate(&self, input: &[u32], max_new_tokens: usize) -> NlpResult<Vec<u32>>;
}

/// Where tokenizers and models come from, keyed by model identifier.
pub trait ModelSource {
    fn load_tokenizer(&self, model_id: &str) -> NlpResult<Box<dyn Tokenizer>>;
    fn load_model(&self, model_id: &str) -> NlpResult<Box<dyn LanguageModel>>;
}
