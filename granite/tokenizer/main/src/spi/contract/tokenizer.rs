use crate::api::error::TokenizerResult;

/// Common tokenizer interface.
pub trait Tokenizer {
    /// Encode text to token IDs, adding the model's special tokens.
    fn encode(&self, text: &str) -> TokenizerResult<Vec<u32>>;
    /// Decode token IDs to text, optionally dropping special/control tokens.
    fn decode(&self, tokens: &[u32], skip_special_tokens: bool) -> TokenizerResult<String>;
    /// Look up a special token by name, returning its ID if present.
    fn token_to_id(&self, token: &str) -> Option<u32>;
}
