//! HuggingFace Tokenizer wrapper

use crate::api::error::{TokenizerError, TokenizerResult};
use crate::spi::contract::Tokenizer;

/// HuggingFace Tokenizer wrapper (uses the `tokenizers` crate).
///
/// Supports every format a `tokenizer.json` can describe: BPE, SentencePiece,
/// WordPiece, WordLevel.
pub struct HFTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HFTokenizer {
    /// Load from a `tokenizer.json` file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> TokenizerResult<Self> {
        let p = path.as_ref();
        let tokenizer = tokenizers::Tokenizer::from_file(p).map_err(|e| TokenizerError::Load {
            path: p.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { inner: tokenizer })
    }
}

impl Tokenizer for HFTokenizer {
    fn encode(&self, text: &str) -> TokenizerResult<Vec<u32>> {
        let encoding = self
            .inner
            .encode(text, true)
            .map_err(|e| TokenizerError::Encode(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn decode(&self, tokens: &[u32], skip_special_tokens: bool) -> TokenizerResult<String> {
        self.inner
            .decode(tokens, skip_special_tokens)
            .map_err(|e| TokenizerError::Decode(e.to_string()))
    }

    fn token_to_id(&self, token: &str) -> Option<u32> {
        self.inner.token_to_id(token)
    }
}
