//! Prompt-to-text pipeline: load, encode, generate, decode.

use std::io::Write;
use std::time::Instant;

use crate::api::error::NlpResult;
use crate::api::types::{ModelSource, MAX_NEW_TOKENS};

/// One-shot text generation for a fixed model.
///
/// Every run loads the tokenizer first, then the model, and generates at most
/// [`MAX_NEW_TOKENS`] new tokens with greedy selection. The decoded text drops
/// special tokens and starts with the prompt itself.
pub struct Pipeline<'a> {
    source: &'a dyn ModelSource,
    model_id: String,
    max_new_tokens: usize,
}

impl<'a> Pipeline<'a> {
    pub fn new(source: &'a dyn ModelSource, model_id: impl Into<String>) -> Self {
        Self {
            source,
            model_id: model_id.into(),
            max_new_tokens: MAX_NEW_TOKENS,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn max_new_tokens(&self) -> usize {
        self.max_new_tokens
    }

    /// Generate a completion for `prompt` and return the decoded text.
    pub fn run(&self, prompt: &str) -> NlpResult<String> {
        let tokenizer = self.source.load_tokenizer(&self.model_id)?;
        let model = self.source.load_model(&self.model_id)?;

        let input = tokenizer.encode(prompt)?;
        log::info!("prompt: {} tokens", input.len());

        let t = Instant::now();
        let output = model.generate(&input, self.max_new_tokens)?;
        let generated = output.len().saturating_sub(input.len());
        let secs = t.elapsed().as_secs_f64();
        log::info!(
            "generated {} tokens in {:.2}s ({:.1} tok/s)",
            generated,
            secs,
            if secs > 0.0 { generated as f64 / secs } else { 0.0 }
        );

        Ok(tokenizer.decode(&output, true)?)
    }

    /// Run and write the decoded text plus a trailing newline to `out`.
    pub fn run_to<W: Write>(&self, prompt: &str, out: &mut W) -> NlpResult<()> {
        let text = self.run(prompt)?;
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}
