pub type TokenizerResult<T> = Result<T, TokenizerError>;

#[derive(thiserror::Error, Debug)]
pub enum TokenizerError {
    #[error("Failed to load tokenizer file {path}: {reason}")]
    Load { path: String, reason: String },
    #[error("Tokenizer encode failed: {0}")]
    Encode(String),
    #[error("Tokenizer decode failed: {0}")]
    Decode(String),
}
