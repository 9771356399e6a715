//! Error types for NLP operations

use thiserror::Error;

/// Result type for NLP operations
pub type NlpResult<T> = Result<T, NlpError>;

/// Errors that can occur in NLP operations
#[derive(Error, Debug)]
pub enum NlpError {
    #[error("Hub error: {0}")]
    HubError(#[from] granite_hub::HubError),

    #[error("Tokenizer error: {0}")]
    TokenizerError(#[from] granite_tokenizer::TokenizerError),

    #[error("Candle error: {0}")]
    CandleError(#[from] candle_core::Error),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Generation error: {0}")]
    GenerationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
