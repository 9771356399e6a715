pub use crate::spi::contract::Tokenizer;
pub use crate::api::error::{TokenizerError, TokenizerResult};
pub use crate::core::hf::HFTokenizer;
