//! Facade re-exports for granite-nlp

pub use crate::api::error::*;
pub use crate::api::types::*;
pub use crate::core::granite::GraniteModel;
pub use crate::core::hub_source::HubModelSource;
pub use crate::core::pipeline::Pipeline;
pub use granite_tokenizer::Tokenizer;
