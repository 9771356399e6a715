//! Tokenizer and model resolution through the hub cache.

use crate::api::error::NlpResult;
use crate::api::types::{LanguageModel, ModelSource};
use crate::core::granite::{GraniteModel, EOS_TOKEN};
use candle_core::Device;
use granite_hub::HubApi;
use granite_tokenizer::{HFTokenizer, Tokenizer};

/// Loads `tokenizer.json` and Granite weights via [`HubApi`], downloading
/// whatever the local cache does not hold yet.
pub struct HubModelSource {
    api: HubApi,
    device: Device,
}

impl HubModelSource {
    pub fn new(api: HubApi, device: Device) -> Self {
        Self { api, device }
    }
}

impl ModelSource for HubModelSource {
    fn load_tokenizer(&self, model_id: &str) -> NlpResult<Box<dyn Tokenizer>> {
        let path = self.api.download_tokenizer_sync(model_id)?;
        log::info!("tokenizer: {}", path.display());
        Ok(Box::new(HFTokenizer::from_file(&path)?))
    }

    fn load_model(&self, model_id: &str) -> NlpResult<Box<dyn LanguageModel>> {
        if self.api.is_cached(model_id) {
            log::info!("{} found in {}", model_id, self.api.cache_dir().display());
        } else {
            log::info!(
                "{} not cached, downloading into {}",
                model_id,
                self.api.cache_dir().display()
            );
        }
        let bundle = self.api.download_model_sync(model_id)?;
        log::info!(
            "weights: {} file(s) in {}",
            bundle.weight_files.len(),
            bundle.model_dir.display()
        );
        let mut model = GraniteModel::from_bundle(&bundle, &self.device)?;
        if !model.has_eos() {
            let tokenizer = HFTokenizer::from_file(&self.api.download_tokenizer_sync(model_id)?)?;
            match tokenizer.token_to_id(EOS_TOKEN) {
                Some(id) => {
                    log::info!("config.json names no eos_token_id, stopping on {} ({})", EOS_TOKEN, id);
                    model = model.with_eos_fallback(id);
                }
                None => log::warn!("no end-of-sequence token known for {}", model_id),
            }
        }
        Ok(Box::new(model))
    }
}
