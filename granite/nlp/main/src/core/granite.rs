//! Greedy generation over candle's Granite implementation.

use crate::api::error::{NlpError, NlpResult};
use crate::api::types::LanguageModel;
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::generation::{LogitsProcessor, Sampling};
use candle_transformers::models::granite::{
    Cache, Config, Granite, GraniteConfig, GraniteEosToks,
};
use granite_hub::ModelBundle;
use std::time::Instant;

/// Seed handed to the logits processor. Argmax selection never draws from it.
const SAMPLING_SEED: u64 = 299_792_458;

/// Weights are loaded as float32 on every device.
const DTYPE: DType = DType::F32;

/// End-of-text token of the Granite tokenizer.
pub(crate) const EOS_TOKEN: &str = "<|end_of_text|>";

/// A Granite checkpoint loaded from mmaped SafeTensors.
pub struct GraniteModel {
    model: Granite,
    config: Config,
    eos: Option<GraniteEosToks>,
    device: Device,
}

impl GraniteModel {
    /// Build the model from a downloaded bundle.
    pub fn from_bundle(bundle: &ModelBundle, device: &Device) -> NlpResult<Self> {
        let raw = bundle.config_bytes()?;
        let config: GraniteConfig = serde_json::from_slice(&raw).map_err(|e| {
            NlpError::ModelError(format!("invalid config.json for {}: {}", bundle.model_id, e))
        })?;
        if bundle.weight_files.is_empty() {
            return Err(NlpError::ModelError(format!(
                "no weight files for {}",
                bundle.model_id
            )));
        }

        let t = Instant::now();
        // SAFETY: the hub cache is not rewritten while this process maps it.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&bundle.weight_files, DTYPE, device)? };
        let model = Self::load(vb, config, device)?;
        log::info!(
            "loaded {} ({:?} on {:?}) in {:.1}s",
            bundle.model_id,
            DTYPE,
            device,
            t.elapsed().as_secs_f64()
        );
        Ok(model)
    }

    fn load(vb: VarBuilder, config: GraniteConfig, device: &Device) -> NlpResult<Self> {
        let config = config.into_config(false);
        let model = Granite::load(vb, &config)?;
        Ok(Self {
            model,
            eos: config.eos_token_id.clone(),
            config,
            device: device.clone(),
        })
    }

    /// Whether config.json named any end-of-sequence id.
    pub fn has_eos(&self) -> bool {
        self.eos.is_some()
    }

    /// Stop on `id` when config.json did not name an end-of-sequence token.
    pub fn with_eos_fallback(mut self, id: u32) -> Self {
        if self.eos.is_none() {
            self.eos = Some(GraniteEosToks::Single(id));
        }
        self
    }
}

impl LanguageModel for GraniteModel {
    fn generate(&self, input: &[u32], max_new_tokens: usize) -> NlpResult<Vec<u32>> {
        if input.is_empty() {
            return Err(NlpError::GenerationError(
                "prompt encoded to zero tokens".to_string(),
            ));
        }

        let mut cache = Cache::new(true, DTYPE, &self.config, &self.device)?;
        let mut logits_processor = LogitsProcessor::from_sampling(SAMPLING_SEED, Sampling::ArgMax);
        let mut tokens = input.to_vec();
        let mut index_pos = 0;

        for index in 0..max_new_tokens {
            // Prefill the whole prompt once, then feed one token per step.
            let context_size = if index > 0 { 1 } else { tokens.len() };
            let ctxt = &tokens[tokens.len() - context_size..];
            let step_input = Tensor::new(ctxt, &self.device)?.unsqueeze(0)?;
            let logits = self.model.forward(&step_input, index_pos, &mut cache)?;
            let logits = logits.squeeze(0)?;
            index_pos += ctxt.len();

            let next_token = logits_processor.sample(&logits)?;
            tokens.push(next_token);
            if is_eos(self.eos.as_ref(), next_token) {
                log::debug!("eos after {} tokens", index + 1);
                break;
            }
        }

        Ok(tokens)
    }
}

fn is_eos(eos: Option<&GraniteEosToks>, token: u32) -> bool {
    match eos {
        Some(GraniteEosToks::Single(id)) => *id == token,
        Some(GraniteEosToks::Multiple(ids)) => ids.contains(&token),
        None => false,
    }
}
