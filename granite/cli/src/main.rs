mod args;

use std::io;
use std::process;

use anyhow::{Context, Result};
use candle_core::Device;
use clap::error::ErrorKind;
use clap::Parser;

use granite_hub::{CacheDir, HubApi};
use granite_nlp::{HubModelSource, Pipeline, MODEL_ID};

use args::Cli;

/// Parse arguments; help and version exit 0, every other parse failure exits 1.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // The hub library reads its cache location from the environment, so this
    // has to happen before anything touches the hub.
    let cache = CacheDir::resolve().context("Failed to resolve cache directory")?;
    cache
        .install()
        .with_context(|| format!("Failed to create cache directory: {}", cache.path().display()))?;

    let cli = parse_args();
    let prompt = cli.prompt_text();
    log::debug!(
        "prompt ({} form): {} chars",
        if cli.prompt { "--prompt" } else { "bare" },
        prompt.len()
    );

    let device = Device::cuda_if_available(0).context("Failed to select device")?;
    log::info!("device: {:?}", device);

    let source = HubModelSource::new(HubApi::new(), device);
    let pipeline = Pipeline::new(&source, MODEL_ID);

    let mut stdout = io::stdout().lock();
    pipeline
        .run_to(&prompt, &mut stdout)
        .with_context(|| format!("Generation with {} failed", MODEL_ID))?;

    Ok(())
}
