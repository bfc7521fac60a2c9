use anyhow::{Context, Result};
use prince_buttons::presets::Preset;
use prince_buttons::util::init_tracing;
use prince_buttons::{ButtonBuilder, ButtonConfig};
use serde_json::Value;
use std::env;
use std::io::Read;

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    // Check for --config flag
    let config_arg = args
        .iter()
        .find(|a| a.starts_with("--config="))
        .and_then(|a| a.strip_prefix("--config="))
        .map(|s| s.to_string());

    // Check for --preset flag
    let preset_arg = args
        .iter()
        .find(|a| a.starts_with("--preset="))
        .and_then(|a| a.strip_prefix("--preset="))
        .map(|s| s.to_string());

    // First non-flag positional arg is the input file; stdin otherwise
    let input_arg = args.iter().skip(1).find(|a| !a.starts_with('-')).cloned();

    if let Some(name) = preset_arg {
        let preset: Preset = name.parse().map_err(anyhow::Error::msg)?;
        return print_json(&preset.buttons());
    }

    let config = match config_arg {
        Some(path) => {
            tracing::info!("Loading button configuration from: {}", path);
            ButtonConfig::load_from_file(&path)?
        }
        None => ButtonConfig::default(),
    }
    .with_env_overrides();
    tracing::debug!(
        "Using view_once={} header_type={}",
        config.view_once,
        config.header_type
    );

    let builder = ButtonBuilder::with_config(config);

    let raw = match input_arg {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            buf
        }
    };

    let doc: Value = serde_json::from_str(&raw).context("Input is not valid JSON")?;

    let out = builder.process_document(&doc)?;
    if out.as_array().is_some_and(|buttons| buttons.is_empty()) {
        tracing::warn!("Input contained no button records");
    }
    print_json(&out)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}
