mod artifacts;
mod cache;
mod cli;
mod config;
mod contract;
mod error;
mod gateway;
mod status;
mod ui;
mod validation;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use artifacts::ArtifactGenerator;
use cache::{CacheConfig, ResponseCache};
use cli::{Cli, Command};
use config::NexiaConfig;
use contract::{Contract, PipelineSummary};
use error::NexiaError;
use gateway::GatewayClient;
use ui::GenerationProgress;
use validation::{validate_business_input, validate_short_input};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = NexiaConfig::load()?;
    let demo_mode = cli.demo || config.demo_mode;

    match cli.command {
        Command::Generate { kind, description } => {
            if config.api_key.is_empty() {
                return Err(NexiaError::Config(
                    "API key missing: set NEXIA_API_KEY or api_key in nexia.toml".into(),
                )
                .into());
            }
            let model = cli.model.unwrap_or_else(|| config.default_model.clone());
            if cli.verbose {
                println!("model: {model} (demo: {demo_mode})");
            }

            let client = GatewayClient::new(config.api_key.clone());
            let mut cache = ResponseCache::new(CacheConfig {
                ttl: Duration::from_secs(config.cache_ttl_secs),
                max_entries: config.cache_max_entries,
            });
            let generator = ArtifactGenerator::new(model, demo_mode);

            let progress = GenerationProgress::start(kind.into(), &description);
            match generator
                .generate(&client, &mut cache, kind.into(), &description)
                .await
            {
                Ok(artifact) => progress.finish_with_artifact(&artifact),
                Err(e) => {
                    progress.finish_with_error(&e.to_string());
                    std::process::exit(1);
                }
            }
        }

        Command::Validate { text, field } => {
            let result = if demo_mode {
                validate_short_input(&text, &field, 3)
            } else {
                validate_business_input(&text, &field, 10)
            };
            ui::print_validation(&result);
            if !result.valid {
                std::process::exit(1);
            }
        }

        Command::Status { value } => {
            ui::print_status_mapping(&value);
        }

        Command::Pipeline { file } => {
            let contents = std::fs::read_to_string(&file)?;
            let contracts: Vec<Contract> = serde_json::from_str(&contents)?;
            let summary = PipelineSummary::from_contracts(&contracts);
            ui::print_pipeline(&summary);
        }
    }

    Ok(())
}
