pub mod cli;
pub mod core;
pub mod providers;

use crate::core::{CurrencyRegistry, config::AppConfig};
use crate::providers::tgju::TgjuProvider;
use anyhow::{Context, Result};
use tracing::{debug, info};

pub use crate::core::{ErrorKind, PriceError};
pub use crate::providers::tgju::{DEFAULT_BASE_URL, fetch_price};

pub enum AppCommand {
    Price { names: Vec<String> },
    List,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("currate starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let registry = CurrencyRegistry::default();

    match command {
        AppCommand::Price { names } => {
            let tgju = &config.providers.tgju;
            let mut provider = TgjuProvider::new(&tgju.base_url, registry.clone());
            if let Some(timeout) = tgju.timeout() {
                provider = provider
                    .with_timeout(timeout)
                    .context("Failed to build HTTP client")?;
            }
            cli::price::run(&provider, &registry, &names).await
        }
        AppCommand::List => {
            cli::list::run(&registry);
            Ok(())
        }
    }
}
