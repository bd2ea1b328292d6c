//! File logging. The terminal belongs to the UI, so traces go to `log_file`.
use std::{fs::OpenOptions, path::Path, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::{config::AppConfig, error::Result};

pub fn init(config: &AppConfig) -> Result<()> {
    if let Some(parent) = Path::new(&config.log_file).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(&config.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn directives(level: &str) -> String {
    format!("saldo_tui={level},client={level},api_types={level}")
}
