// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `export` command.
//!
//! ```text
//! TOML files --ConfigLoader--> Configuration --to_raw--> env_vars(platform)
//!                                                            |
//!                                                   dotenv | json
//! ```

use std::path::PathBuf;

use anyhow::Context;

use crate::cli::export::{ExportArgs, ExportFormat};
use crate::cli::global::GlobalOptions;
use crate::config::Configuration;
use crate::config::loader::ConfigLoader;
use crate::env::{self, EnvPlatform};
use crate::error::Result;

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "intlayer.toml";

/// Run the export command.
///
/// # Errors
///
/// Returns an error if a configuration file is missing or invalid.
pub fn run_export_command(args: &ExportArgs, global: &GlobalOptions) -> Result<()> {
    let loader = build_config_loader(&args.configs);
    for line in loader.format_loaded_files() {
        tracing::info!("loading {line}");
    }
    let config = loader.build()?;
    print!("{}", render_export(&config, global.platform, args.format)?);
    Ok(())
}

/// Loader over the given files in order, or [`DEFAULT_CONFIG_FILE`].
#[must_use]
pub fn build_config_loader(configs: &[PathBuf]) -> ConfigLoader {
    if configs.is_empty() {
        return ConfigLoader::new().add_toml_file(DEFAULT_CONFIG_FILE);
    }
    configs
        .iter()
        .fold(ConfigLoader::new(), ConfigLoader::add_toml_file)
}

/// Render the defined fields as variables for `platform`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_export(
    config: &Configuration,
    platform: EnvPlatform,
    format: ExportFormat,
) -> Result<String> {
    let vars = env::env_vars(&config.to_raw(), platform);
    match format {
        ExportFormat::Dotenv => env::format_dotenv(&vars),
        ExportFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = vars
                .into_iter()
                .map(|(key, value)| (key, serde_json::Value::String(value)))
                .collect();
            let json = serde_json::to_string_pretty(&map).context("failed to serialize variables")?;
            Ok(format!("{json}\n"))
        }
    }
}
