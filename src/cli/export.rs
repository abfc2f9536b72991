// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `export` command.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format of `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// `KEY=value` lines.
    #[default]
    Dotenv,
    /// JSON object of variable name to value.
    Json,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t)]
    pub format: ExportFormat,

    /// TOML configuration files, later ones override earlier ones.
    /// Defaults to `intlayer.toml` in the current directory.
    #[arg(value_name = "CONFIG")]
    pub configs: Vec<PathBuf>,
}
