// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --platform NAME   ← Bundler prefix to read/write (INTLAYER_ is always read)
//! --set KEY=VAL     ← Variable override (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← Also log to a file
//!
//! Precedence: --set (any prefix) > <platform>_INTLAYER_* > INTLAYER_*
//! Within --set, the platform prefix beats INTLAYER_ and later entries win.
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::env::{EnvPlatform, parse_assignment};
use crate::error::EnvError;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Bundler whose variable prefix is used.
    #[arg(
        short = 'p',
        long,
        value_enum,
        default_value_t,
        env = "INTLAYER_ENV_PLATFORM",
        global = true
    )]
    pub platform: EnvPlatform,

    /// Sets a variable, such as 'INTLAYER_LOCALES=en,fr', on top of the process
    /// environment. Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append, global = true)]
    pub vars: Vec<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Parses `--set` assignments in command-line order.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidAssignment`] for the first entry without `=`.
    pub fn var_overrides(&self) -> Result<Vec<(String, String)>, EnvError> {
        self.vars.iter().map(String::as_str).map(parse_assignment).collect()
    }
}
