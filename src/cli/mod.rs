// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for intlayer-env using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! intlayer-env [global options] <command>
//! show [--format json|options] [--check]
//! export [--format dotenv|json] [CONFIG...]
//! fields
//! version
//! ```

pub mod export;
pub mod global;
pub mod show;


use crate::cli::export::ExportArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::show::ShowArgs;
use clap::{Parser, Subcommand};

/// Intlayer environment configuration - Rust Port
///
/// Reads Intlayer configuration from environment variables and writes it back.
#[derive(Debug, Parser)]
#[command(
    name = "intlayer-env",
    author,
    version,
    about = "Intlayer environment configuration tool",
    long_about = "intlayer-env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Assembles the Intlayer configuration (internationalization,\n\
                  middleware, content, editor) from INTLAYER_* environment\n\
                  variables, and exports a TOML configuration as variables for\n\
                  a bundler. See `intlayer-env <command> --help` for more\n\
                  information about a command.",
    after_help = "VARIABLES:\n\n\
                  Every field is read from INTLAYER_<KEY>, e.g. INTLAYER_LOCALES=en,fr.\n\
                  With --platform, the bundler prefix (NEXT_PUBLIC_, VITE_, REACT_APP_)\n\
                  is read as well and wins over the plain variable. Run `intlayer-env\n\
                  fields` for the full list of keys."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Assembles the configuration from the environment and prints it.
    Show(ShowArgs),

    /// Prints a TOML configuration as environment variables.
    Export(ExportArgs),

    /// Lists every configuration field with its kind and variable name.
    Fields,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
