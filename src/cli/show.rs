// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `show` command.

use clap::{Args, ValueEnum};

/// Output format of `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShowFormat {
    /// Pretty-printed JSON, `null` for undefined fields.
    #[default]
    Json,
    /// Aligned `section.field = value` lines.
    Options,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t)]
    pub format: ShowFormat,

    /// Fail if a required field is undefined or a value is invalid.
    #[arg(long)]
    pub check: bool,
}
