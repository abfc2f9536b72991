// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `show` command.
//!
//! ```text
//! env::extract(process env)
//!     |  merge, --set wins
//! env::extract_from(--set) --> assemble --> render
//!                                  |
//!                   --check: missing_required + invalid_values
//! ```

use anyhow::Context;

use crate::cli::global::GlobalOptions;
use crate::cli::show::{ShowArgs, ShowFormat};
use crate::config::raw::RawEnvironment;
use crate::config::{Configuration, assemble};
use crate::env::{self, EnvPlatform};
use crate::error::{IntlayerError, Result};

/// Run the show command.
///
/// # Errors
///
/// Returns an error if a `--set` entry is malformed, the environment cannot
/// be read, or `--check` finds a problem.
pub fn run_show_command(args: &ShowArgs, global: &GlobalOptions) -> Result<()> {
    let raw = env::extract(global.platform)?;
    let config = assemble_with_overrides(raw, &global.var_overrides()?, global.platform)?;
    print!("{}", render_show(&config, args.format)?);

    if args.check {
        check_configuration(&config)?;
    }
    Ok(())
}

/// Assemble `raw` with `--set` assignments layered on top.
///
/// The assignments are extracted on their own, so any of them beats every
/// process variable, whichever prefix either one uses.
///
/// # Errors
///
/// Returns an error if the assignments cannot be collected.
pub fn assemble_with_overrides(
    mut raw: RawEnvironment,
    overrides: &[(String, String)],
    platform: EnvPlatform,
) -> Result<Configuration> {
    raw.merge(env::extract_from(overrides.iter().cloned(), platform)?);
    Ok(assemble(&raw))
}

/// Render the configuration in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_show(config: &Configuration, format: ShowFormat) -> Result<String> {
    match format {
        ShowFormat::Json => {
            let json =
                serde_json::to_string_pretty(config).context("failed to serialize configuration")?;
            Ok(format!("{json}\n"))
        }
        ShowFormat::Options => {
            let mut out = config.format_options().join("\n");
            out.push('\n');
            Ok(out)
        }
    }
}

/// Fail when a required field is undefined or a defined value is unusable.
///
/// Every problem is logged; the returned error names the first one, missing
/// fields before invalid values.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequired`](crate::error::ConfigError::MissingRequired)
/// or [`ConfigError::InvalidValue`](crate::error::ConfigError::InvalidValue)
/// wrapped in an [`IntlayerError`].
pub fn check_configuration(config: &Configuration) -> Result<()> {
    let mut problems = config.missing_required();
    problems.extend(config.invalid_values());
    let count = problems.len();
    for err in &problems {
        tracing::error!("{err}");
    }

    match problems.into_iter().next() {
        Some(first) => Err(anyhow::Error::from(IntlayerError::from(first))
            .context(format!("{count} configuration problem(s)"))),
        None => Ok(()),
    }
}
