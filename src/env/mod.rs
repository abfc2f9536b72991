// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable extraction and export.
//!
//! # Variable Names
//!
//! ```text
//! <platform prefix>_<field env key>
//!
//! plain      INTLAYER_DEFAULT_LOCALE=en
//! next       NEXT_PUBLIC_INTLAYER_DEFAULT_LOCALE=en
//! vite       VITE_INTLAYER_DEFAULT_LOCALE=en
//! react-app  REACT_APP_INTLAYER_DEFAULT_LOCALE=en
//! ```
//!
//! # Extraction Precedence
//!
//! ```text
//! INTLAYER_*  (always read)
//!     |
//!     v
//! <platform>_INTLAYER_*  (overrides per field)
//!     |
//!     v
//! RawEnvironment
//! ```
//!
//! Key matching ignores case. When two variables differ only in case, the
//! later one wins. Values are kept as text; coercion happens in
//! [`assemble`](crate::config::assemble).

#[cfg(test)]
mod tests;

use std::ffi::OsString;

use config::Source as _;

use crate::config::coerce::encode_list;
use crate::config::raw::{RawEnvironment, RawValue};
use crate::config::schema::{self, FieldSpec, SCHEMA};
use crate::error::{EnvError, Result};

/// Bundler-specific variable prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EnvPlatform {
    /// `INTLAYER_*`
    #[default]
    Plain,
    /// `NEXT_PUBLIC_INTLAYER_*`
    Next,
    /// `VITE_INTLAYER_*`
    Vite,
    /// `REACT_APP_INTLAYER_*`
    ReactApp,
}

impl EnvPlatform {
    /// Prefix without the trailing separator.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Plain => "INTLAYER",
            Self::Next => "NEXT_PUBLIC_INTLAYER",
            Self::Vite => "VITE_INTLAYER",
            Self::ReactApp => "REACT_APP_INTLAYER",
        }
    }

    /// Full variable name for a field.
    #[must_use]
    pub fn key(self, spec: &FieldSpec) -> String {
        format!("{}_{}", self.prefix(), spec.env)
    }
}

impl std::fmt::Display for EnvPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Next => write!(f, "next"),
            Self::Vite => write!(f, "vite"),
            Self::ReactApp => write!(f, "react-app"),
        }
    }
}

/// Extract raw values from the process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns an error if a variable value cannot be read as text.
pub fn extract(platform: EnvPlatform) -> Result<RawEnvironment> {
    extract_from(utf8_vars(std::env::vars_os()), platform)
}

/// Keep the variables whose name and value are both valid UTF-8.
pub fn utf8_vars<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                let key = key.unwrap_or_else(|key| key.to_string_lossy().into_owned());
                tracing::debug!(key = %key, "skipping variable that is not valid UTF-8");
                None
            }
        })
        .collect()
}

/// Extract raw values from the given variables.
///
/// `INTLAYER_*` variables are read first; for any other platform its
/// prefixed variables then override field by field. Variables with a known
/// prefix but an unknown field key are skipped, as are names that are not
/// ASCII. Names are compared ignoring case; among names that differ only in
/// case, the one that comes last in `vars` wins.
///
/// # Errors
///
/// Returns an error if a variable value cannot be read as text.
pub fn extract_from<I, K, V>(vars: I, platform: EnvPlatform) -> Result<RawEnvironment>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    // Case variants collide here, in input order; `Environment` lowercases names
    let mut map = config::Map::new();
    for (key, value) in vars {
        let key: String = key.into();
        if !key.is_ascii() {
            tracing::debug!(key = %key, "ignoring non-ASCII variable name");
            continue;
        }
        map.insert(key.to_ascii_uppercase(), value.into());
    }

    let mut layers = vec![EnvPlatform::Plain];
    if platform != EnvPlatform::Plain {
        layers.push(platform);
    }

    let mut raw = RawEnvironment::new();
    for layer in layers {
        let collected = config::Environment::with_prefix(layer.prefix())
            .prefix_separator("_")
            .source(Some(map.clone()))
            .collect()
            .map_err(EnvError::from)?;

        // Map iteration order is unspecified; sort for stable logs
        let mut collected: Vec<_> = collected.into_iter().collect();
        collected.sort_by(|(a, _), (b, _)| a.cmp(b));

        for (key, value) in collected {
            let Some(spec) = schema::find_by_env(&key) else {
                tracing::debug!(platform = %layer, key = %key, "ignoring unknown variable");
                continue;
            };
            let value = value.into_string().map_err(EnvError::from)?;
            raw.insert(spec.section, spec.name, value);
        }
    }

    tracing::debug!(%platform, fields = raw.len(), "extracted environment");
    Ok(raw)
}

/// Variables for every defined field, in schema order.
#[must_use]
pub fn env_vars(raw: &RawEnvironment, platform: EnvPlatform) -> Vec<(String, String)> {
    SCHEMA
        .iter()
        .filter_map(|spec| {
            let value = match raw.get(spec.section, spec.name)? {
                RawValue::Text(text) => text.clone(),
                RawValue::List(items) => encode_list(items),
            };
            Some((platform.key(spec), value))
        })
        .collect()
}

/// Render variables as `.env` lines.
///
/// Values containing whitespace, quotes, `#`, `$` or backslashes are written
/// as JSON strings, which dotenv loaders read as double-quoted values.
///
/// # Errors
///
/// Returns an error if a value cannot be JSON-encoded.
pub fn format_dotenv(vars: &[(String, String)]) -> Result<String> {
    let mut out = String::new();
    for (key, value) in vars {
        let needs_quotes = value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '#' | '$' | '\\'));
        if needs_quotes {
            out.push_str(&format!("{key}={}\n", serde_json::to_string(value)?));
        } else {
            out.push_str(&format!("{key}={value}\n"));
        }
    }
    Ok(out)
}

/// Split a `KEY=VALUE` assignment.
///
/// # Errors
///
/// Returns [`EnvError::InvalidAssignment`] when there is no `=` or the key is
/// empty.
pub fn parse_assignment(assignment: &str) -> std::result::Result<(String, String), EnvError> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(EnvError::InvalidAssignment(assignment.to_string())),
    }
}
