// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!     IntlayerError (16 bytes)
//!             |
//!        +----+----+
//!        |         |
//!        v         v
//!     Config      Env
//!      Box        Box
//!
//! Sub-errors (unboxed internally):
//!   Config  MissingRequired, InvalidValue
//!   Env     InvalidAssignment, Source
//! ```
//!
//! Coercion never produces an error: an absent or malformed value becomes
//! `None` in the assembled configuration. These types cover the edges around
//! it (file loading, variable collection, CLI input).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`IntlayerError`].
pub type IntlayerResult<T> = std::result::Result<T, IntlayerError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum IntlayerError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Environment variable error.
    #[error("env error: {0}")]
    Env(#[from] Box<EnvError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for IntlayerError {
                fn from(err: $error) -> Self {
                    IntlayerError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    EnvError => Env,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field is undefined after assembly.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingRequired { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Env Errors ---

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A `KEY=VALUE` assignment without `=` or with an empty key.
    #[error("invalid variable assignment '{0}', expected KEY=VALUE")]
    InvalidAssignment(String),

    /// The environment source could not be collected.
    #[error("failed to collect environment: {0}")]
    Source(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests;
