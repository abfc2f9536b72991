// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Intlayer configuration: schema, coercion, and assembly.
//!
//! # Data Flow
//!
//! ```text
//! env vars --env::extract--> RawEnvironment --assemble--> Configuration
//!                                                              |
//! TOML --ConfigLoader--------------------------------------->--+
//!                                                              |
//!                         env::env_vars <--to_raw--------------+
//! ```
//!
//! # Sections
//!
//! ```text
//! internationalization  locales, defaultLocale
//! middleware            headerName, cookieName, prefixDefault, basePath,
//!                       serverSetCookie, noPrefix
//! content               directories, file patterns, dictionaryOutput
//! editor                port
//! ```
//!
//! The field table lives in [`schema::SCHEMA`]. Fields the environment does
//! not provide, or provides with the wrong kind, are `None`. Values are never
//! checked during assembly; callers decide what to do about them (see
//! [`Configuration::missing_required`] and [`Configuration::invalid_values`]).

pub mod assemble;
pub mod coerce;
pub mod loader;
pub mod raw;
pub mod schema;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

pub use assemble::assemble;
use loader::ConfigLoader;
use raw::RawValue;
use schema::{FieldSpec, SCHEMA, Section};
use types::{ContentConfig, EditorConfig, InternationalizationConfig, MiddlewareConfig};

/// Complete toolkit configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Locale selection.
    pub internationalization: InternationalizationConfig,
    /// Locale-routing middleware.
    pub middleware: MiddlewareConfig,
    /// Content discovery and output layout.
    pub content: ContentConfig,
    /// Visual editor.
    pub editor: EditorConfig,
}

impl Configuration {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use intlayer_env::config::Configuration;
    ///
    /// let config = Configuration::builder()
    ///     .add_toml_file("intlayer.toml")
    ///     .add_toml_file_optional("intlayer.local.toml")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Configuration` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Configuration` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Schema fields that are `None` in this configuration, in table order.
    #[must_use]
    pub fn undefined_fields(&self) -> Vec<&'static FieldSpec> {
        let raw = self.to_raw();
        SCHEMA
            .iter()
            .filter(|spec| raw.get(spec.section, spec.name).is_none())
            .collect()
    }

    /// One [`ConfigError::MissingRequired`] per required field left undefined.
    #[must_use]
    pub fn missing_required(&self) -> Vec<ConfigError> {
        self.undefined_fields()
            .into_iter()
            .filter(|spec| spec.required)
            .map(|spec| ConfigError::MissingRequired {
                section: spec.section.to_string(),
                key: spec.name.to_string(),
            })
            .collect()
    }

    /// One [`ConfigError::InvalidValue`] per defined value the toolkit cannot
    /// use: an unknown cookie rule, an unknown dictionary format, or a port
    /// that is not an integer in `0..=65535`.
    #[must_use]
    pub fn invalid_values(&self) -> Vec<ConfigError> {
        let invalid = |section: Section, key: &str, message: String| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message,
        };

        let mut errors = Vec::new();
        if let Some(rule) = self
            .middleware
            .server_set_cookie
            .as_ref()
            .filter(|rule| !rule.is_known())
        {
            errors.push(invalid(
                Section::Middleware,
                "serverSetCookie",
                format!("expected 'always' or 'never', got '{rule}'"),
            ));
        }
        for format in self.content.dictionary_output.iter().flatten() {
            if !format.is_known() {
                errors.push(invalid(
                    Section::Content,
                    "dictionaryOutput",
                    format!("expected 'intlayer' or 'i18next', got '{format}'"),
                ));
            }
        }
        if let Some(port) = self.editor.port.filter(|port| port.as_u16().is_none()) {
            errors.push(invalid(
                Section::Editor,
                "port",
                format!("expected an integer in 0..=65535, got '{port}'"),
            ));
        }
        errors
    }

    /// Format configuration options for display.
    ///
    /// One `section.field = value` line per schema field, aligned on `=`.
    /// Undefined fields show as `<undefined>`. Lines follow schema order.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let raw = self.to_raw();
        let options: Vec<(String, String)> = SCHEMA
            .iter()
            .map(|spec| {
                let value = match raw.get(spec.section, spec.name) {
                    Some(RawValue::Text(text)) => text.clone(),
                    Some(RawValue::List(items)) => items.join(","),
                    None => "<undefined>".to_string(),
                };
                (spec.path(), value)
            })
            .collect();

        let max_key_len = options.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
