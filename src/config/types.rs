// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Configuration: InternationalizationConfig, MiddlewareConfig,
//!                ContentConfig, EditorConfig
//! ```
//!
//! Every field is optional: `None` means the environment did not provide a
//! value of the right kind. Nothing here applies defaults or rejects values;
//! see [`Configuration::invalid_values`](super::Configuration::invalid_values).
//!
//! # Enumerated Values
//!
//! ```text
//! ServerSetCookieRule: always | never | <other, kept verbatim>
//! DictionaryOutput:    intlayer | i18next | <other, kept verbatim>
//! ```

use serde::{Deserialize, Serialize};

/// Language/region identifier such as `en` or `fr-CA`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`fr` for `fr-CA`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or(self.0.as_str())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// When the middleware sets the locale cookie on the server.
///
/// Unrecognized rules are kept verbatim in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServerSetCookieRule {
    Always,
    Never,
    Other(String),
}

impl ServerSetCookieRule {
    /// Whether this is a rule the middleware understands.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for ServerSetCookieRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
            Self::Other(rule) => f.write_str(rule),
        }
    }
}

impl From<String> for ServerSetCookieRule {
    fn from(rule: String) -> Self {
        match rule.as_str() {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Other(rule),
        }
    }
}

impl From<&str> for ServerSetCookieRule {
    fn from(rule: &str) -> Self {
        Self::from(rule.to_string())
    }
}

impl From<ServerSetCookieRule> for String {
    fn from(rule: ServerSetCookieRule) -> Self {
        match rule {
            ServerSetCookieRule::Other(rule) => rule,
            known => known.to_string(),
        }
    }
}

/// Format of generated dictionary artifacts.
///
/// Unrecognized formats are kept verbatim in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DictionaryOutput {
    Intlayer,
    I18next,
    Other(String),
}

impl DictionaryOutput {
    /// Whether this is a format the build understands.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for DictionaryOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Intlayer => write!(f, "intlayer"),
            Self::I18next => write!(f, "i18next"),
            Self::Other(format) => f.write_str(format),
        }
    }
}

impl From<String> for DictionaryOutput {
    fn from(format: String) -> Self {
        match format.as_str() {
            "intlayer" => Self::Intlayer,
            "i18next" => Self::I18next,
            _ => Self::Other(format),
        }
    }
}

impl From<&str> for DictionaryOutput {
    fn from(format: &str) -> Self {
        Self::from(format.to_string())
    }
}

impl From<DictionaryOutput> for String {
    fn from(format: DictionaryOutput) -> Self {
        match format {
            DictionaryOutput::Other(format) => format,
            known => known.to_string(),
        }
    }
}

/// Editor port as given, before any range check.
///
/// Holds the coerced number unchanged; [`as_u16`](Self::as_u16) narrows it to
/// a usable TCP port.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct EditorPort(f64);

impl EditorPort {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// The port when it is an integer in `0..=65535`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "range and integrality are checked first"
    )]
    pub fn as_u16(self) -> Option<u16> {
        (self.0.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&self.0))
            .then_some(self.0 as u16)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "range and integrality are checked first"
    )]
    fn as_i64(self) -> Option<i64> {
        // 2^63 as f64; the upper bound is exclusive
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        (self.0.fract() == 0.0 && (-LIMIT..LIMIT).contains(&self.0)).then_some(self.0 as i64)
    }
}

impl From<u16> for EditorPort {
    fn from(port: u16) -> Self {
        Self(f64::from(port))
    }
}

impl std::fmt::Display for EditorPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EditorPort {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.as_i64() {
            Some(port) => serializer.serialize_i64(port),
            None => serializer.serialize_f64(self.0),
        }
    }
}

/// Locale selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InternationalizationConfig {
    /// Supported locales, in preference order.
    pub locales: Option<Vec<Locale>>,
    /// Locale used when none can be negotiated.
    pub default_locale: Option<Locale>,
}

/// Locale-routing middleware settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MiddlewareConfig {
    /// Request header carrying the locale.
    pub header_name: Option<String>,
    /// Cookie carrying the locale.
    pub cookie_name: Option<String>,
    /// Prefix URLs of the default locale too.
    pub prefix_default: Option<bool>,
    /// Base path of the application.
    pub base_path: Option<String>,
    /// When the server sets the locale cookie.
    pub server_set_cookie: Option<ServerSetCookieRule>,
    /// Never prefix URLs with a locale.
    pub no_prefix: Option<bool>,
}

/// Content discovery and build output layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Extensions of content declaration files.
    pub file_extensions: Option<Vec<String>>,
    /// Project root.
    pub base_dir: Option<String>,
    pub content_dir_name: Option<String>,
    pub content_dir: Option<String>,
    /// Paths skipped during content discovery.
    pub excluded_path: Option<Vec<String>>,
    pub result_dir_name: Option<String>,
    pub result_dir: Option<String>,
    pub module_augmentation_dir_name: Option<String>,
    pub module_augmentation_dir: Option<String>,
    /// Formats of generated dictionaries.
    pub dictionary_output: Option<Vec<DictionaryOutput>>,
    pub dictionaries_dir_name: Option<String>,
    pub dictionaries_dir: Option<String>,
    pub i18n_dictionaries_dir_name: Option<String>,
    pub i18n_dictionaries_dir: Option<String>,
    pub type_dir_name: Option<String>,
    pub types_dir: Option<String>,
    pub main_dir_name: Option<String>,
    pub main_dir: Option<String>,
    /// Glob patterns of watched content files.
    pub watched_files_pattern: Option<Vec<String>>,
    /// Watched patterns joined with the content directory.
    pub watched_files_pattern_with_path: Option<Vec<String>>,
    pub output_files_pattern_with_path: Option<String>,
}

/// Visual editor server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub port: Option<EditorPort>,
}
