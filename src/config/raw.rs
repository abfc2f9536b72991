// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw, uncoerced environment values.
//!
//! ```text
//! RawEnvironment
//!   internationalization -> { locales: "en,fr", defaultLocale: "en" }
//!   middleware           -> { prefixDefault: "true", ... }
//!   content              -> { fileExtensions: ["a", "b"], ... }
//!   editor               -> { port: "8000" }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::schema::Section;

/// A single raw value as supplied by an extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for RawValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(ToString::to_string).collect())
    }
}

/// Section -> field -> raw value.
///
/// Fields not present in the map are absent; the assembler turns them into
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEnvironment {
    sections: BTreeMap<Section, BTreeMap<String, RawValue>>,
}

impl RawEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous one for the same field.
    pub fn insert(&mut self, section: Section, field: impl Into<String>, value: impl Into<RawValue>) {
        self.sections
            .entry(section)
            .or_default()
            .insert(field.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, section: Section, field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(section, field, value);
        self
    }

    /// Layer `other` on top: its fields replace those already present.
    pub fn merge(&mut self, other: Self) {
        for (section, fields) in other.sections {
            self.sections.entry(section).or_default().extend(fields);
        }
    }

    #[must_use]
    pub fn get(&self, section: Section, field: &str) -> Option<&RawValue> {
        self.sections.get(&section)?.get(field)
    }

    /// Number of fields across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(section, field, value)` in section then field order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str, &RawValue)> {
        self.sections.iter().flat_map(|(section, fields)| {
            fields
                .iter()
                .map(move |(name, value)| (*section, name.as_str(), value))
        })
    }
}
