// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw value coercion.
//!
//! ```text
//! coerce(raw, kind)
//!   string   Text as-is, List joined with ','
//!   number   trimmed Text -> finite f64
//!   boolean  trimmed Text -> "true" | "false" (ASCII case-insensitive)
//!   array    List as-is, "[...]" as JSON, otherwise split on ','
//! ```
//!
//! Anything else yields `None`. Coercion never fails.

use super::raw::RawValue;
use super::schema::CoercionKind;

/// A coerced value, tagged by the kind that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Array(Vec<String>),
}

impl CoercedValue {
    #[must_use]
    pub const fn kind(&self) -> CoercionKind {
        match self {
            Self::String(_) => CoercionKind::String,
            Self::Number(_) => CoercionKind::Number,
            Self::Boolean(_) => CoercionKind::Boolean,
            Self::Array(_) => CoercionKind::Array,
        }
    }
}

/// Coerce an optional raw value to `kind`.
#[must_use]
pub fn coerce(raw: Option<&RawValue>, kind: CoercionKind) -> Option<CoercedValue> {
    let raw = raw?;
    match kind {
        CoercionKind::String => Some(CoercedValue::String(coerce_string(raw))),
        CoercionKind::Number => coerce_number(raw).map(CoercedValue::Number),
        CoercionKind::Boolean => coerce_boolean(raw).map(CoercedValue::Boolean),
        CoercionKind::Array => coerce_array(raw).map(CoercedValue::Array),
    }
}

fn coerce_string(raw: &RawValue) -> String {
    match raw {
        RawValue::Text(text) => text.clone(),
        RawValue::List(items) => items.join(","),
    }
}

fn coerce_number(raw: &RawValue) -> Option<f64> {
    let RawValue::Text(text) = raw else {
        return None;
    };
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn coerce_boolean(raw: &RawValue) -> Option<bool> {
    let RawValue::Text(text) = raw else {
        return None;
    };
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn coerce_array(raw: &RawValue) -> Option<Vec<String>> {
    match raw {
        RawValue::List(items) => Some(items.clone()),
        RawValue::Text(text) if text.trim_start().starts_with('[') => {
            serde_json::from_str::<Vec<String>>(text).ok()
        }
        RawValue::Text(text) => Some(
            text.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(ToString::to_string)
                .collect(),
        ),
    }
}

/// Encode a list so that [`coerce`] with [`CoercionKind::Array`] reads it back
/// unchanged.
///
/// Plain comma-joined text when that is lossless, a JSON array otherwise.
#[must_use]
pub fn encode_list(items: &[String]) -> String {
    let plain = items.iter().all(|item| {
        !item.is_empty() && !item.contains(',') && item.trim() == item
    }) && items
        .first()
        .is_none_or(|first| !first.starts_with('['));

    if plain {
        items.join(",")
    } else {
        // Vec<String> always serializes
        serde_json::to_string(items).unwrap_or_default()
    }
}
