// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schema listing command.

use crate::config::schema::SCHEMA;
use crate::env::EnvPlatform;

/// Display every configuration field.
pub fn run_fields_command(platform: EnvPlatform) {
    for line in format_fields(platform) {
        println!("{line}");
    }
}

/// One aligned line per field: path, kind, requirement, variable name.
#[must_use]
pub fn format_fields(platform: EnvPlatform) -> Vec<String> {
    let max_path_len = SCHEMA
        .iter()
        .map(|spec| spec.path().len())
        .max()
        .unwrap_or(0);

    SCHEMA
        .iter()
        .map(|spec| {
            let path = spec.path();
            let kind = spec.kind.to_string();
            let required = if spec.required { "required" } else { "optional" };
            format!(
                "{path:<max_path_len$}  {kind:<7}  {required:<8}  {}",
                platform.key(spec)
            )
        })
        .collect()
}
