// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvError, IntlayerError, IntlayerResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingRequired {
        section: "internationalization".to_string(),
        key: "defaultLocale".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'defaultLocale' in section '[internationalization]'"
    );
}

#[test]
fn test_env_error_wraps_into_top_level() {
    let err: IntlayerError = EnvError::InvalidAssignment("NO_EQUALS".to_string()).into();
    insta::assert_snapshot!(
        err.to_string(),
        @"env error: invalid variable assignment 'NO_EQUALS', expected KEY=VALUE"
    );
}

#[test]
fn test_intlayer_error_size() {
    // Box pointer + discriminant
    let size = std::mem::size_of::<IntlayerError>();
    assert!(size <= 16, "IntlayerError is {size} bytes, expected <= 16");
}

#[test]
fn test_intlayer_result_size() {
    let size = std::mem::size_of::<IntlayerResult<()>>();
    assert!(size <= 16, "IntlayerResult<()> is {size} bytes, expected <= 16");
}
