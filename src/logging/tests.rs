// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::from_u8(7).is_none());

    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[logging]': log level must be 0-6, got 7"
    );
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(
        filters,
        vec![
            "off",
            "error",
            "warn",
            "warn,intlayer_env=info",
            "warn,intlayer_env=debug",
            "warn,intlayer_env=trace",
            "trace",
        ]
    );
}

#[test]
fn test_log_level_u8_roundtrip() {
    let level = LogLevel::try_from(4).unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(u8::from(level), 4);
    assert_eq!(level.as_u8(), 4);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_log_file("logs/intlayer-env.log".to_string())
        .with_show_target(true)
        .build();
    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("logs/intlayer-env.log"));
    assert!(config.show_target());
}
