// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvPlatform, env_vars, extract, extract_from, format_dotenv, parse_assignment, utf8_vars};
use crate::config::raw::{RawEnvironment, RawValue};
use crate::config::schema::{self, Section};

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_platform_keys() {
    let spec = schema::find(Section::Internationalization, "defaultLocale").unwrap();
    let keys: Vec<_> = [
        EnvPlatform::Plain,
        EnvPlatform::Next,
        EnvPlatform::Vite,
        EnvPlatform::ReactApp,
    ]
    .into_iter()
    .map(|platform| platform.key(spec))
    .collect();
    assert_eq!(
        keys,
        vec![
            "INTLAYER_DEFAULT_LOCALE",
            "NEXT_PUBLIC_INTLAYER_DEFAULT_LOCALE",
            "VITE_INTLAYER_DEFAULT_LOCALE",
            "REACT_APP_INTLAYER_DEFAULT_LOCALE",
        ]
    );
}

#[test]
fn test_extract_plain_variables() {
    let raw = extract_from(
        vars(&[
            ("INTLAYER_LOCALES", "en,fr"),
            ("INTLAYER_EDITOR_PORT", "8000"),
            ("PATH", "/usr/bin"),
        ]),
        EnvPlatform::Plain,
    )
    .unwrap();

    assert_eq!(raw.len(), 2);
    assert_eq!(
        raw.get(Section::Internationalization, "locales"),
        Some(&RawValue::from("en,fr"))
    );
    assert_eq!(raw.get(Section::Editor, "port"), Some(&RawValue::from("8000")));
}

#[test]
fn test_extract_platform_overrides_plain() {
    let input = vars(&[
        ("INTLAYER_DEFAULT_LOCALE", "en"),
        ("INTLAYER_COOKIE_NAME", "INTLAYER_LOCALE"),
        ("VITE_INTLAYER_DEFAULT_LOCALE", "fr"),
        ("NEXT_PUBLIC_INTLAYER_DEFAULT_LOCALE", "es"),
    ]);

    let raw = extract_from(input.clone(), EnvPlatform::Vite).unwrap();
    assert_eq!(
        raw.get(Section::Internationalization, "defaultLocale"),
        Some(&RawValue::from("fr"))
    );
    assert_eq!(
        raw.get(Section::Middleware, "cookieName"),
        Some(&RawValue::from("INTLAYER_LOCALE"))
    );

    let raw = extract_from(input, EnvPlatform::Plain).unwrap();
    assert_eq!(
        raw.get(Section::Internationalization, "defaultLocale"),
        Some(&RawValue::from("en"))
    );
}

#[test]
fn test_extract_ignores_unknown_keys() {
    let raw = extract_from(
        vars(&[("INTLAYER_UNKNOWN_FIELD", "x"), ("INTLAYER_BASE_DIR", "/app")]),
        EnvPlatform::Plain,
    )
    .unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw.get(Section::Content, "baseDir"), Some(&RawValue::from("/app")));
}

#[test]
fn test_extract_keeps_empty_values() {
    let raw = extract_from(vars(&[("INTLAYER_BASE_PATH", "")]), EnvPlatform::Plain).unwrap();
    assert_eq!(raw.get(Section::Middleware, "basePath"), Some(&RawValue::from("")));
}

#[test]
fn test_extract_case_variants_resolve_in_input_order() {
    for _ in 0..20 {
        let raw = extract_from(
            vars(&[("INTLAYER_LOCALES", "a"), ("intlayer_locales", "b")]),
            EnvPlatform::Plain,
        )
        .unwrap();
        assert_eq!(
            raw.get(Section::Internationalization, "locales"),
            Some(&RawValue::from("b"))
        );

        let raw = extract_from(
            vars(&[("Intlayer_Locales", "b"), ("INTLAYER_LOCALES", "a")]),
            EnvPlatform::Plain,
        )
        .unwrap();
        assert_eq!(
            raw.get(Section::Internationalization, "locales"),
            Some(&RawValue::from("a"))
        );
    }
}

#[test]
fn test_extract_skips_non_ascii_names() {
    let raw = extract_from(
        vars(&[("INTLAYER_COO\u{212A}IE_NAME", "kelvin"), ("INTLAYER_COOKIE_NAME", "ascii")]),
        EnvPlatform::Plain,
    )
    .unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(
        raw.get(Section::Middleware, "cookieName"),
        Some(&RawValue::from("ascii"))
    );
}

#[cfg(unix)]
#[test]
fn test_utf8_vars_skips_invalid_entries() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let input = vec![
        (OsString::from("UNRELATED"), OsString::from_vec(vec![0xff])),
        (OsString::from_vec(vec![b'X', 0xfe]), OsString::from("x")),
        (OsString::from("INTLAYER_LOCALES"), OsString::from("en")),
    ];
    let kept = utf8_vars(input);
    assert_eq!(kept, vars(&[("INTLAYER_LOCALES", "en")]));

    let raw = extract_from(kept, EnvPlatform::Plain).unwrap();
    assert_eq!(
        raw.get(Section::Internationalization, "locales"),
        Some(&RawValue::from("en"))
    );
}

#[test]
fn test_extract_reads_process_environment() {
    let from_process = extract(EnvPlatform::Vite).unwrap();
    let expected = extract_from(utf8_vars(std::env::vars_os()), EnvPlatform::Vite).unwrap();
    assert_eq!(from_process, expected);
}

#[test]
fn test_env_vars_follow_schema_order() {
    let raw = RawEnvironment::new()
        .with(Section::Editor, "port", "8000")
        .with(Section::Internationalization, "locales", &["en", "fr"][..])
        .with(Section::Middleware, "noPrefix", "true");

    assert_eq!(
        env_vars(&raw, EnvPlatform::Next),
        vars(&[
            ("NEXT_PUBLIC_INTLAYER_LOCALES", "en,fr"),
            ("NEXT_PUBLIC_INTLAYER_NO_PREFIX", "true"),
            ("NEXT_PUBLIC_INTLAYER_EDITOR_PORT", "8000"),
        ])
    );
}

#[test]
fn test_format_dotenv_quotes_when_needed() {
    let out = format_dotenv(&vars(&[
        ("INTLAYER_LOCALES", "en,fr"),
        ("INTLAYER_BASE_DIR", "/my app"),
        ("INTLAYER_EXCLUDED_PATH", r#"["a,b"]"#),
    ]))
    .unwrap();
    insta::assert_snapshot!(out, @r#"
    INTLAYER_LOCALES=en,fr
    INTLAYER_BASE_DIR="/my app"
    INTLAYER_EXCLUDED_PATH="[\"a,b\"]"
    "#);
}

#[test]
fn test_parse_assignment() {
    assert_eq!(
        parse_assignment("INTLAYER_LOCALES=en,fr").unwrap(),
        ("INTLAYER_LOCALES".to_string(), "en,fr".to_string())
    );
    assert_eq!(
        parse_assignment("INTLAYER_BASE_PATH=").unwrap(),
        ("INTLAYER_BASE_PATH".to_string(), String::new())
    );
    assert_eq!(
        parse_assignment("A=b=c").unwrap(),
        ("A".to_string(), "b=c".to_string())
    );
    assert!(parse_assignment("NO_EQUALS").is_err());
    assert!(parse_assignment("=value").is_err());
}
