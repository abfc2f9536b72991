// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and command rendering.

use clap::Parser;
use intlayer_env::cli::export::ExportFormat;
use intlayer_env::cli::show::ShowFormat;
use intlayer_env::cli::{Cli, Command};
use intlayer_env::cmd::config::format_fields;
use intlayer_env::cmd::export::{DEFAULT_CONFIG_FILE, build_config_loader, render_export};
use intlayer_env::cmd::show::{assemble_with_overrides, check_configuration, render_show};
use intlayer_env::config::Configuration;
use intlayer_env::config::raw::RawEnvironment;
use intlayer_env::config::schema::Section;
use intlayer_env::config::types::Locale;
use intlayer_env::env::EnvPlatform;

fn sample_config() -> Configuration {
    Configuration::parse(
        r#"
[internationalization]
locales = ["en", "fr"]
default_locale = "en"

[middleware]
no_prefix = true

[editor]
port = 8000
"#,
    )
    .unwrap()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["intlayer-env", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["intlayer-env"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "intlayer-env",
        "show",
        "--format",
        "options",
        "--platform",
        "react-app",
        "--log-file",
        "out.log",
    ])
    .unwrap();
    assert_eq!(cli.global.platform, EnvPlatform::ReactApp);
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("out.log"))
    );
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show command");
    };
    assert_eq!(args.format, ShowFormat::Options);
}

#[test]
fn cli_rejects_unknown_platform() {
    assert!(Cli::try_parse_from(["intlayer-env", "--platform", "webpack", "fields"]).is_err());
}

// =============================================================================
// show
// =============================================================================

#[test]
fn show_json_uses_null_for_undefined() {
    let out = render_show(&sample_config(), ShowFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(
        value["internationalization"]["locales"],
        serde_json::json!(["en", "fr"])
    );
    assert_eq!(value["middleware"]["no_prefix"], serde_json::json!(true));
    assert!(value["middleware"]["cookie_name"].is_null());
    assert_eq!(value["editor"]["port"], serde_json::json!(8000));
}

#[test]
fn show_options_lists_every_field() {
    let out = render_show(&sample_config(), ShowFormat::Options).unwrap();
    assert_eq!(out.lines().count(), intlayer_env::config::schema::SCHEMA.len());
    assert!(out.ends_with('\n'));
}

#[test]
fn check_configuration_passes_and_fails() {
    assert!(check_configuration(&sample_config()).is_ok());

    let err = check_configuration(&Configuration::default()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"2 configuration problem(s)");
    insta::assert_snapshot!(
        err.root_cause().to_string(),
        @"missing required config key 'locales' in section '[internationalization]'"
    );
}

#[test]
fn check_configuration_reports_invalid_values() {
    let mut config = sample_config();
    config.middleware.server_set_cookie = Some("sometimes".into());

    let err = check_configuration(&config).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"1 configuration problem(s)");
    insta::assert_snapshot!(
        err.root_cause().to_string(),
        @"invalid value for 'serverSetCookie' in section '[middleware]': expected 'always' or 'never', got 'sometimes'"
    );
}

#[test]
fn set_overrides_beat_every_process_prefix() {
    let process = intlayer_env::env::extract_from(
        [
            ("VITE_INTLAYER_LOCALES", "de"),
            ("INTLAYER_DEFAULT_LOCALE", "de"),
        ],
        EnvPlatform::Vite,
    )
    .unwrap();
    let overrides = vec![
        ("INTLAYER_LOCALES".to_string(), "en,fr".to_string()),
        ("intlayer_default_locale".to_string(), "en".to_string()),
        ("INTLAYER_DEFAULT_LOCALE".to_string(), "fr".to_string()),
    ];

    let config = assemble_with_overrides(process, &overrides, EnvPlatform::Vite).unwrap();
    assert_eq!(
        config.internationalization.locales,
        Some(vec![Locale::from("en"), Locale::from("fr")])
    );
    assert_eq!(config.internationalization.default_locale, Some(Locale::from("fr")));
}

#[test]
fn set_overrides_leave_other_fields_alone() {
    let process = RawEnvironment::new().with(Section::Content, "baseDir", "/app");
    let config = assemble_with_overrides(process, &[], EnvPlatform::Plain).unwrap();
    assert_eq!(config.content.base_dir.as_deref(), Some("/app"));
}

// =============================================================================
// export
// =============================================================================

#[test]
fn export_dotenv() {
    let out = render_export(&sample_config(), EnvPlatform::Vite, ExportFormat::Dotenv).unwrap();
    insta::assert_snapshot!(out, @r"
    VITE_INTLAYER_LOCALES=en,fr
    VITE_INTLAYER_DEFAULT_LOCALE=en
    VITE_INTLAYER_NO_PREFIX=true
    VITE_INTLAYER_EDITOR_PORT=8000
    ");
}

#[test]
fn export_json() {
    let out = render_export(&sample_config(), EnvPlatform::Plain, ExportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "INTLAYER_LOCALES": "en,fr",
            "INTLAYER_DEFAULT_LOCALE": "en",
            "INTLAYER_NO_PREFIX": "true",
            "INTLAYER_EDITOR_PORT": "8000",
        })
    );
}

#[test]
fn export_defaults_to_project_file() {
    let loader = build_config_loader(&[]);
    let files = loader.loaded_files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].1, std::path::PathBuf::from(DEFAULT_CONFIG_FILE));
}

// =============================================================================
// fields
// =============================================================================

#[test]
fn fields_listing() {
    let lines = format_fields(EnvPlatform::Plain);
    assert_eq!(lines.len(), intlayer_env::config::schema::SCHEMA.len());
    let width = "content.watchedFilesPatternWithPath".len();
    assert_eq!(
        lines[0],
        format!(
            "{:<width$}  array    required  INTLAYER_LOCALES",
            "internationalization.locales"
        )
    );
    assert_eq!(
        lines.last().unwrap(),
        &format!("{:<width$}  number   optional  INTLAYER_EDITOR_PORT", "editor.port")
    );
}
