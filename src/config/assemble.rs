// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw environment <-> typed configuration.
//!
//! ```text
//! RawEnvironment --assemble()--> Configuration
//!       ^                              |
//!       +--------- to_raw() -----------+
//!
//! assemble:
//!   SCHEMA --coerce(raw, kind)--> CoercedFields
//!   CoercedFields --take by (section, name)--> 4 sections --> Configuration
//! ```
//!
//! `assemble` is total: a field that is absent, or whose value does not
//! coerce, ends up `None`. Coerced values are stored unchanged; unknown enum
//! members and out-of-range ports are kept. `to_raw` writes only defined
//! fields, as text.

use std::collections::BTreeMap;

use super::Configuration;
use super::coerce::{CoercedValue, coerce, encode_list};
use super::raw::RawEnvironment;
use super::schema::{SCHEMA, Section};
use super::types::{
    ContentConfig, DictionaryOutput, EditorConfig, EditorPort, InternationalizationConfig, Locale,
    MiddlewareConfig, ServerSetCookieRule,
};

/// Build a typed configuration from raw values.
///
/// Every field of [`SCHEMA`] is coerced with its declared kind and stored
/// verbatim. Never fails; the same input always gives an equal output.
#[must_use]
pub fn assemble(raw: &RawEnvironment) -> Configuration {
    let mut fields = CoercedFields::coerce_all(raw);

    let config = Configuration {
        internationalization: internationalization(&mut fields),
        middleware: middleware(&mut fields),
        content: content(&mut fields),
        editor: editor(&mut fields),
    };

    tracing::trace!(
        raw_fields = raw.len(),
        undefined = config.undefined_fields().len(),
        "assembled configuration"
    );
    config
}

/// Coerced values keyed by `(section, name)`.
struct CoercedFields {
    values: BTreeMap<(Section, &'static str), CoercedValue>,
}

impl CoercedFields {
    fn coerce_all(raw: &RawEnvironment) -> Self {
        let mut values = BTreeMap::new();
        for spec in SCHEMA {
            let value = raw.get(spec.section, spec.name);
            match coerce(value, spec.kind) {
                Some(coerced) => {
                    values.insert((spec.section, spec.name), coerced);
                }
                None if value.is_some() => {
                    tracing::debug!(
                        field = %spec.path(),
                        kind = %spec.kind,
                        "value could not be coerced, leaving undefined"
                    );
                }
                None => {}
            }
        }
        Self { values }
    }

    fn take(&mut self, section: Section, name: &'static str) -> Option<CoercedValue> {
        self.values.remove(&(section, name))
    }

    fn string(&mut self, section: Section, name: &'static str) -> Option<String> {
        match self.take(section, name)? {
            CoercedValue::String(value) => Some(value),
            _ => None,
        }
    }

    fn boolean(&mut self, section: Section, name: &'static str) -> Option<bool> {
        match self.take(section, name)? {
            CoercedValue::Boolean(value) => Some(value),
            _ => None,
        }
    }

    fn number(&mut self, section: Section, name: &'static str) -> Option<f64> {
        match self.take(section, name)? {
            CoercedValue::Number(value) => Some(value),
            _ => None,
        }
    }

    fn array(&mut self, section: Section, name: &'static str) -> Option<Vec<String>> {
        match self.take(section, name)? {
            CoercedValue::Array(value) => Some(value),
            _ => None,
        }
    }
}

fn internationalization(fields: &mut CoercedFields) -> InternationalizationConfig {
    const S: Section = Section::Internationalization;
    InternationalizationConfig {
        locales: fields
            .array(S, "locales")
            .map(|tags| tags.into_iter().map(Locale::from).collect()),
        default_locale: fields.string(S, "defaultLocale").map(Locale::from),
    }
}

fn middleware(fields: &mut CoercedFields) -> MiddlewareConfig {
    const S: Section = Section::Middleware;
    MiddlewareConfig {
        header_name: fields.string(S, "headerName"),
        cookie_name: fields.string(S, "cookieName"),
        prefix_default: fields.boolean(S, "prefixDefault"),
        base_path: fields.string(S, "basePath"),
        server_set_cookie: fields
            .string(S, "serverSetCookie")
            .map(ServerSetCookieRule::from),
        no_prefix: fields.boolean(S, "noPrefix"),
    }
}

fn content(fields: &mut CoercedFields) -> ContentConfig {
    const S: Section = Section::Content;
    ContentConfig {
        file_extensions: fields.array(S, "fileExtensions"),
        base_dir: fields.string(S, "baseDir"),
        content_dir_name: fields.string(S, "contentDirName"),
        content_dir: fields.string(S, "contentDir"),
        excluded_path: fields.array(S, "excludedPath"),
        result_dir_name: fields.string(S, "resultDirName"),
        result_dir: fields.string(S, "resultDir"),
        module_augmentation_dir_name: fields.string(S, "moduleAugmentationDirName"),
        module_augmentation_dir: fields.string(S, "moduleAugmentationDir"),
        dictionary_output: fields
            .array(S, "dictionaryOutput")
            .map(|formats| formats.into_iter().map(DictionaryOutput::from).collect()),
        dictionaries_dir_name: fields.string(S, "dictionariesDirName"),
        dictionaries_dir: fields.string(S, "dictionariesDir"),
        i18n_dictionaries_dir_name: fields.string(S, "i18nDictionariesDirName"),
        i18n_dictionaries_dir: fields.string(S, "i18nDictionariesDir"),
        type_dir_name: fields.string(S, "typeDirName"),
        types_dir: fields.string(S, "typesDir"),
        main_dir_name: fields.string(S, "mainDirName"),
        main_dir: fields.string(S, "mainDir"),
        watched_files_pattern: fields.array(S, "watchedFilesPattern"),
        watched_files_pattern_with_path: fields.array(S, "watchedFilesPatternWithPath"),
        output_files_pattern_with_path: fields.string(S, "outputFilesPatternWithPath"),
    }
}

fn editor(fields: &mut CoercedFields) -> EditorConfig {
    EditorConfig {
        port: fields.number(Section::Editor, "port").map(EditorPort::new),
    }
}

/// Writes defined fields of one section as raw text.
struct RawWriter<'a> {
    raw: &'a mut RawEnvironment,
    section: Section,
}

impl RawWriter<'_> {
    fn text(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.raw.insert(self.section, name, value);
        }
    }

    fn display<T: std::fmt::Display>(&mut self, name: &str, value: Option<T>) {
        if let Some(value) = value {
            self.raw.insert(self.section, name, value.to_string());
        }
    }

    fn list<T: std::fmt::Display>(&mut self, name: &str, items: Option<&[T]>) {
        if let Some(items) = items {
            let items: Vec<String> = items.iter().map(ToString::to_string).collect();
            self.raw.insert(self.section, name, encode_list(&items));
        }
    }
}

impl Configuration {
    /// Serialize every defined field back to raw text.
    ///
    /// `assemble(&config.to_raw())` reproduces `config`.
    #[must_use]
    pub fn to_raw(&self) -> RawEnvironment {
        let mut raw = RawEnvironment::new();

        let intl = &self.internationalization;
        let mut w = RawWriter {
            raw: &mut raw,
            section: Section::Internationalization,
        };
        w.list("locales", intl.locales.as_deref());
        w.display("defaultLocale", intl.default_locale.as_ref());

        let mw = &self.middleware;
        let mut w = RawWriter {
            raw: &mut raw,
            section: Section::Middleware,
        };
        w.text("headerName", mw.header_name.as_deref());
        w.text("cookieName", mw.cookie_name.as_deref());
        w.display("prefixDefault", mw.prefix_default);
        w.text("basePath", mw.base_path.as_deref());
        w.display("serverSetCookie", mw.server_set_cookie.as_ref());
        w.display("noPrefix", mw.no_prefix);

        let c = &self.content;
        let mut w = RawWriter {
            raw: &mut raw,
            section: Section::Content,
        };
        w.list("fileExtensions", c.file_extensions.as_deref());
        w.text("baseDir", c.base_dir.as_deref());
        w.text("contentDirName", c.content_dir_name.as_deref());
        w.text("contentDir", c.content_dir.as_deref());
        w.list("excludedPath", c.excluded_path.as_deref());
        w.text("resultDirName", c.result_dir_name.as_deref());
        w.text("resultDir", c.result_dir.as_deref());
        w.text("moduleAugmentationDirName", c.module_augmentation_dir_name.as_deref());
        w.text("moduleAugmentationDir", c.module_augmentation_dir.as_deref());
        w.list("dictionaryOutput", c.dictionary_output.as_deref());
        w.text("dictionariesDirName", c.dictionaries_dir_name.as_deref());
        w.text("dictionariesDir", c.dictionaries_dir.as_deref());
        w.text("i18nDictionariesDirName", c.i18n_dictionaries_dir_name.as_deref());
        w.text("i18nDictionariesDir", c.i18n_dictionaries_dir.as_deref());
        w.text("typeDirName", c.type_dir_name.as_deref());
        w.text("typesDir", c.types_dir.as_deref());
        w.text("mainDirName", c.main_dir_name.as_deref());
        w.text("mainDir", c.main_dir.as_deref());
        w.list("watchedFilesPattern", c.watched_files_pattern.as_deref());
        w.list("watchedFilesPatternWithPath", c.watched_files_pattern_with_path.as_deref());
        w.text("outputFilesPatternWithPath", c.output_files_pattern_with_path.as_deref());

        let mut w = RawWriter {
            raw: &mut raw,
            section: Section::Editor,
        };
        w.display("port", self.editor.port);

        raw
    }
}
