// intlayer-env: Intlayer environment configuration - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declarative field table.
//!
//! ```text
//! SCHEMA: [(section, name, kind, required, env), ...]
//!              |
//!   +----------+-----------+-------------+
//!   v                      v             v
//! assemble()        env::extract()   fields command
//! (coerce by kind)  (env key lookup) (listing)
//! ```
//!
//! Entries are in output order. `name` is the toolkit's field identifier and
//! the key used in [`RawEnvironment`](super::raw::RawEnvironment).

use serde::{Deserialize, Serialize};

/// Top-level configuration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Internationalization,
    Middleware,
    Content,
    Editor,
}

impl Section {
    /// All sections in output order.
    pub const ALL: [Self; 4] = [
        Self::Internationalization,
        Self::Middleware,
        Self::Content,
        Self::Editor,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internationalization => "internationalization",
            Self::Middleware => "middleware",
            Self::Content => "content",
            Self::Editor => "editor",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a raw value is converted into a typed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionKind {
    String,
    Number,
    Boolean,
    Array,
}

impl std::fmt::Display for CoercionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Array => write!(f, "array"),
        }
    }
}

/// One row of the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub section: Section,
    /// Field identifier within the section (e.g. `defaultLocale`).
    pub name: &'static str,
    pub kind: CoercionKind,
    /// Consumers cannot work without this field. Ignored by the assembler.
    pub required: bool,
    /// Environment key suffix, appended to a platform prefix.
    pub env: &'static str,
}

impl FieldSpec {
    /// Dotted path used in listings (`middleware.cookieName`).
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}.{}", self.section, self.name)
    }
}

const fn field(
    section: Section,
    name: &'static str,
    kind: CoercionKind,
    required: bool,
    env: &'static str,
) -> FieldSpec {
    FieldSpec {
        section,
        name,
        kind,
        required,
        env,
    }
}

use CoercionKind::{Array, Boolean, Number, String as Text};
use Section::{Content, Editor, Internationalization, Middleware};

/// The complete field table.
pub const SCHEMA: &[FieldSpec] = &[
    field(Internationalization, "locales", Array, true, "LOCALES"),
    field(Internationalization, "defaultLocale", Text, true, "DEFAULT_LOCALE"),
    field(Middleware, "headerName", Text, false, "HEADER_NAME"),
    field(Middleware, "cookieName", Text, false, "COOKIE_NAME"),
    field(Middleware, "prefixDefault", Boolean, false, "PREFIX_DEFAULT"),
    field(Middleware, "basePath", Text, false, "BASE_PATH"),
    field(Middleware, "serverSetCookie", Text, false, "SERVER_SET_COOKIE"),
    field(Middleware, "noPrefix", Boolean, false, "NO_PREFIX"),
    field(Content, "fileExtensions", Array, false, "FILE_EXTENSIONS"),
    field(Content, "baseDir", Text, false, "BASE_DIR"),
    field(Content, "contentDirName", Text, false, "CONTENT_DIR_NAME"),
    field(Content, "contentDir", Text, false, "CONTENT_DIR"),
    field(Content, "excludedPath", Array, false, "EXCLUDED_PATH"),
    field(Content, "resultDirName", Text, false, "RESULT_DIR_NAME"),
    field(Content, "resultDir", Text, false, "RESULT_DIR"),
    field(Content, "moduleAugmentationDirName", Text, false, "MODULE_AUGMENTATION_DIR_NAME"),
    field(Content, "moduleAugmentationDir", Text, false, "MODULE_AUGMENTATION_DIR"),
    field(Content, "dictionaryOutput", Array, false, "DICTIONARY_OUTPUT"),
    field(Content, "dictionariesDirName", Text, false, "DICTIONARIES_DIR_NAME"),
    field(Content, "dictionariesDir", Text, false, "DICTIONARIES_DIR"),
    field(Content, "i18nDictionariesDirName", Text, false, "I18N_DICTIONARIES_DIR_NAME"),
    field(Content, "i18nDictionariesDir", Text, false, "I18N_DICTIONARIES_DIR"),
    field(Content, "typeDirName", Text, false, "TYPE_DIR_NAME"),
    field(Content, "typesDir", Text, false, "TYPES_DIR"),
    field(Content, "mainDirName", Text, false, "MAIN_DIR_NAME"),
    field(Content, "mainDir", Text, false, "MAIN_DIR"),
    field(Content, "watchedFilesPattern", Array, false, "WATCHED_FILES_PATTERN"),
    field(Content, "watchedFilesPatternWithPath", Array, false, "WATCHED_FILES_PATTERN_WITH_PATH"),
    field(Content, "outputFilesPatternWithPath", Text, false, "OUTPUT_FILES_PATTERN_WITH_PATH"),
    field(Editor, "port", Number, false, "EDITOR_PORT"),
];

/// Look up a field by section and name.
#[must_use]
pub fn find(section: Section, name: &str) -> Option<&'static FieldSpec> {
    SCHEMA
        .iter()
        .find(|spec| spec.section == section && spec.name == name)
}

/// Look up a field by its environment key suffix, ignoring ASCII case.
#[must_use]
pub fn find_by_env(env: &str) -> Option<&'static FieldSpec> {
    SCHEMA
        .iter()
        .find(|spec| spec.env.eq_ignore_ascii_case(env))
}

/// Fields of one section, in table order.
pub fn section_fields(section: Section) -> impl Iterator<Item = &'static FieldSpec> {
    SCHEMA.iter().filter(move |spec| spec.section == section)
}
