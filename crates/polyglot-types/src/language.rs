use std::fmt;

use serde::{Deserialize, Serialize};

pub type LanguageCode = String;

/// Autodetect sentinel, only valid as a source language
pub const AUTO: &str = "auto";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const LANGUAGES: &[Language] = &[
    Language { code: AUTO, name: "Detect language" },
    Language { code: "BG", name: "Bulgarian" },
    Language { code: "CS", name: "Czech" },
    Language { code: "DA", name: "Danish" },
    Language { code: "DE", name: "German" },
    Language { code: "EL", name: "Greek" },
    Language { code: "EN", name: "English" },
    Language { code: "ES", name: "Spanish" },
    Language { code: "ET", name: "Estonian" },
    Language { code: "FI", name: "Finnish" },
    Language { code: "FR", name: "French" },
    Language { code: "HU", name: "Hungarian" },
    Language { code: "ID", name: "Indonesian" },
    Language { code: "IT", name: "Italian" },
    Language { code: "JA", name: "Japanese" },
    Language { code: "KO", name: "Korean" },
    Language { code: "LT", name: "Lithuanian" },
    Language { code: "LV", name: "Latvian" },
    Language { code: "NB", name: "Norwegian" },
    Language { code: "NL", name: "Dutch" },
    Language { code: "PL", name: "Polish" },
    Language { code: "PT", name: "Portuguese" },
    Language { code: "RO", name: "Romanian" },
    Language { code: "RU", name: "Russian" },
    Language { code: "SK", name: "Slovak" },
    Language { code: "SL", name: "Slovenian" },
    Language { code: "SV", name: "Swedish" },
    Language { code: "TR", name: "Turkish" },
    Language { code: "UK", name: "Ukrainian" },
    Language { code: "ZH", name: "Chinese" },
];

/// Static code to display-name table shared by every front-end
pub struct LanguageCatalog;

impl LanguageCatalog {
    /// Languages offered for the source dropdown, including autodetect
    pub fn source_languages() -> impl Iterator<Item = &'static Language> {
        LANGUAGES.iter()
    }

    /// Languages offered for the target dropdown, never autodetect
    pub fn target_languages() -> impl Iterator<Item = &'static Language> {
        LANGUAGES.iter().filter(|lang| lang.code != AUTO)
    }

    pub fn find(code: &str) -> Option<&'static Language> {
        LANGUAGES
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code.trim()))
    }

    pub fn display_name(code: &str) -> Option<&'static str> {
        Self::find(code).map(|lang| lang.name)
    }

    pub fn is_known(code: &str) -> bool {
        Self::find(code).is_some()
    }
}

/// Source language of a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLang {
    /// Let the provider detect the language
    Auto,
    Code(LanguageCode),
}

impl SourceLang {
    pub fn parse(code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() || code.eq_ignore_ascii_case(AUTO) {
            SourceLang::Auto
        } else {
            SourceLang::Code(code.to_string())
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            SourceLang::Auto => None,
            SourceLang::Code(code) => Some(code.as_str()),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SourceLang::Auto)
    }
}

impl fmt::Display for SourceLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLang::Auto => f.write_str(AUTO),
            SourceLang::Code(code) => f.write_str(code),
        }
    }
}
