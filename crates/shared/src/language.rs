use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Display language of a session. Every catalog row carries both.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Ko => "한국어",
            Language::En => "English",
        }
    }

    /// Returns the value matching this language out of a (korean, english) pair.
    pub fn pick<'a, T: ?Sized>(&self, ko: &'a T, en: &'a T) -> &'a T {
        match self {
            Language::Ko => ko,
            Language::En => en,
        }
    }
}

/// Music mood offered next to the recipes.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Mood {
    #[default]
    #[strum(serialize = "chill")]
    #[serde(rename = "chill")]
    Chill,
    #[strum(serialize = "energy")]
    #[serde(rename = "energy")]
    Energy,
    #[strum(serialize = "focus")]
    #[serde(rename = "focus")]
    Focus,
    #[strum(serialize = "retro")]
    #[serde(rename = "retro")]
    Retro,
    #[strum(serialize = "k-pop")]
    #[serde(rename = "k-pop")]
    KPop,
    #[strum(serialize = "lofi")]
    #[serde(rename = "lofi")]
    Lofi,
}
