//! Output language for titles, feature text and prompts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of the generated document.
///
/// Only English and Japanese have localized text; any other tag is accepted
/// and behaves as English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    /// Only the exact tag `ja` selects Japanese
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ja" => Self::Ja,
            _ => Self::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Pick the English or Japanese variant of a localized string
    pub fn pick<'a>(&self, en: &'a str, ja: &'a str) -> &'a str {
        match self {
            Self::En => en,
            Self::Ja => ja,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.as_str().to_string()
    }
}
