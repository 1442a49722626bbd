use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Language the assistant currently replies in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ChatLanguage {
    #[default]
    English,
    Hindi,
}

impl ChatLanguage {
    /// Returns the other supported language.
    pub fn toggled(self) -> Self {
        match self {
            ChatLanguage::English => ChatLanguage::Hindi,
            ChatLanguage::Hindi => ChatLanguage::English,
        }
    }

    /// Picks the variant of a bilingual string pair.
    pub fn pick<'a>(self, english: &'a str, hindi: &'a str) -> &'a str {
        match self {
            ChatLanguage::English => english,
            ChatLanguage::Hindi => hindi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ChatLanguage::English.toggled(), ChatLanguage::Hindi);
        assert_eq!(ChatLanguage::Hindi.toggled(), ChatLanguage::English);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(ChatLanguage::from_str("Hindi").unwrap(), ChatLanguage::Hindi);
        assert_eq!(ChatLanguage::English.to_string(), "english");
    }
}
