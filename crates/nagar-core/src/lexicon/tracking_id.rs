//! Cosmetic complaint tracking IDs of the form `GC-2024-4512`.
//!
//! IDs are not guaranteed unique; they only have to look like the ones the
//! municipal back office hands out.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{NagarError, Result};

static TRACKING_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}-\d{4}-\d{4,}$").unwrap_or_else(|_| unreachable!("static pattern"))
});

/// Prefix used for complaints logged from an attached image.
pub const IMAGE_REPORT_PREFIX: &str = "MC";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackingId(String);

impl TrackingId {
    /// Generates `<prefix>-<current year>-<1000..=9999>`.
    pub fn generate(prefix: &str) -> Self {
        let serial = rand::thread_rng().gen_range(1000..10000);
        Self(format!("{}-{}-{}", prefix, Utc::now().year(), serial))
    }

    /// Parses user input, tolerating surrounding whitespace, a leading `#`
    /// and lower case. Malformed input is reported as not found.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().trim_start_matches('#').to_uppercase();
        if TRACKING_ID_PATTERN.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(NagarError::not_found("tracking ID", input.trim()))
        }
    }

    /// Two-letter department prefix.
    pub fn prefix(&self) -> &str {
        &self.0[..2]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TrackingId {
    type Err = NagarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TrackingId {
    type Error = NagarError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TrackingId> for String {
    fn from(id: TrackingId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let id = TrackingId::generate("WS");
        assert!(TRACKING_ID_PATTERN.is_match(id.as_str()), "{id}");
        assert_eq!(id.prefix(), "WS");
        let serial: u32 = id.as_str().rsplit('-').next().unwrap().parse().unwrap();
        assert!((1000..=9999).contains(&serial));
    }

    #[test]
    fn test_parse_normalizes() {
        let id = TrackingId::parse("  #gc-2023-4512 ").unwrap();
        assert_eq!(id.as_str(), "GC-2023-4512");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "GC-2023", "G-2023-4512", "GC-23-4512", "GC-2023-12"] {
            assert!(TrackingId::parse(bad).is_err(), "{bad}");
        }
    }
}
