use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{NagarError, Result};

const LETTER_TEMPLATE: &str = "To  \nThe Municipal Corporation  \n\nSubject: Complaint regarding {{ kind }} at {{ location }}\n\nRespected Sir/Madam,\n\nI would like to bring to your kind attention an issue regarding {{ kind }} located at {{ location }}. {{ description }} Kindly look into the matter and take necessary action.\n\nName: __________  \nPhone: __________  \nAddress: __________\n\nThank you.  \nYours sincerely,  \n______________";

/// Service category selectable in the complaint drawer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ComplaintKind {
    Garbage,
    Water,
    Road,
    Streetlight,
    Drainage,
    Other,
}

impl ComplaintKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ComplaintKind::Garbage => "Garbage Collection",
            ComplaintKind::Water => "Water Supply",
            ComplaintKind::Road => "Road Maintenance",
            ComplaintKind::Streetlight => "Streetlight",
            ComplaintKind::Drainage => "Drainage",
            ComplaintKind::Other => "Other",
        }
    }
}

/// Fields of the complaint drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintDetails {
    pub kind: Option<ComplaintKind>,
    pub location: String,
    pub description: String,
}

impl ComplaintDetails {
    pub fn new(
        kind: ComplaintKind,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: Some(kind),
            location: location.into(),
            description: description.into(),
        }
    }

    /// The drawer can only be submitted once every field is filled in.
    pub fn is_complete(&self) -> bool {
        self.kind.is_some()
            && !self.location.trim().is_empty()
            && !self.description.trim().is_empty()
    }

    /// One-line chat message for the complaint.
    pub fn short_text(&self) -> Result<String> {
        let kind = self.kind.filter(|_| self.is_complete()).ok_or_else(|| {
            NagarError::MissingField(
                "Please select issue type, enter location and describe the issue".to_string(),
            )
        })?;
        Ok(format!(
            "I want to report a {} issue at {}. {}",
            kind,
            self.location.trim(),
            self.description.trim()
        ))
    }

    /// Formal letter addressed to the corporation. The description may be empty.
    pub fn formal_letter(&self) -> Result<String> {
        let kind = self
            .kind
            .filter(|_| !self.location.trim().is_empty())
            .ok_or_else(|| {
                NagarError::MissingField("Please select issue type and enter location".to_string())
            })?;

        let env = Environment::new();
        let letter = env.render_str(
            LETTER_TEMPLATE,
            context! {
                kind => kind.display_name(),
                location => self.location.trim(),
                description => self.description.trim(),
            },
        )?;
        Ok(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_short_text() {
        let details = ComplaintDetails::new(
            ComplaintKind::Garbage,
            "Civil Lines",
            "Bin overflowing since Monday.",
        );
        assert_eq!(
            details.short_text().unwrap(),
            "I want to report a garbage issue at Civil Lines. Bin overflowing since Monday."
        );
    }

    #[test]
    fn test_short_text_requires_all_fields() {
        let details = ComplaintDetails::new(ComplaintKind::Water, "Katra", "  ");
        assert!(details.short_text().unwrap_err().is_validation());
    }

    #[test]
    fn test_formal_letter() {
        let details = ComplaintDetails::new(ComplaintKind::Road, "Daraganj", "Large pothole.");
        let letter = details.formal_letter().unwrap();

        assert!(letter.starts_with("To  \nThe Municipal Corporation"));
        assert!(letter.contains("Subject: Complaint regarding Road Maintenance at Daraganj\n"));
        assert!(letter.contains("located at Daraganj. Large pothole. Kindly look into"));
        assert!(letter.ends_with("Yours sincerely,  \n______________"));
    }

    #[test]
    fn test_formal_letter_requires_kind_and_location() {
        let missing_location = ComplaintDetails {
            kind: Some(ComplaintKind::Water),
            ..Default::default()
        };
        let err = missing_location.formal_letter().unwrap_err();
        assert_eq!(
            err.to_notice().description,
            "Please select issue type and enter location"
        );

        let missing_kind = ComplaintDetails {
            location: "Katra".into(),
            ..Default::default()
        };
        assert!(missing_kind.formal_letter().is_err());
    }

    #[test]
    fn test_kind_parses_from_id() {
        assert_eq!(
            ComplaintKind::from_str("Streetlight").unwrap(),
            ComplaintKind::Streetlight
        );
    }
}
