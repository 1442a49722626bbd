//! Quick action models.

use serde::Serialize;

use crate::chat::ChatLanguage;

/// What pressing a quick action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum QuickActionEffect {
    /// Opens the complaint drawer.
    OpenComplaintDrawer,
    /// Replaces the pending input with this text.
    SetInput(&'static str),
}

/// A single quick action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    /// Stable identifier (e.g., "pay_tax").
    pub id: &'static str,
    pub english_label: &'static str,
    pub hindi_label: &'static str,
    pub effect: QuickActionEffect,
}

impl QuickAction {
    /// Button label in the given language.
    pub fn label(&self, language: ChatLanguage) -> &'static str {
        language.pick(self.english_label, self.hindi_label)
    }

    /// Finds an action by id.
    pub fn find(id: &str) -> Option<&'static QuickAction> {
        QUICK_ACTIONS.iter().find(|a| a.id == id)
    }
}

/// Buttons in display order.
pub static QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        id: "file_complaint",
        english_label: "File Complaint",
        hindi_label: "शिकायत दर्ज करें",
        effect: QuickActionEffect::OpenComplaintDrawer,
    },
    QuickAction {
        id: "pay_tax",
        english_label: "Pay Tax",
        hindi_label: "कर भुगतान",
        effect: QuickActionEffect::SetInput("How do I pay property tax?"),
    },
    QuickAction {
        id: "certificates",
        english_label: "Certificates",
        hindi_label: "प्रमाणपत्र",
        effect: QuickActionEffect::SetInput("I need a birth certificate"),
    },
    QuickAction {
        id: "waste_collection",
        english_label: "Waste Collection",
        hindi_label: "कचरा संग्रह",
        effect: QuickActionEffect::SetInput("Waste collection schedule"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Route, route};

    #[test]
    fn test_labels_follow_language() {
        let tax = QuickAction::find("pay_tax").unwrap();
        assert_eq!(tax.label(ChatLanguage::English), "Pay Tax");
        assert_eq!(tax.label(ChatLanguage::Hindi), "कर भुगतान");
    }

    #[test]
    fn test_canned_questions_hit_keyword_replies() {
        for action in &QUICK_ACTIONS {
            if let QuickActionEffect::SetInput(text) = action.effect {
                assert!(
                    matches!(route(text, ChatLanguage::English, false), Route::Keyword(_)),
                    "{text}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_id() {
        assert!(QuickAction::find("missing").is_none());
    }
}
