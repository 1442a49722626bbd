use std::time::Duration;

use serde::Serialize;

use super::model::WasteCategory;
use crate::chat::ChatLanguage;

/// How long a tip stays on screen before rotating.
pub const TIP_ROTATION_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WasteTip {
    pub category: WasteCategory,
    pub title: &'static str,
    pub description: &'static str,
}

const TIPS: [WasteTip; 5] = [
    WasteTip {
        category: WasteCategory::Organic,
        title: "Organic Waste",
        description: "Food scraps and yard waste can be composted to create nutrient-rich soil.",
    },
    WasteTip {
        category: WasteCategory::Recyclable,
        title: "Recyclable Waste",
        description: "Clean and separate paper, plastic, glass, and metal for efficient recycling.",
    },
    WasteTip {
        category: WasteCategory::Hazardous,
        title: "Hazardous Waste",
        description: "Take batteries, electronics, and chemicals to designated collection centers.",
    },
    WasteTip {
        category: WasteCategory::Solid,
        title: "Solid Waste",
        description: "Reduce non-recyclable waste by choosing products with less packaging.",
    },
    WasteTip {
        category: WasteCategory::Liquid,
        title: "Liquid Waste",
        description: "Never pour oils, paints, or chemicals down regular drains.",
    },
];

/// Cursor over the rotating tips shown before the user starts typing.
#[derive(Debug, Clone, Default)]
pub struct WasteTips {
    current: usize,
}

impl WasteTips {
    pub fn new() -> Self {
        Self::default()
    }

    /// Heading for the tips panel.
    pub fn heading(language: ChatLanguage) -> &'static str {
        language.pick("Waste Management Tips", "कचरा प्रबंधन टिप्स")
    }

    pub fn all() -> &'static [WasteTip] {
        &TIPS
    }

    pub fn current(&self) -> &'static WasteTip {
        &TIPS[self.current]
    }

    /// Moves to the next tip, wrapping around, and returns it.
    pub fn advance(&mut self) -> &'static WasteTip {
        self.current = (self.current + 1) % TIPS.len();
        self.current()
    }

    /// Jumps to tip `index`; out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < TIPS.len() {
            self.current = index;
        }
    }

    /// Tips are shown only while the conversation is untouched.
    pub fn visible(input: &str, message_count: usize) -> bool {
        input.is_empty() && message_count <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut tips = WasteTips::new();
        assert_eq!(tips.current().category, WasteCategory::Organic);
        for _ in 0..4 {
            tips.advance();
        }
        assert_eq!(tips.current().category, WasteCategory::Liquid);
        assert_eq!(tips.advance().category, WasteCategory::Organic);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut tips = WasteTips::new();
        tips.select(2);
        tips.select(9);
        assert_eq!(tips.current().category, WasteCategory::Hazardous);
    }

    #[test]
    fn test_visibility() {
        assert!(WasteTips::visible("", 1));
        assert!(!WasteTips::visible("hi", 1));
        assert!(!WasteTips::visible("", 3));
    }
}
