use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Waste category recognised by the classifier and the disposal catalog.
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
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WasteCategory {
    Organic,
    Recyclable,
    Hazardous,
    Solid,
    Liquid,
    Unknown,
}

impl WasteCategory {
    /// Categories the classifier can emit, in hash-index order.
    pub const CLASSIFIABLE: [WasteCategory; 5] = [
        WasteCategory::Organic,
        WasteCategory::Recyclable,
        WasteCategory::Hazardous,
        WasteCategory::Solid,
        WasteCategory::Liquid,
    ];

    /// Capitalised English name used in replies.
    pub fn display_name(self) -> &'static str {
        match self {
            WasteCategory::Organic => "Organic",
            WasteCategory::Recyclable => "Recyclable",
            WasteCategory::Hazardous => "Hazardous",
            WasteCategory::Solid => "Solid",
            WasteCategory::Liquid => "Liquid",
            WasteCategory::Unknown => "Unknown",
        }
    }

    pub fn hindi_name(self) -> &'static str {
        match self {
            WasteCategory::Organic => "जैविक",
            WasteCategory::Recyclable => "पुनर्नवीनीकरण योग्य",
            WasteCategory::Hazardous => "खतरनाक",
            WasteCategory::Solid => "ठोस",
            WasteCategory::Liquid => "तरल",
            WasteCategory::Unknown => "अज्ञात",
        }
    }

    /// The two candidate sub-type pairs, selected by hash parity.
    pub fn sub_type_pairs(self) -> Option<[[&'static str; 2]; 2]> {
        match self {
            WasteCategory::Organic => Some([
                ["food waste", "yard clippings"],
                ["vegetable scraps", "fruit peels"],
            ]),
            WasteCategory::Recyclable => Some([
                ["plastic bottles", "cardboard"],
                ["aluminum cans", "paper"],
            ]),
            WasteCategory::Hazardous => {
                Some([["batteries", "electronics"], ["paint cans", "chemicals"]])
            }
            WasteCategory::Solid => Some([
                ["styrofoam", "wrappers"],
                ["broken ceramics", "disposable items"],
            ]),
            WasteCategory::Liquid => Some([["cooking oil", "detergent"], ["paint", "solvents"]]),
            WasteCategory::Unknown => None,
        }
    }
}

/// Placeholder region of a detected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One item found in a multi-item image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedItem {
    pub category: WasteCategory,
    pub confidence: f64,
    pub bounding_box: BoundingBox,
}

/// Output of one classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteAnalysisResult {
    pub category: WasteCategory,
    /// In `[0.85, 0.98]`.
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_types: Option<Vec<String>>,
    /// Every item found, primary first. Present only for multi-item images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_items: Option<Vec<DetectedItem>>,
}

impl WasteAnalysisResult {
    /// Confidence as a rounded percentage.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }

    /// The first non-primary item, if more than one was detected.
    pub fn secondary_item(&self) -> Option<&DetectedItem> {
        self.detected_items.as_ref().and_then(|items| items.get(1))
    }
}
