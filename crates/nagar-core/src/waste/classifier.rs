//! Deterministic pseudo-classification of image payloads.
//!
//! There is no vision model here. The payload string is hashed with the
//! classic `h = h * 31 + unit` string hash over UTF-16 code units, wrapped to
//! a signed 32-bit integer, and every field of the result is derived from
//! that hash. Same payload, same answer.

use async_trait::async_trait;

use super::model::{BoundingBox, DetectedItem, WasteAnalysisResult, WasteCategory};
use crate::error::Result;

const CONFIDENCE_FLOOR: i32 = 85;
const CONFIDENCE_SPREAD: i32 = 14;
const SECONDARY_CONFIDENCE_PENALTY: i32 = 5;

const PRIMARY_BOX: BoundingBox = BoundingBox {
    x: 10,
    y: 10,
    width: 200,
    height: 150,
};
const SECONDARY_BOX: BoundingBox = BoundingBox {
    x: 220,
    y: 50,
    width: 180,
    height: 130,
};

/// Something that can turn an image payload into a waste analysis.
///
/// The driver only depends on this trait; the simulated implementation adds
/// latency around [`analyze_payload`], a real one would call a model.
#[async_trait]
pub trait WasteClassifier: Send + Sync {
    /// Classifies an encoded image payload.
    ///
    /// # Arguments
    ///
    /// * `payload` - The base64 data URL of the image
    async fn classify(&self, payload: &str) -> Result<WasteAnalysisResult>;
}

/// 32-bit signed string hash, bit-exact with `((h << 5) - h) + charCode | 0`.
pub fn hash_payload(payload: &str) -> i32 {
    payload.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Pure analysis of a payload. No delay, no side effects.
pub fn analyze_payload(payload: &str) -> WasteAnalysisResult {
    let hash = hash_payload(payload);
    let categories = WasteCategory::CLASSIFIABLE;
    let magnitude = u64::from(hash.unsigned_abs());

    let category = categories[(magnitude % categories.len() as u64) as usize];

    // Normalised remainder keeps negative hashes inside [85, 98].
    let confidence_pct = CONFIDENCE_FLOOR + hash.rem_euclid(CONFIDENCE_SPREAD);
    let confidence = f64::from(confidence_pct) / 100.0;

    let sub_types = category.sub_type_pairs().map(|pairs| {
        let pair = if hash % 2 == 0 { pairs[0] } else { pairs[1] };
        pair.iter().map(|s| s.to_string()).collect()
    });

    let detected_items = (hash % 3 == 0).then(|| {
        let secondary = categories[((magnitude + 1) % categories.len() as u64) as usize];
        vec![
            DetectedItem {
                category,
                confidence,
                bounding_box: PRIMARY_BOX,
            },
            DetectedItem {
                category: secondary,
                confidence: f64::from(confidence_pct - SECONDARY_CONFIDENCE_PENALTY) / 100.0,
                bounding_box: SECONDARY_BOX,
            },
        ]
    });

    WasteAnalysisResult {
        category,
        confidence,
        sub_types,
        detected_items,
    }
}
