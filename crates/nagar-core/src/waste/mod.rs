//! Waste identification domain.
//!
//! # Module Structure
//!
//! - `model`: Categories and classifier output (`WasteCategory`, `WasteAnalysisResult`)
//! - `classifier`: Deterministic hash-based analysis and the `WasteClassifier` trait
//! - `disposal`: Static disposal guidance per category (`DisposalInfo`)
//! - `compose`: Natural-language reply built from an analysis
//! - `tips`: Rotating waste-management tips

pub mod classifier;
pub mod compose;
pub mod disposal;
mod model;
pub mod tips;

pub use classifier::{WasteClassifier, analyze_payload, hash_payload};
pub use compose::compose_analysis_reply;
pub use disposal::{DisposalInfo, disposal_info};
pub use model::{BoundingBox, DetectedItem, WasteAnalysisResult, WasteCategory};
pub use tips::{WasteTip, WasteTips};
