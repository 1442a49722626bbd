//! Builds the chat reply for a waste analysis.

use super::disposal::disposal_info;
use super::model::{WasteAnalysisResult, WasteCategory};
use crate::chat::ChatLanguage;

/// Renders the analysis reply in the given language.
///
/// English replies carry the full guidance: disposal methods always, one
/// category-specific section for organic/recyclable/hazardous, then the
/// environmental impact and municipal guidelines. Hindi replies are a single
/// summary sentence; the guidance catalog is English-only.
pub fn compose_analysis_reply(analysis: &WasteAnalysisResult, language: ChatLanguage) -> String {
    match language {
        ChatLanguage::Hindi => compose_hindi(analysis),
        ChatLanguage::English => compose_english(analysis),
    }
}

fn compose_hindi(analysis: &WasteAnalysisResult) -> String {
    format!(
        "मैंने आपकी छवि का विश्लेषण किया है और इसे {} कचरे के रूप में पहचाना है ({}% विश्वास के साथ)।",
        analysis.category.hindi_name(),
        analysis.confidence_percent()
    )
}

fn compose_english(analysis: &WasteAnalysisResult) -> String {
    let mut response = format!(
        "I've analyzed your image and identified it as {} waste ({}% confidence).",
        analysis.category.display_name(),
        analysis.confidence_percent()
    );

    if let Some(sub_types) = analysis.sub_types.as_ref().filter(|s| !s.is_empty()) {
        response.push_str(&format!(" Specifically, I can see {}.", sub_types.join(" and ")));
    }

    if let Some(secondary) = analysis.secondary_item() {
        response.push_str(&format!(
            " I've also detected multiple items in the image, including {} waste.",
            secondary.category.display_name()
        ));
    }

    let info = disposal_info(analysis.category);

    push_section(&mut response, "Proper Disposal Methods", info.disposal_methods);

    let conditional = match analysis.category {
        WasteCategory::Organic => Some(("Composting Guidance", info.composting_guidance)),
        WasteCategory::Recyclable => Some(("Recycling Steps", info.recycling_steps)),
        WasteCategory::Hazardous => Some(("Safety Precautions", info.safety_precautions)),
        _ => None,
    };
    if let Some((title, Some(items))) = conditional {
        push_section(&mut response, title, items);
    }

    response.push_str(&format!(
        "\n\n**Environmental Impact:**\n{}",
        info.environmental_impact
    ));
    response.push_str(&format!(
        "\n\n**Municipal Guidelines:**\n{}",
        info.municipal_guidelines
    ));

    response
}

fn push_section(response: &mut String, title: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    response.push_str(&format!("\n\n**{}:**\n", title));
    let bullets: Vec<String> = items.iter().map(|item| format!("• {}", item)).collect();
    response.push_str(&bullets.join("\n"));
}
