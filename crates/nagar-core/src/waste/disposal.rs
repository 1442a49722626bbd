//! Static disposal guidance, one record per waste category.

use serde::Serialize;

use super::model::WasteCategory;

/// Guidance shown after a waste item is identified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalInfo {
    pub category: WasteCategory,
    pub disposal_methods: &'static [&'static str],
    pub recycling_steps: Option<&'static [&'static str]>,
    pub composting_guidance: Option<&'static [&'static str]>,
    pub safety_precautions: Option<&'static [&'static str]>,
    pub environmental_impact: &'static str,
    pub municipal_guidelines: &'static str,
}

static ORGANIC: DisposalInfo = DisposalInfo {
    category: WasteCategory::Organic,
    disposal_methods: &[
        "Use dedicated green bins for organic waste collection",
        "Consider home composting for yard waste and select food scraps",
        "Keep organic waste separate from other waste types",
    ],
    recycling_steps: None,
    composting_guidance: Some(&[
        "Layer green materials (food scraps) with brown materials (leaves, paper)",
        "Maintain proper moisture - damp as a wrung-out sponge",
        "Turn your compost pile regularly to aerate it",
        "Avoid meat, dairy, and oily foods in home composting",
    ]),
    safety_precautions: None,
    environmental_impact: "When organic waste goes to landfill, it produces methane, a potent greenhouse gas. Properly composted, it creates nutrient-rich soil instead.",
    municipal_guidelines: "Prayagraj Municipal Corporation collects organic waste on Mondays and Thursdays. Use the provided green bins only.",
};

static RECYCLABLE: DisposalInfo = DisposalInfo {
    category: WasteCategory::Recyclable,
    disposal_methods: &[
        "Clean and dry all recyclables before disposal",
        "Place in blue recycling bins",
        "Separate different types if required by local guidelines",
    ],
    recycling_steps: Some(&[
        "Rinse containers to remove food residue",
        "Remove labels and lids if required locally",
        "Flatten cardboard boxes to save space",
        "Sort by material type: paper, plastic, glass, metal",
    ]),
    composting_guidance: None,
    safety_precautions: Some(&["Watch for sharp edges on metal containers"]),
    environmental_impact: "Recycling one ton of paper saves 17 trees and 7,000 gallons of water. Plastic recycling reduces oil consumption and landfill usage.",
    municipal_guidelines: "Recyclable collection happens every Tuesday and Friday. Items must be clean and sorted according to material type.",
};

static HAZARDOUS: DisposalInfo = DisposalInfo {
    category: WasteCategory::Hazardous,
    disposal_methods: &[
        "Never mix with regular waste",
        "Take to designated hazardous waste collection centers",
        "Use manufacturer take-back programs when available",
    ],
    recycling_steps: None,
    composting_guidance: None,
    safety_precautions: Some(&[
        "Keep in original containers with labels intact",
        "Store away from children and pets",
        "Do not mix different hazardous materials",
        "Use protective gloves when handling",
        "Transport in secure containers to prevent spills",
    ]),
    environmental_impact: "Improperly disposed hazardous waste can contaminate soil and water sources, potentially affecting human health and wildlife for decades.",
    municipal_guidelines: "Hazardous waste must be taken to the designated collection center at Environmental Complex, Civil Lines, open on the first Saturday of each month from 9 AM to 3 PM.",
};

static SOLID: DisposalInfo = DisposalInfo {
    category: WasteCategory::Solid,
    disposal_methods: &[
        "Use black bins for non-recyclable solid waste",
        "Reduce volume by compacting when possible",
        "Consider reuse options before disposal",
    ],
    recycling_steps: None,
    composting_guidance: None,
    safety_precautions: Some(&[
        "Wrap sharp objects carefully to prevent injuries to waste handlers",
    ]),
    environmental_impact: "Non-recyclable solid waste occupies valuable landfill space and takes hundreds of years to decompose, if at all.",
    municipal_guidelines: "General solid waste collection occurs three times weekly. Maximum two bags per household per collection.",
};

static LIQUID: DisposalInfo = DisposalInfo {
    category: WasteCategory::Liquid,
    disposal_methods: &[
        "Never pour down regular drains or toilets",
        "Use absorbent materials to solidify before disposal",
        "Take to specialized liquid waste collection points",
    ],
    recycling_steps: None,
    composting_guidance: None,
    safety_precautions: Some(&[
        "Store in sealed, labeled containers",
        "Keep incompatible liquids separate",
        "Use secondary containment for large quantities",
        "Have spill absorption materials ready",
    ]),
    environmental_impact: "Liquid waste can quickly spread through water systems, potentially contaminating drinking water and harming aquatic ecosystems.",
    municipal_guidelines: "Cooking oils can be recycled at designated collection points. Other liquid wastes must be taken to the Environmental Complex for proper disposal.",
};

static UNKNOWN: DisposalInfo = DisposalInfo {
    category: WasteCategory::Unknown,
    disposal_methods: &[
        "Contact municipal waste department for guidance",
        "Provide a clear photo to waste management authorities",
        "Consider professional waste assessment for unidentified materials",
    ],
    recycling_steps: None,
    composting_guidance: None,
    safety_precautions: Some(&[
        "Treat unknown materials as potentially hazardous until identified",
    ]),
    environmental_impact: "Improper disposal of unidentified materials risks environmental damage through unexpected chemical reactions or contamination.",
    municipal_guidelines: "For unidentified waste, contact the Municipal Helpline at 1800-XXX-XXXX for proper disposal instructions.",
};

/// Looks up the guidance record for a category.
pub fn disposal_info(category: WasteCategory) -> &'static DisposalInfo {
    match category {
        WasteCategory::Organic => &ORGANIC,
        WasteCategory::Recyclable => &RECYCLABLE,
        WasteCategory::Hazardous => &HAZARDOUS,
        WasteCategory::Solid => &SOLID,
        WasteCategory::Liquid => &LIQUID,
        WasteCategory::Unknown => &UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_category_has_its_own_record() {
        for category in WasteCategory::iter() {
            let info = disposal_info(category);
            assert_eq!(info.category, category);
            assert!(!info.disposal_methods.is_empty());
            assert!(!info.environmental_impact.is_empty());
            assert!(!info.municipal_guidelines.is_empty());
        }
    }

    #[test]
    fn test_category_specific_sections() {
        assert!(disposal_info(WasteCategory::Organic).composting_guidance.is_some());
        assert!(disposal_info(WasteCategory::Recyclable).recycling_steps.is_some());
        assert_eq!(
            disposal_info(WasteCategory::Hazardous)
                .safety_precautions
                .map(|p| p.len()),
            Some(5)
        );
    }
}
