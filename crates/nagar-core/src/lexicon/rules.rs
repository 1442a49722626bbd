//! Ordered routing rules evaluated once per user turn.
//!
//! Each rule inspects the normalised turn and either claims it or falls
//! through. The first rule to claim a turn decides the reply strategy;
//! [`Route::Fallback`] is returned when none does.

use super::responses::{
    DOMAIN_GROUPS, GENERAL_REPLIES, KeywordReply, SWITCH_TO_ENGLISH, SWITCH_TO_HINDI,
    WASTE_ANALYSIS_KEYWORDS,
};
use crate::chat::ChatLanguage;

/// Reply strategy for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Switch the conversation to the given language.
    SwitchLanguage(ChatLanguage),
    /// Classify the attached image.
    AnalyzeWaste,
    /// An image was sent without a waste question; log it as a complaint.
    /// Carries the civic keyword the text matched, if any.
    ImageReport(Option<&'static KeywordReply>),
    /// Answer from a keyword table.
    Keyword(&'static KeywordReply),
    Fallback,
}

impl Route {
    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Route::SwitchLanguage(_) => "switch_language",
            Route::AnalyzeWaste => "analyze_waste",
            Route::ImageReport(_) => "image_report",
            Route::Keyword(_) => "keyword",
            Route::Fallback => "fallback",
        }
    }
}

/// A turn as the rules see it.
#[derive(Debug, Clone)]
pub struct TurnInput {
    /// Trimmed, lower-cased user text.
    pub text: String,
    pub language: ChatLanguage,
    pub has_image: bool,
}

impl TurnInput {
    pub fn new(raw: &str, language: ChatLanguage, has_image: bool) -> Self {
        Self {
            text: raw.trim().to_lowercase(),
            language,
            has_image,
        }
    }

    fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.text.contains(k))
    }
}

/// A named routing rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub evaluate: fn(&TurnInput) -> Option<Route>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Rules in priority order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "switch_language",
        evaluate: switch_language,
    },
    Rule {
        name: "analyze_waste",
        evaluate: analyze_waste,
    },
    Rule {
        name: "image_report",
        evaluate: image_report,
    },
    Rule {
        name: "domain_keyword",
        evaluate: domain_keyword,
    },
    Rule {
        name: "general_keyword",
        evaluate: general_keyword,
    },
];

fn switch_language(turn: &TurnInput) -> Option<Route> {
    if turn.contains_any(SWITCH_TO_HINDI) {
        return Some(Route::SwitchLanguage(ChatLanguage::Hindi));
    }
    (turn.language == ChatLanguage::Hindi && turn.contains_any(SWITCH_TO_ENGLISH))
        .then_some(Route::SwitchLanguage(ChatLanguage::English))
}

fn analyze_waste(turn: &TurnInput) -> Option<Route> {
    (turn.has_image && (turn.text.is_empty() || turn.contains_any(WASTE_ANALYSIS_KEYWORDS)))
        .then_some(Route::AnalyzeWaste)
}

// Any image left over at this point is not a waste question. The report
// acknowledgement replaces the keyword reply, but the keyword still decides
// whether a status update follows.
fn image_report(turn: &TurnInput) -> Option<Route> {
    if !turn.has_image {
        return None;
    }
    let keyword = DOMAIN_GROUPS
        .iter()
        .chain(GENERAL_REPLIES)
        .find(|reply| reply.matches(&turn.text, turn.language));
    Some(Route::ImageReport(keyword))
}

fn domain_keyword(turn: &TurnInput) -> Option<Route> {
    first_match(DOMAIN_GROUPS, turn)
}

fn general_keyword(turn: &TurnInput) -> Option<Route> {
    first_match(GENERAL_REPLIES, turn)
}

fn first_match(table: &'static [KeywordReply], turn: &TurnInput) -> Option<Route> {
    table
        .iter()
        .find(|reply| reply.matches(&turn.text, turn.language))
        .map(Route::Keyword)
}

/// Routes a raw user turn.
pub fn route(raw: &str, language: ChatLanguage, has_image: bool) -> Route {
    route_turn(&TurnInput::new(raw, language, has_image))
}

pub fn route_turn(turn: &TurnInput) -> Route {
    RULES
        .iter()
        .find_map(|rule| (rule.evaluate)(turn))
        .unwrap_or(Route::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: ChatLanguage = ChatLanguage::English;
    const HI: ChatLanguage = ChatLanguage::Hindi;

    fn topic(route: Route) -> Option<&'static str> {
        match route {
            Route::Keyword(reply) => Some(reply.topic),
            _ => None,
        }
    }

    #[test]
    fn test_switch_to_hindi_wins_over_everything() {
        assert_eq!(
            route("Switch to HINDI please, garbage", EN, true),
            Route::SwitchLanguage(HI)
        );
        assert_eq!(route("हिंदी", EN, false), Route::SwitchLanguage(HI));
    }

    #[test]
    fn test_switch_to_english_only_from_hindi() {
        assert_eq!(route("english", HI, false), Route::SwitchLanguage(EN));
        assert_eq!(route("अंग्रेजी में बात करें", HI, false), Route::SwitchLanguage(EN));
        assert_eq!(route("english", EN, false), Route::Fallback);
    }

    #[test]
    fn test_image_with_waste_keyword_is_analyzed() {
        assert_eq!(route("identify this waste", EN, true), Route::AnalyzeWaste);
        assert_eq!(route("", EN, true), Route::AnalyzeWaste);
        assert_eq!(route("   ", HI, true), Route::AnalyzeWaste);
        assert_eq!(route("Can I RECYCLE this?", EN, true), Route::AnalyzeWaste);
    }

    #[test]
    fn test_image_without_waste_keyword_is_reported() {
        assert_eq!(route("please check this", EN, true), Route::ImageReport(None));
        let Route::ImageReport(Some(keyword)) = route("water leakage", EN, true) else {
            panic!("expected an image report with a keyword");
        };
        assert_eq!(keyword.topic, "water");
        assert!(keyword.files_complaint());
    }

    #[test]
    fn test_waste_keyword_without_image_is_a_keyword_turn() {
        assert_eq!(topic(route("identify this waste", EN, false)), None);
        assert_eq!(route("identify this waste", EN, false), Route::Fallback);
        assert_eq!(topic(route("garbage everywhere", EN, false)), Some("garbage"));
    }

    #[test]
    fn test_domain_groups_take_priority() {
        assert_eq!(topic(route("How do I compost?", EN, false)), Some("organic"));
        // "recyclable" before the general "collection" row.
        assert_eq!(
            topic(route("recyclable collection days", EN, false)),
            Some("recyclable")
        );
        assert_eq!(
            topic(route("old batteries and garbage", EN, false)),
            Some("hazardous")
        );
    }

    #[test]
    fn test_general_table() {
        assert_eq!(topic(route("water leakage", EN, false)), Some("water"));
        assert_eq!(topic(route("Huge pothole on the road", EN, false)), Some("road"));
        assert_eq!(topic(route("How do I pay property tax?", EN, false)), Some("tax"));
        assert_eq!(
            topic(route("I need a birth certificate", EN, false)),
            Some("certificate")
        );
        assert_eq!(
            topic(route("Waste collection schedule", EN, false)),
            Some("collection")
        );
    }

    #[test]
    fn test_hindi_keywords_only_in_hindi_mode() {
        assert_eq!(topic(route("पानी नहीं आ रहा", HI, false)), Some("water"));
        assert_eq!(route("पानी नहीं आ रहा", EN, false), Route::Fallback);
        assert_eq!(topic(route("water", HI, false)), Some("water"));
    }

    #[test]
    fn test_unmatched_text_falls_back() {
        assert_eq!(route("what is the meaning of life", EN, false), Route::Fallback);
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }
}
