//! Fallback Selector
//!
//! Maps a label the knowledge base cannot resolve onto one of the generic
//! fallback records. The policy is an explicit ordered rule list; the first
//! rule that fires wins and `Default` always fires.

use serde::{Deserialize, Serialize};

use crate::knowledge_base::{FALLBACK_NUTRIENT_KEY, FALLBACK_STRESS_KEY};

/// Below this confidence there is too little signal to tell nutrient from disease
pub const LOW_CONFIDENCE_CUTOFF: f64 = 0.25;

/// User-visible caveat, always the first treatment step of a fallback record
pub const FALLBACK_CAVEAT: &str = "Low-confidence generic diagnosis: the image did not match a specific known condition. Consult a plant health professional or local agricultural extension service to confirm before treating.";

const NUTRIENT_KEYWORDS: &[&str] = &[
    "deficiency",
    "deficient",
    "chlorosis",
    "chlorotic",
    "yellowing",
    "nutrient",
    "npk",
    "fertilizer",
    "fertiliser",
];

const DISEASE_KEYWORDS: &[&str] = &[
    "disease",
    "fungal",
    "fungus",
    "bacterial",
    "bacteria",
    "viral",
    "virus",
    "blight",
    "mildew",
    "rust",
    "rot",
    "mold",
    "mould",
    "wilt",
    "canker",
    "mosaic",
];

const ENVIRONMENTAL_KEYWORDS: &[&str] = &[
    "stress",
    "burn",
    "scorch",
    "drought",
    "heat",
    "cold",
    "frost",
    "watering",
    "waterlog",
    "sunburn",
];

/// Keywords this short only match a whole `_`-separated token ("rot" but not "carrot")
const SHORT_STEM_MAX_LEN: usize = 4;

/// Generic diagnosis chosen for an unresolved label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackCategory {
    EnvironmentalStress,
    NutrientDeficiency,
}

impl FallbackCategory {
    /// Knowledge base key holding this fallback's content
    pub fn key(&self) -> &'static str {
        match self {
            FallbackCategory::EnvironmentalStress => FALLBACK_STRESS_KEY,
            FallbackCategory::NutrientDeficiency => FALLBACK_NUTRIENT_KEY,
        }
    }
}

/// Fallback policy rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackRule {
    /// confidence < 0.25 → environmental stress
    LowConfidence,
    /// nutrient-family keyword in label → nutrient deficiency
    NutrientKeyword,
    /// disease- or environment-family keyword in label → environmental stress
    DiseaseOrEnvironmentalKeyword,
    /// anything else → nutrient deficiency
    Default,
}

impl FallbackRule {
    pub const ORDER: [FallbackRule; 4] = [
        FallbackRule::LowConfidence,
        FallbackRule::NutrientKeyword,
        FallbackRule::DiseaseOrEnvironmentalKeyword,
        FallbackRule::Default,
    ];

    /// Whether this rule, taken alone, fires for the (normalized) label
    pub fn matches(&self, label: &str, confidence: f64) -> bool {
        match self {
            FallbackRule::LowConfidence => confidence < LOW_CONFIDENCE_CUTOFF,
            FallbackRule::NutrientKeyword => contains_any(label, NUTRIENT_KEYWORDS),
            FallbackRule::DiseaseOrEnvironmentalKeyword => {
                contains_any(label, DISEASE_KEYWORDS) || contains_any(label, ENVIRONMENTAL_KEYWORDS)
            }
            FallbackRule::Default => true,
        }
    }

    pub fn category(&self) -> FallbackCategory {
        match self {
            FallbackRule::LowConfidence => FallbackCategory::EnvironmentalStress,
            FallbackRule::NutrientKeyword => FallbackCategory::NutrientDeficiency,
            FallbackRule::DiseaseOrEnvironmentalKeyword => FallbackCategory::EnvironmentalStress,
            FallbackRule::Default => FallbackCategory::NutrientDeficiency,
        }
    }
}

/// Outcome of the fallback policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackDecision {
    pub rule: FallbackRule,
    pub category: FallbackCategory,
}

fn contains_keyword(label: &str, keyword: &str) -> bool {
    if keyword.len() <= SHORT_STEM_MAX_LEN {
        label
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|token| token == keyword)
    } else {
        label.contains(keyword)
    }
}

fn contains_any(label: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_keyword(label, k))
}

/// Select a fallback for an unresolved label.
///
/// `label` should already be normalized (lower-case). Keywords match as
/// substrings, except short stems which must be a whole token.
pub fn select_fallback(label: &str, confidence: f64) -> FallbackDecision {
    let rule = FallbackRule::ORDER
        .iter()
        .copied()
        .find(|rule| rule.matches(label, confidence))
        .unwrap_or(FallbackRule::Default);

    FallbackDecision {
        rule,
        category: rule.category(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_confidence_wins_over_keywords() {
        let decision = select_fallback("zinc_deficiency", 0.10);
        assert_eq!(decision.rule, FallbackRule::LowConfidence);
        assert_eq!(decision.category, FallbackCategory::EnvironmentalStress);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        // 0.25 is not "below 0.25"
        let decision = select_fallback("zinc_deficiency", 0.25);
        assert_eq!(decision.rule, FallbackRule::NutrientKeyword);
    }

    #[test]
    fn test_nutrient_keyword() {
        let decision = select_fallback("zinc_deficiency", 0.45);
        assert_eq!(decision.rule, FallbackRule::NutrientKeyword);
        assert_eq!(decision.category, FallbackCategory::NutrientDeficiency);

        assert_eq!(select_fallback("interveinal_chlorosis", 0.6).rule, FallbackRule::NutrientKeyword);
        assert_eq!(select_fallback("needs_npk", 0.6).rule, FallbackRule::NutrientKeyword);
    }

    #[test]
    fn test_nutrient_keyword_checked_before_disease_keyword() {
        // Both families present: nutrient rule comes first
        let decision = select_fallback("yellowing_from_root_rot", 0.7);
        assert_eq!(decision.rule, FallbackRule::NutrientKeyword);
    }

    #[test]
    fn test_disease_keyword() {
        let decision = select_fallback("leaf_curl_virus", 0.45);
        assert_eq!(decision.rule, FallbackRule::DiseaseOrEnvironmentalKeyword);
        assert_eq!(decision.category, FallbackCategory::EnvironmentalStress);
    }

    #[test]
    fn test_environmental_keyword() {
        for label in ["heat_stress", "leaf_scorch", "drought_damage", "cold_injury", "overwatering", "waterlogged_roots", "leaf_burn"] {
            let decision = select_fallback(label, 0.5);
            assert_eq!(decision.rule, FallbackRule::DiseaseOrEnvironmentalKeyword, "{}", label);
        }
    }

    #[test]
    fn test_short_stems_do_not_match_inside_crop_names() {
        for label in ["wheat_healthy", "carrot_leaf", "crusty_leaf", "scolding_spot", "watermelon"] {
            let decision = select_fallback(label, 0.6);
            assert_eq!(decision.rule, FallbackRule::Default, "{}", label);
        }
        assert_eq!(
            select_fallback("carrot_root_rot", 0.6).rule,
            FallbackRule::DiseaseOrEnvironmentalKeyword
        );
        assert_eq!(
            select_fallback("wheat_heat_damage", 0.6).rule,
            FallbackRule::DiseaseOrEnvironmentalKeyword
        );
    }

    #[test]
    fn test_default_rule() {
        let decision = select_fallback("mystery_label", 0.9);
        assert_eq!(decision.rule, FallbackRule::Default);
        assert_eq!(decision.category, FallbackCategory::NutrientDeficiency);
    }

    #[test]
    fn test_default_always_matches() {
        assert!(FallbackRule::Default.matches("", 0.0));
        assert!(!FallbackRule::LowConfidence.matches("anything", 0.5));
    }

    #[test]
    fn test_fallback_keys() {
        assert_eq!(FallbackCategory::EnvironmentalStress.key(), "general_plant_stress");
        assert_eq!(FallbackCategory::NutrientDeficiency.key(), "general_nutrient_deficiency");
    }
}
