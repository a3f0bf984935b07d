//! Recommendation Prioritizer
//!
//! Orders user-facing actions in fixed priority bands, highest first:
//! 1. Urgent: bacterial (and viral) findings, one per record
//! 2. High priority: fungal findings, one per record
//! 3. Specific nutrient deficiencies, one per distinct subcategory
//! 4. Generic nutrient fallback, at most one
//! 5. Generic environmental/stress, at most one
//! 6. General plant-care tail, always appended
//!
//! Identical strings are emitted once, at their first (highest) position.

use rustc_hash::FxHashSet;

use crate::types::{Category, DiagnosisRecord};

pub const NO_ISSUES_MESSAGE: &str =
    "No issues detected. Your plant appears healthy; continue regular care.";

pub const NUTRIENT_FALLBACK_ACTION: &str = "Possible nutrient deficiency: run a soil test to pinpoint the missing nutrient, then apply a balanced NPK fertilizer and recheck in two weeks.";

pub const ENVIRONMENTAL_ACTION: &str = "Possible environmental stress: review light, watering, temperature and humidity, and inspect leaves and roots for pests or rot.";

pub const GENERAL_CARE: &[&str] = &[
    "Monitor the plant every few days and photograph changes to track progress.",
    "Water at the base of the plant and let the topsoil dry slightly between waterings.",
    "Keep good air circulation around the foliage.",
    "Remove dead or badly damaged leaves and plant debris.",
];

/// Priority band, declared highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Band {
    Urgent,
    HighPriority,
    NutrientSpecific,
    NutrientFallback,
    Environmental,
}

fn first_step(record: &DiagnosisRecord) -> &str {
    record
        .treatment
        .first()
        .map(|s| s.as_str())
        .unwrap_or("Seek advice from a plant health professional")
}

/// Band and action text for one record
fn action_for(record: &DiagnosisRecord) -> (Band, String) {
    match (record.category, record.is_fallback) {
        (Category::Bacterial | Category::Viral, _) => (
            Band::Urgent,
            format!("URGENT ({}): {}", record.name, first_step(record)),
        ),
        (Category::Fungal, _) => (
            Band::HighPriority,
            format!("HIGH PRIORITY ({}): {}", record.name, first_step(record)),
        ),
        (Category::NutrientDeficiency, false) => (
            Band::NutrientSpecific,
            format!("Correct {} ({}): {}", record.name, record.subcategory, first_step(record)),
        ),
        (Category::NutrientDeficiency, true) => {
            (Band::NutrientFallback, NUTRIENT_FALLBACK_ACTION.to_string())
        }
        (Category::Environmental, _) => (Band::Environmental, ENVIRONMENTAL_ACTION.to_string()),
    }
}

/// Ordered, de-duplicated recommendations for a set of accepted diagnoses.
///
/// An empty input yields the single "no issues" message.
pub fn prioritize_recommendations(records: &[DiagnosisRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec![NO_ISSUES_MESSAGE.to_string()];
    }

    let mut seen_subcategories: FxHashSet<&str> = FxHashSet::default();
    let mut actions: Vec<(Band, String)> = Vec::with_capacity(records.len());

    for record in records {
        if record.category == Category::NutrientDeficiency
            && !record.is_fallback
            && !seen_subcategories.insert(record.subcategory.as_str())
        {
            continue;
        }
        actions.push(action_for(record));
    }

    // Stable: input order is kept within a band
    actions.sort_by_key(|(band, _)| *band);

    let mut seen: FxHashSet<String> = FxHashSet::default();
    actions
        .into_iter()
        .map(|(_, text)| text)
        .chain(GENERAL_CARE.iter().map(|s| s.to_string()))
        .filter(|text| seen.insert(text.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    fn record(category: Category, name: &str, subcategory: &str, is_fallback: bool) -> DiagnosisRecord {
        DiagnosisRecord {
            raw_label: name.to_lowercase(),
            normalized_key: name.to_lowercase(),
            category,
            subcategory: subcategory.to_string(),
            name: name.to_string(),
            symptoms: Vec::new(),
            causes: Vec::new(),
            treatment: vec![format!("Treat {}", name)],
            severity: Severity::Moderate,
            severity_description: String::new(),
            confidence_percent: 60.0,
            is_fallback,
            fallback_rule: None,
        }
    }

    #[test]
    fn test_empty_gives_single_no_issues_message() {
        assert_eq!(prioritize_recommendations(&[]), vec![NO_ISSUES_MESSAGE.to_string()]);
    }

    #[test]
    fn test_band_order() {
        let records = vec![
            record(Category::Environmental, "General Plant Stress", "general_stress", true),
            record(Category::NutrientDeficiency, "Potential Nutrient Deficiency", "general", true),
            record(Category::NutrientDeficiency, "Iron Deficiency", "Fe", false),
            record(Category::Fungal, "Powdery Mildew", "powdery_mildew", false),
            record(Category::Bacterial, "Bacterial Wilt", "bacterial_wilt", false),
        ];
        let recs = prioritize_recommendations(&records);

        assert_eq!(recs[0], "URGENT (Bacterial Wilt): Treat Bacterial Wilt");
        assert_eq!(recs[1], "HIGH PRIORITY (Powdery Mildew): Treat Powdery Mildew");
        assert_eq!(recs[2], "Correct Iron Deficiency (Fe): Treat Iron Deficiency");
        assert_eq!(recs[3], NUTRIENT_FALLBACK_ACTION);
        assert_eq!(recs[4], ENVIRONMENTAL_ACTION);
        assert_eq!(&recs[5..], GENERAL_CARE);
    }

    #[test]
    fn test_general_care_always_appended() {
        let records = vec![record(Category::Fungal, "Leaf Spot", "leaf_spot", false)];
        let recs = prioritize_recommendations(&records);
        assert_eq!(recs.len(), 1 + GENERAL_CARE.len());
        assert!(recs.ends_with(&GENERAL_CARE.iter().map(|s| s.to_string()).collect::<Vec<_>>()));
    }

    #[test]
    fn test_one_action_per_nutrient_subcategory() {
        let mut second = record(Category::NutrientDeficiency, "Nitrogen Starvation", "N", false);
        second.treatment = vec!["Different step".to_string()];
        let records = vec![
            record(Category::NutrientDeficiency, "Nitrogen Deficiency", "N", false),
            second,
            record(Category::NutrientDeficiency, "Calcium Deficiency", "Ca", false),
        ];
        let recs = prioritize_recommendations(&records);
        let nutrient: Vec<_> = recs.iter().filter(|r| r.starts_with("Correct")).collect();
        assert_eq!(nutrient.len(), 2);
        assert!(nutrient[0].contains("(N)"));
        assert!(nutrient[1].contains("(Ca)"));
    }

    #[test]
    fn test_fallbacks_emit_one_generic_action_each() {
        let records = vec![
            record(Category::NutrientDeficiency, "Potential Nutrient Deficiency", "general", true),
            record(Category::NutrientDeficiency, "Potential Nutrient Deficiency", "general", true),
            record(Category::Environmental, "General Plant Stress", "general_stress", true),
            record(Category::Environmental, "General Plant Stress", "general_stress", true),
        ];
        let recs = prioritize_recommendations(&records);
        assert_eq!(recs.iter().filter(|r| *r == NUTRIENT_FALLBACK_ACTION).count(), 1);
        assert_eq!(recs.iter().filter(|r| *r == ENVIRONMENTAL_ACTION).count(), 1);
    }

    #[test]
    fn test_identical_actions_deduplicated() {
        let records = vec![
            record(Category::Bacterial, "Bacterial Spot", "bacterial_spot", false),
            record(Category::Bacterial, "Bacterial Spot", "bacterial_spot", false),
        ];
        let recs = prioritize_recommendations(&records);
        assert_eq!(recs.iter().filter(|r| r.starts_with("URGENT")).count(), 1);
    }

    #[test]
    fn test_input_order_kept_within_band() {
        let records = vec![
            record(Category::Fungal, "Late Blight", "late_blight", false),
            record(Category::Fungal, "Early Blight", "early_blight", false),
        ];
        let recs = prioritize_recommendations(&records);
        assert!(recs[0].contains("Late Blight"));
        assert!(recs[1].contains("Early Blight"));
    }

    #[test]
    fn test_viral_is_urgent() {
        let records = vec![
            record(Category::Fungal, "Leaf Spot", "leaf_spot", false),
            record(Category::Viral, "Mosaic Virus", "mosaic", false),
        ];
        let recs = prioritize_recommendations(&records);
        assert!(recs[0].starts_with("URGENT (Mosaic Virus)"));
    }
}
