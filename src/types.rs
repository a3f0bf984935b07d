//! Core data model for plant diagnosis
//!
//! Raw classifier predictions go in, a `DiagnosisResponse` comes out.
//! Every type here is plain owned data: records are created once by the
//! assembler and never shared between requests.

use serde::{Deserialize, Serialize};

use crate::engine::fallback::FallbackRule;

/// One (label, confidence) pair emitted by the external image classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    pub label: String,
    /// Classifier confidence in [0, 1]
    pub score: f64,
}

impl RawPrediction {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Condition category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NutrientDeficiency,
    Fungal,
    Bacterial,
    Viral,
    Environmental,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::NutrientDeficiency,
        Category::Fungal,
        Category::Bacterial,
        Category::Viral,
        Category::Environmental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NutrientDeficiency => "nutrient_deficiency",
            Category::Fungal => "fungal",
            Category::Bacterial => "bacterial",
            Category::Viral => "viral",
            Category::Environmental => "environmental",
        }
    }

    /// Human-readable name for client display
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::NutrientDeficiency => "Nutrient Deficiency",
            Category::Fungal => "Fungal Disease",
            Category::Bacterial => "Bacterial Disease",
            Category::Viral => "Viral Disease",
            Category::Environmental => "Environmental Stress",
        }
    }

    /// Pathogen categories count as "diseases" in the response summary
    pub fn is_disease(&self) -> bool {
        matches!(self, Category::Fungal | Category::Bacterial | Category::Viral)
    }
}

/// Severity tier derived solely from confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

/// Structured diagnosis for one accepted prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    pub raw_label: String,
    pub normalized_key: String,
    pub category: Category,
    pub subcategory: String,
    pub name: String,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    /// For fallback records the first step is always the low-confidence caveat
    pub treatment: Vec<String>,
    pub severity: Severity,
    /// Knowledge-base description of what this severity tier looks like
    pub severity_description: String,
    /// Source score × 100, untouched by normalization
    pub confidence_percent: f64,
    pub is_fallback: bool,
    /// Which fallback rule fired (None for specific records and direct fallback hits)
    pub fallback_rule: Option<FallbackRule>,
}

impl DiagnosisRecord {
    /// Confidence back on the classifier's 0-1 scale
    pub fn confidence_fraction(&self) -> f64 {
        self.confidence_percent / 100.0
    }
}

/// Per-response rollup of findings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisSummary {
    /// Distinct nutrient-deficiency names, in diagnosis order
    pub nutrient_deficiencies: Vec<String>,
    /// Distinct fungal/bacterial/viral names, in diagnosis order
    pub diseases: Vec<String>,
    pub total_issues: usize,
}

/// Final response object, built once per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResponse {
    pub diagnoses: Vec<DiagnosisRecord>,
    pub primary_diagnosis: Option<DiagnosisRecord>,
    /// Always within [0, 100]
    pub health_score: f64,
    pub recommendations: Vec<String>,
    pub summary: DiagnosisSummary,
}

/// Nutrient symbol with display name ("N" → "Nitrogen")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientSymbol {
    pub symbol: String,
    pub name: String,
}

/// Static enumeration for client-side display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryListing {
    pub nutrients: Vec<NutrientSymbol>,
    pub disease_types: Vec<Category>,
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::NutrientDeficiency).unwrap();
        assert_eq!(json, "\"nutrient_deficiency\"");
        let back: Category = serde_json::from_str("\"bacterial\"").unwrap();
        assert_eq!(back, Category::Bacterial);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Mild < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Severe);
    }

    #[test]
    fn test_disease_categories() {
        assert!(Category::Fungal.is_disease());
        assert!(Category::Viral.is_disease());
        assert!(!Category::NutrientDeficiency.is_disease());
        assert!(!Category::Environmental.is_disease());
    }
}
