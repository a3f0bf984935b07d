//! Health Score Aggregator
//!
//! score = 100 - Σ(confidence × severity_weight × category_weight × 15),
//! clamped to [0, 100] after summation.
//!
//! The weights and the calibration scalar are fixed; downstream consumers
//! compare scores across releases.

use crate::types::{Category, DiagnosisRecord, Severity};

pub const MAX_HEALTH_SCORE: f64 = 100.0;

/// Fixed calibration scalar applied to every finding's penalty
pub const PENALTY_SCALE: f64 = 15.0;

pub fn severity_weight(severity: Severity) -> f64 {
    match severity {
        Severity::Mild => 0.5,
        Severity::Moderate => 1.0,
        Severity::Severe => 1.5,
    }
}

/// Pathogens weigh more per unit confidence; environmental (mostly fallback) is discounted
pub fn category_weight(category: Category) -> f64 {
    match category {
        Category::NutrientDeficiency => 1.0,
        Category::Environmental => 0.8,
        Category::Fungal => 1.3,
        Category::Bacterial => 1.5,
        Category::Viral => 1.7,
    }
}

/// Penalty contributed by a single record
pub fn record_penalty(record: &DiagnosisRecord) -> f64 {
    record.confidence_fraction()
        * severity_weight(record.severity)
        * category_weight(record.category)
        * PENALTY_SCALE
}

pub fn calculate_health_score(records: &[DiagnosisRecord]) -> f64 {
    let total_penalty: f64 = records.iter().map(record_penalty).sum();
    let score = MAX_HEALTH_SCORE - total_penalty;
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, MAX_HEALTH_SCORE)
}
