//! Severity Classifier
//!
//! Severity comes from classifier confidence alone:
//! - < 0.50: Mild
//! - 0.50-0.80: Moderate
//! - >= 0.80: Severe

use crate::types::Severity;

pub const MODERATE_THRESHOLD: f64 = 0.50;
pub const SEVERE_THRESHOLD: f64 = 0.80;

pub fn classify_severity(confidence: f64) -> Severity {
    match confidence {
        c if c >= SEVERE_THRESHOLD => Severity::Severe,
        c if c >= MODERATE_THRESHOLD => Severity::Moderate,
        _ => Severity::Mild,
    }
}
