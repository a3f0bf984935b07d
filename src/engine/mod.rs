//! Diagnosis decision engine
//!
//! Each component lives in its own module:
//! - `resolver`: raw label → canonical key
//! - `fallback`: ordered policy for unresolved labels
//! - `severity`: confidence → severity tier
//! - `assembler`: predictions → diagnosis records
//! - `health_score`: records → 0-100 score
//! - `recommendations`: records → prioritized actions
//!
//! `diagnose` wires them together. It is pure: no I/O, no shared mutable
//! state, same input → same output.

pub mod assembler;
pub mod fallback;
pub mod health_score;
pub mod recommendations;
pub mod resolver;
pub mod severity;

pub use assembler::assemble_diagnoses;
pub use fallback::{select_fallback, FallbackCategory, FallbackDecision, FallbackRule, FALLBACK_CAVEAT};
pub use health_score::calculate_health_score;
pub use recommendations::{prioritize_recommendations, NO_ISSUES_MESSAGE};
pub use resolver::{resolve_label, Resolution};
pub use severity::classify_severity;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::DiagnosisOptions;
use crate::error::{DiagnosisError, Result};
use crate::knowledge_base::KnowledgeBase;
use crate::types::{
    Category, CategoryListing, DiagnosisRecord, DiagnosisResponse, DiagnosisSummary, RawPrediction,
};

/// Diagnose one prediction list.
///
/// Fails only when `options` are invalid; an empty or fully filtered list
/// is the healthy "no issues" response.
pub fn diagnose(
    predictions: &[RawPrediction],
    kb: &KnowledgeBase,
    options: &DiagnosisOptions,
) -> Result<DiagnosisResponse> {
    options.validate()?;

    let diagnoses = assemble_diagnoses(predictions, kb, options);
    let health_score = calculate_health_score(&diagnoses);
    let recommendations = prioritize_recommendations(&diagnoses);
    let summary = summarize(&diagnoses);

    tracing::debug!(
        "Diagnosed {} predictions → {} findings, health score {:.1}",
        predictions.len(),
        diagnoses.len(),
        health_score
    );

    Ok(DiagnosisResponse {
        primary_diagnosis: diagnoses.first().cloned(),
        diagnoses,
        health_score,
        recommendations,
        summary,
    })
}

/// Distinct finding names split into nutrient and disease groups
pub fn summarize(diagnoses: &[DiagnosisRecord]) -> DiagnosisSummary {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut summary = DiagnosisSummary {
        total_issues: diagnoses.len(),
        ..Default::default()
    };

    for record in diagnoses {
        if !seen.insert(record.name.as_str()) {
            continue;
        }
        if record.category == Category::NutrientDeficiency {
            summary.nutrient_deficiencies.push(record.name.clone());
        } else if record.category.is_disease() {
            summary.diseases.push(record.name.clone());
        }
    }
    summary
}

/// One request of a batch: predictions plus optional per-request overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    pub predictions: Vec<RawPrediction>,
    #[serde(default)]
    pub confidence_threshold: Option<f64>,
    #[serde(default)]
    pub top_k: Option<usize>,
}

impl DiagnosisRequest {
    pub fn new(predictions: Vec<RawPrediction>) -> Self {
        Self {
            predictions,
            confidence_threshold: None,
            top_k: None,
        }
    }

    pub fn options(&self, defaults: &DiagnosisOptions) -> DiagnosisOptions {
        defaults.with_overrides(self.confidence_threshold, self.top_k)
    }

    /// Reject scores outside [0, 1] (NaN and infinities included).
    ///
    /// Requests arrive from untrusted callers; classifier output reaching
    /// `diagnose` directly is trusted as delivered.
    pub fn validate(&self) -> Result<()> {
        for (i, prediction) in self.predictions.iter().enumerate() {
            if !(0.0..=1.0).contains(&prediction.score) {
                return Err(DiagnosisError::InvalidInput {
                    field: "predictions",
                    reason: format!(
                        "score of prediction {} ('{}') must be within [0, 1], got {}",
                        i, prediction.label, prediction.score
                    ),
                });
            }
        }
        Ok(())
    }

    /// Validate, then diagnose with these overrides applied to `defaults`
    pub fn diagnose(&self, kb: &KnowledgeBase, defaults: &DiagnosisOptions) -> Result<DiagnosisResponse> {
        self.validate()?;
        diagnose(&self.predictions, kb, &self.options(defaults))
    }
}

/// Diagnose many independent requests in parallel; output order matches input
pub fn diagnose_batch(
    requests: &[DiagnosisRequest],
    kb: &KnowledgeBase,
    defaults: &DiagnosisOptions,
) -> Vec<Result<DiagnosisResponse>> {
    requests
        .par_iter()
        .map(|request| request.diagnose(kb, defaults))
        .collect()
}

/// Knowledge base plus server-wide default options, cheap to clone and share
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    kb: Arc<KnowledgeBase>,
    defaults: DiagnosisOptions,
}

impl DiagnosisEngine {
    pub fn new(kb: Arc<KnowledgeBase>, defaults: DiagnosisOptions) -> Result<Self> {
        defaults.validate()?;
        Ok(Self { kb, defaults })
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn defaults(&self) -> &DiagnosisOptions {
        &self.defaults
    }

    pub fn diagnose(&self, predictions: &[RawPrediction]) -> Result<DiagnosisResponse> {
        diagnose(predictions, &self.kb, &self.defaults)
    }

    pub fn diagnose_request(&self, request: &DiagnosisRequest) -> Result<DiagnosisResponse> {
        request.diagnose(&self.kb, &self.defaults)
    }

    pub fn diagnose_batch(&self, requests: &[DiagnosisRequest]) -> Vec<Result<DiagnosisResponse>> {
        diagnose_batch(requests, &self.kb, &self.defaults)
    }

    pub fn categories(&self) -> CategoryListing {
        self.kb.category_listing()
    }
}

impl Default for DiagnosisEngine {
    fn default() -> Self {
        Self {
            kb: Arc::new(KnowledgeBase::builtin()),
            defaults: DiagnosisOptions::default(),
        }
    }
}
