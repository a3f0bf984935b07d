//! Diagnosis Assembler
//!
//! Turns accepted predictions into `DiagnosisRecord`s:
//! 1. keep predictions with score >= threshold
//! 2. take the first `top_k` in classifier order (no re-sorting)
//! 3. resolve each label, falling back when unresolved
//! 4. attach knowledge-base content and a confidence-derived severity

use crate::config::DiagnosisOptions;
use crate::engine::fallback::{select_fallback, FallbackRule, FALLBACK_CAVEAT};
use crate::engine::resolver::{resolve_label, Resolution};
use crate::engine::severity::classify_severity;
use crate::knowledge_base::{KnowledgeBase, KnowledgeBaseEntry};
use crate::types::{DiagnosisRecord, RawPrediction};

/// Build one record per surviving prediction, in input order.
///
/// Options are assumed validated. Returns an empty list when nothing
/// clears the threshold.
pub fn assemble_diagnoses(
    predictions: &[RawPrediction],
    kb: &KnowledgeBase,
    options: &DiagnosisOptions,
) -> Vec<DiagnosisRecord> {
    predictions
        .iter()
        .filter(|p| p.score >= options.confidence_threshold)
        .take(options.top_k)
        .filter_map(|p| assemble_record(p, kb))
        .collect()
}

fn assemble_record(prediction: &RawPrediction, kb: &KnowledgeBase) -> Option<DiagnosisRecord> {
    let (key, fallback_rule) = match resolve_label(kb, &prediction.label) {
        Resolution::Direct { key } | Resolution::Alias { key } => (key, None),
        Resolution::Unresolved { normalized } => {
            let decision = select_fallback(&normalized, prediction.score);
            // Curation signal: labels landing here are candidates for new entries or aliases
            tracing::warn!(
                "Unresolved classifier label '{}' (score {:.3}) → {} via {:?}",
                prediction.label,
                prediction.score,
                decision.category.key(),
                decision.rule
            );
            (decision.category.key().to_string(), Some(decision.rule))
        }
    };

    // Fallback keys are guaranteed by KnowledgeBase validation; specific keys by the resolver
    let Some(entry) = kb.get(&key) else {
        tracing::error!("Knowledge base has no entry for resolved key '{}'", key);
        return None;
    };

    let is_fallback = KnowledgeBase::is_fallback_key(&key);
    tracing::debug!(
        "Resolved '{}' → '{}' (fallback: {}, score: {:.3})",
        prediction.label,
        key,
        is_fallback,
        prediction.score
    );

    Some(build_record(prediction, key, entry, is_fallback, fallback_rule))
}

fn build_record(
    prediction: &RawPrediction,
    key: String,
    entry: &KnowledgeBaseEntry,
    is_fallback: bool,
    fallback_rule: Option<FallbackRule>,
) -> DiagnosisRecord {
    let severity = classify_severity(prediction.score);

    let mut treatment = Vec::with_capacity(entry.treatment.len() + 1);
    if is_fallback {
        treatment.push(FALLBACK_CAVEAT.to_string());
    }
    treatment.extend(entry.treatment.iter().cloned());

    DiagnosisRecord {
        raw_label: prediction.label.clone(),
        normalized_key: key,
        category: entry.category,
        subcategory: entry.subcategory.clone(),
        name: entry.name.clone(),
        symptoms: entry.symptoms.clone(),
        causes: entry.causes.clone(),
        treatment,
        severity,
        severity_description: entry.severity_indicators.for_severity(severity).to_string(),
        confidence_percent: prediction.score * 100.0,
        is_fallback,
        fallback_rule,
    }
}
