//! Image classifier seam
//!
//! The classifier itself (model weights, preprocessing) lives outside this
//! crate. Anything implementing `Classifier` can be plugged in; its failures
//! surface as `DiagnosisError::Classifier` before the engine runs.

use crate::config::DiagnosisOptions;
use crate::engine::diagnose;
use crate::error::{ClassifierError, Result};
use crate::knowledge_base::KnowledgeBase;
use crate::types::{DiagnosisResponse, RawPrediction};

/// External image classifier: image bytes → predictions, highest score first
pub trait Classifier: Send + Sync {
    fn classify(&self, image: &[u8]) -> std::result::Result<Vec<RawPrediction>, ClassifierError>;
}

impl<F> Classifier for F
where
    F: Fn(&[u8]) -> std::result::Result<Vec<RawPrediction>, ClassifierError> + Send + Sync,
{
    fn classify(&self, image: &[u8]) -> std::result::Result<Vec<RawPrediction>, ClassifierError> {
        self(image)
    }
}

/// Classify once, then run the engine on the result
pub fn diagnose_image<C: Classifier + ?Sized>(
    classifier: &C,
    image: &[u8],
    kb: &KnowledgeBase,
    options: &DiagnosisOptions,
) -> Result<DiagnosisResponse> {
    options.validate()?;
    if image.is_empty() {
        return Err(ClassifierError::InvalidImage("empty image".to_string()).into());
    }

    let predictions = classifier.classify(image).map_err(|e| {
        tracing::error!("Classifier failed: {}", e);
        e
    })?;
    tracing::info!("Classifier returned {} predictions", predictions.len());

    diagnose(&predictions, kb, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagnosisError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClassifier {
        calls: AtomicUsize,
        predictions: Vec<RawPrediction>,
    }

    impl Classifier for CountingClassifier {
        fn classify(&self, _image: &[u8]) -> std::result::Result<Vec<RawPrediction>, ClassifierError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.predictions.clone())
        }
    }

    #[test]
    fn test_classifier_called_once() {
        let classifier = CountingClassifier {
            calls: AtomicUsize::new(0),
            predictions: vec![RawPrediction::new("Tomato with Early Blight", 0.82)],
        };
        let kb = KnowledgeBase::builtin();
        let response =
            diagnose_image(&classifier, b"jpeg", &kb, &DiagnosisOptions::default()).unwrap();
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
        assert_eq!(response.diagnoses[0].normalized_key, "early_blight");
    }

    #[test]
    fn test_classifier_failure_is_distinct_error() {
        let failing = |_: &[u8]| -> std::result::Result<Vec<RawPrediction>, ClassifierError> {
            Err(ClassifierError::Unavailable("model not loaded".to_string()))
        };
        let kb = KnowledgeBase::builtin();
        let err = diagnose_image(&failing, b"jpeg", &kb, &DiagnosisOptions::default()).unwrap_err();
        assert!(matches!(err, DiagnosisError::Classifier(ClassifierError::Unavailable(_))));
    }

    #[test]
    fn test_empty_image_rejected_before_classifying() {
        let classifier = CountingClassifier {
            calls: AtomicUsize::new(0),
            predictions: Vec::new(),
        };
        let kb = KnowledgeBase::builtin();
        let err = diagnose_image(&classifier, b"", &kb, &DiagnosisOptions::default()).unwrap_err();
        assert!(matches!(err, DiagnosisError::Classifier(ClassifierError::InvalidImage(_))));
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_classifier_output_is_healthy() {
        let empty = |_: &[u8]| -> std::result::Result<Vec<RawPrediction>, ClassifierError> {
            Ok(Vec::new())
        };
        let kb = KnowledgeBase::builtin();
        let response = diagnose_image(&empty, b"jpeg", &kb, &DiagnosisOptions::default()).unwrap();
        assert_eq!(response.health_score, 100.0);
    }
}
