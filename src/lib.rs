//! Plant Diagnosis Engine
//!
//! Turns the raw (label, confidence) output of a plant image classifier into
//! a structured diagnosis: condition details, severity, an aggregate health
//! score and prioritized recommendations.
//!
//! Layout:
//! - `knowledge_base/`: agronomy records and alias table (read-only)
//! - `engine/`: resolver, fallback policy, severity, assembly, scoring, recommendations
//! - `classifier`: seam for the external image classifier
//! - `api_server`: optional axum HTTP surface (feature `api`)

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod knowledge_base;
pub mod types;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use classifier::{diagnose_image, Classifier};
pub use config::{DiagnosisOptions, ServerConfig};
pub use engine::{diagnose, diagnose_batch, DiagnosisEngine, DiagnosisRequest};
pub use error::{ClassifierError, DiagnosisError};
pub use knowledge_base::{KnowledgeBase, KnowledgeBaseEntry};
pub use types::*;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
