//! Diagnose Classifier Predictions
//!
//! Reads a JSON file holding one diagnosis request or an array of them
//! (`{"predictions": [{"label": "...", "score": 0.9}], "top_k": 3}`) and
//! prints the diagnosis responses as pretty JSON.
//!
//! Run with: cargo run --features cli --bin diagnose_predictions -- requests.json
//!
//! KNOWLEDGE_BASE_PATH, CONFIDENCE_THRESHOLD and TOP_K are honoured.

use anyhow::{bail, Context, Result};
use plant_diagnosis_rust::{DiagnosisEngine, DiagnosisRequest, KnowledgeBase, ServerConfig};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Deserialize)]
#[serde(untagged)]
enum RequestFile {
    Batch(Vec<DiagnosisRequest>),
    Single(DiagnosisRequest),
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plant_diagnosis_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        bail!("usage: diagnose_predictions <requests.json>");
    }
    let input_path = Path::new(&args[1]);

    let config = ServerConfig::from_env()?;
    let kb = match &config.knowledge_base_path {
        Some(path) => KnowledgeBase::load(Path::new(path))?,
        None => KnowledgeBase::builtin(),
    };
    let engine = DiagnosisEngine::new(Arc::new(kb), config.defaults)?;

    let content = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read requests file: {}", input_path.display()))?;
    let (requests, single) = match serde_json::from_str::<RequestFile>(&content)
        .with_context(|| format!("Failed to parse requests file: {}", input_path.display()))?
    {
        RequestFile::Batch(requests) => (requests, false),
        RequestFile::Single(request) => (vec![request], true),
    };

    tracing::info!("Diagnosing {} request(s) from {}", requests.len(), input_path.display());

    let start = std::time::Instant::now();
    let results = engine.diagnose_batch(&requests);
    tracing::info!("Completed in {:?}", start.elapsed());

    let output: Vec<serde_json::Value> = results
        .into_iter()
        .enumerate()
        .map(|(i, result)| match result {
            Ok(response) => serde_json::to_value(&response)
                .with_context(|| format!("Failed to encode response {}", i)),
            Err(e) => {
                tracing::warn!("Request {} rejected: {}", i, e);
                Ok(serde_json::json!({ "error": e.to_string() }))
            }
        })
        .collect::<Result<_>>()?;

    let rendered = if single {
        serde_json::to_string_pretty(&output[0])?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{}", rendered);

    Ok(())
}
