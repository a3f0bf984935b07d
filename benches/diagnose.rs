use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plant_diagnosis_rust::{
    diagnose, diagnose_batch, DiagnosisOptions, DiagnosisRequest, KnowledgeBase, RawPrediction,
};

fn typical_predictions() -> Vec<RawPrediction> {
    vec![
        RawPrediction::new("Tomato with Late Blight", 0.72),
        RawPrediction::new("bacterial_spot", 0.55),
        RawPrediction::new("Mg", 0.41),
        RawPrediction::new("leaf_curl_virus", 0.33),
        RawPrediction::new("nitrogen_deficiency", 0.31),
        RawPrediction::new("powdery_mildew", 0.12),
    ]
}

fn bench_single(c: &mut Criterion) {
    let kb = KnowledgeBase::builtin();
    let options = DiagnosisOptions::default();
    let predictions = typical_predictions();

    c.bench_function("diagnose_single", |b| {
        b.iter(|| diagnose(black_box(&predictions), &kb, &options))
    });
}

fn bench_batch(c: &mut Criterion) {
    let kb = KnowledgeBase::builtin();
    let options = DiagnosisOptions::default();
    let requests: Vec<DiagnosisRequest> =
        (0..256).map(|_| DiagnosisRequest::new(typical_predictions())).collect();

    c.bench_function("diagnose_batch_256", |b| {
        b.iter(|| diagnose_batch(black_box(&requests), &kb, &options))
    });
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
