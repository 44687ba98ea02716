//! Training History Example
//!
//! Demonstrates the full run-history cycle: append two completed
//! training runs, reload the log, and inspect it.
//!
//! Run with: cargo run --example training_history
//!
//! Set `RUST_LOG=historial=debug` to see the store's instrumentation.

use historial::{HistoryStore, RunRecord};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> historial::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Historial Training Run History ===\n");

    // Fresh log in the system temp dir so reruns start clean
    let path = std::env::temp_dir().join("historial_demo.jsonl");
    let _ = std::fs::remove_file(&path);
    let store = HistoryStore::new(&path);

    // -------------------------------------------------------------------------
    // 1. Record a baseline run
    // -------------------------------------------------------------------------
    println!("1. Recording baseline run...");

    let baseline = RunRecord::builder()
        .param("lr", json!(0.01))
        .param("batch_size", json!(32))
        .param("optimizer", json!("sgd"))
        .metric("acc", json!(0.90))
        .metric("loss", json!(0.31))
        .history(json!([0.5, 0.7, 0.9]))
        .model_path("weights", "models/baseline.bin")
        .build();

    store.append(&baseline)?;
    println!("   Timestamp: {}", baseline.timestamp());
    println!("   Params: {}", json!(baseline.params()));
    println!("   Metrics: {}", json!(baseline.metrics()));

    // -------------------------------------------------------------------------
    // 2. Record a tuned run via append_run
    // -------------------------------------------------------------------------
    println!("\n2. Recording tuned run...");

    let tuned = store.append_run(
        [
            ("lr".to_string(), json!(0.02)),
            ("batch_size".to_string(), json!(32)),
            ("optimizer".to_string(), json!("adam")),
        ]
        .into_iter()
        .collect(),
        [("acc".to_string(), json!(0.95)), ("loss".to_string(), json!(0.19))]
            .into_iter()
            .collect(),
        json!([0.6, 0.8, 0.95]),
        std::collections::HashMap::from([(
            "weights".to_string(),
            "models/tuned.bin".to_string(),
        )]),
    )?;
    println!("   Timestamp: {}", tuned.timestamp());
    println!("   Metrics: {}", json!(tuned.metrics()));

    // -------------------------------------------------------------------------
    // 3. Reload the whole history, oldest first
    // -------------------------------------------------------------------------
    println!("\n3. Reloading history from {}...", path.display());

    let runs = store.load()?;
    println!("   {} run(s) recorded:", runs.len());
    for (index, run) in runs.iter().enumerate() {
        println!(
            "   [{index}] {} | acc={} | weights={}",
            run.timestamp(),
            run.metrics().get("acc").unwrap_or(&json!(null)),
            run.model_paths().get("weights").map_or("-", String::as_str),
        );
    }

    // -------------------------------------------------------------------------
    // 4. Inspect the most recent run
    // -------------------------------------------------------------------------
    println!("\n4. Most recent run:");

    if let Some(last) = store.last_run()? {
        println!("   acc={}", last.metrics().get("acc").unwrap_or(&json!(null)));
        println!("   history={}", last.history());
    }

    // -------------------------------------------------------------------------
    // 5. Filter runs by hyperparameter
    // -------------------------------------------------------------------------
    println!("\n5. Runs with lr=0.02:");

    for run in store.runs_with_param("lr", &json!(0.02))? {
        println!(
            "   {} | optimizer={}",
            run.timestamp(),
            run.params().get("optimizer").unwrap_or(&json!(null)),
        );
    }

    println!("\n=== History Complete ({} runs) ===", store.run_count()?);
    Ok(())
}
