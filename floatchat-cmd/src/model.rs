//! `train` and `predict` subcommands.

use std::path::Path;

use floatchat_argo::Dataset;
use floatchat_model::{train, TempModel, MIN_TRAIN_RECORDS};

pub fn run_train(data: &str, model_out: &str) -> anyhow::Result<()> {
    let dataset = Dataset::load(Path::new(data))?;
    log::info!("train: loaded {} records from {}", dataset.len(), data);

    let Some((model, report)) = train(&dataset) else {
        // Insufficient or degenerate data is a status, not a failure.
        println!(
            "{}",
            serde_json::json!({
                "status": "error",
                "message": format!(
                    "Need at least {} records with a non-degenerate fit, got {}",
                    MIN_TRAIN_RECORDS,
                    dataset.len()
                ),
            })
        );
        return Ok(());
    };

    model.save(Path::new(model_out))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "status": "success",
            "metrics": report,
            "model_path": model_out,
        }))?
    );
    Ok(())
}

pub fn run_predict(model: &str, lat: f64, lon: f64, pressure: f64) -> anyhow::Result<()> {
    let model = TempModel::load(Path::new(model))?;
    let predicted = model.predict(lat, lon, pressure);
    println!(
        "{}",
        serde_json::json!({
            "predicted_temperature": predicted,
            "latitude": lat,
            "longitude": lon,
            "pressure": pressure,
        })
    );
    Ok(())
}
