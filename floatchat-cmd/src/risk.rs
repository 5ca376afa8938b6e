//! `risk` subcommand.

use std::path::Path;

use floatchat_argo::Dataset;
use floatchat_risk::generate_analysis;

pub fn run_risk(data: &str) -> anyhow::Result<()> {
    let dataset = Dataset::load(Path::new(data))?;
    log::info!("risk: loaded {} records from {}", dataset.len(), data);

    let analysis = generate_analysis(&dataset);
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
