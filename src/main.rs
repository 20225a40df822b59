use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use log::info;
use oral_gi::utils::logging::log_warning;
use oral_gi::{AssessmentReport, EngineConfig, RawDetection, assess};
use serde::Serialize;

/// Report written to stdout
#[derive(Serialize)]
struct ReportEnvelope<'a> {
    generated_at: DateTime<Utc>,
    source: &'a Path,
    report: AssessmentReport,
}

fn load_detections(path: &Path) -> anyhow::Result<Vec<RawDetection>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read detections from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse detections in {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(detections_path) = args.next().map(PathBuf::from) else {
        bail!("usage: oral-gi <detections.json> [config.json]");
    };

    let config = match args.next() {
        Some(config_path) => {
            let config_path = PathBuf::from(config_path);
            info!("Loading configuration from: {}", config_path.display());
            EngineConfig::from_json_file(&config_path)
                .with_context(|| format!("Invalid configuration {}", config_path.display()))?
        }
        None => EngineConfig::default(),
    };

    let detections = load_detections(&detections_path)?;
    if detections.is_empty() {
        log_warning("No detections found", detections_path.to_str());
    }

    let report = assess(&detections, &config);
    if let Some(top) = report.top_disease() {
        info!(
            "Top disease: {} at {:.2} ({} risk)",
            top.disease, top.probability, top.risk
        );
    }

    let envelope = ReportEnvelope {
        generated_at: Utc::now(),
        source: &detections_path,
        report,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
