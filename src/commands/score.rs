use crate::cli::OutputFormat;
use crate::config::{self, DefaultWeights};
use crate::io::input::read_metrics_file;
use crate::io::output::{build_score_report, create_writer, write_score_report};
use crate::scoring::compute_weighted_score;
use anyhow::Result;
use std::path::PathBuf;

pub struct ScoreConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run(cfg: ScoreConfig) -> Result<()> {
    let weights: DefaultWeights = match &cfg.config {
        Some(path) => config::load_config_from(path)?.weights,
        None => config::get_default_weights().clone(),
    };

    let metrics = read_metrics_file(&cfg.input)?;
    log::debug!("scoring {} metrics from {}", metrics.len(), cfg.input.display());

    let result = compute_weighted_score(&metrics, &weights);
    let report = build_score_report(&metrics, &result);

    let mut writer = create_writer(cfg.output.as_deref())?;
    write_score_report(&mut *writer, &report, cfg.format)
}
