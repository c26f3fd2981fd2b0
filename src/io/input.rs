//! JSON input files for the CLI.
//!
//! A metrics file is an array of `{"key", "score", "weight"}` objects;
//! `score` and `weight` may be null or omitted. A risk file is an array of
//! `{"area", "likelihood", "impact"}` objects with the same null handling.

use crate::risk::RiskArea;
use crate::scoring::WeightedMetric;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn read_metrics_file(path: &Path) -> Result<Vec<WeightedMetric>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read metrics file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse metrics file {}", path.display()))
}

pub fn read_risk_areas_file(path: &Path) -> Result<Vec<RiskArea>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read risk file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse risk file {}", path.display()))
}
