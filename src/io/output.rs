//! Report rendering for the CLI: JSON for machines, a table for terminals.

use crate::cli::OutputFormat;
use crate::risk::{RiskArea, RiskLevel};
use crate::scoring::{ScoreResult, WeightedMetric};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One KPI row of a score report.
#[derive(Debug, Clone, Serialize)]
pub struct MetricBreakdown {
    pub key: String,
    pub score: Option<f64>,
    pub normalized_weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub metrics: Vec<MetricBreakdown>,
    pub value: Option<f64>,
}

pub fn build_score_report(metrics: &[WeightedMetric], result: &ScoreResult) -> ScoreReport {
    let breakdown = metrics
        .iter()
        .map(|m| MetricBreakdown {
            key: m.key.clone(),
            score: m.score,
            normalized_weight: result
                .normalized_weights
                .as_ref()
                .and_then(|weights| weights.get(&m.key).copied()),
        })
        .collect();
    ScoreReport {
        metrics: breakdown,
        value: result.value,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AreaBreakdown {
    pub area: String,
    pub likelihood: Option<f64>,
    pub impact: Option<f64>,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub areas: Vec<AreaBreakdown>,
    pub total: f64,
    pub policy: String,
    /// Level label; empty for a supplier total of zero or below.
    pub level: String,
}

pub fn build_risk_report(
    areas: &[RiskArea],
    total: f64,
    policy: &str,
    level: Option<RiskLevel>,
) -> RiskReport {
    RiskReport {
        areas: areas
            .iter()
            .map(|a| AreaBreakdown {
                area: a.name.clone(),
                likelihood: a.likelihood,
                impact: a.impact,
                score: a.score(),
            })
            .collect(),
        total,
        policy: policy.to_string(),
        level: level.map_or(String::new(), |l| l.label().to_string()),
    }
}

/// Open the output destination: a file when `--output` was given, stdout
/// otherwise.
pub fn create_writer(output: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(std::io::stdout())),
    }
}

pub fn write_score_report(
    writer: &mut dyn Write,
    report: &ScoreReport,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(writer, report),
        OutputFormat::Terminal => write_score_table(writer, report),
    }
}

pub fn write_risk_report(
    writer: &mut dyn Write,
    report: &RiskReport,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(writer, report),
        OutputFormat::Terminal => write_risk_table(writer, report),
    }
}

fn write_json<T: Serialize>(writer: &mut dyn Write, report: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or("-".to_string(), |v| format!("{}", v))
}

fn write_score_table(writer: &mut dyn Write, report: &ScoreReport) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["KPI", "Score", "Normalized weight"]);
    for metric in &report.metrics {
        table.add_row(vec![
            Cell::new(&metric.key),
            Cell::new(format_optional(metric.score)),
            Cell::new(
                metric
                    .normalized_weight
                    .map_or("-".to_string(), |w| format!("{:.4}", w)),
            ),
        ]);
    }
    writeln!(writer, "{}", table)?;

    match report.value {
        Some(value) => writeln!(writer, "Weighted score: {}", format!("{:.2}", value).bold())?,
        None => writeln!(writer, "{}", "Insufficient data to compute a score".yellow())?,
    }
    Ok(())
}

fn colorize_level(label: &str) -> String {
    match label {
        "Critical" => label.red().bold().to_string(),
        "High" => label.red().to_string(),
        "Medium" => label.yellow().to_string(),
        "Low" => label.green().to_string(),
        _ => "unscored".dimmed().to_string(),
    }
}

fn write_risk_table(writer: &mut dyn Write, report: &RiskReport) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Area", "Likelihood", "Impact", "Score"]);
    for area in &report.areas {
        table.add_row(vec![
            Cell::new(&area.area),
            Cell::new(format_optional(area.likelihood)),
            Cell::new(format_optional(area.impact)),
            Cell::new(format!("{}", area.score)),
        ]);
    }
    writeln!(writer, "{}", table)?;
    writeln!(
        writer,
        "Total risk: {} ({} policy) -> {}",
        format!("{}", report.total).bold(),
        report.policy,
        colorize_level(&report.level)
    )?;
    Ok(())
}
