use crate::cli::{OutputFormat, RiskPolicy};
use crate::io::input::read_risk_areas_file;
use crate::io::output::{build_risk_report, create_writer, write_risk_report};
use crate::risk::{classify_general_risk, classify_supplier_risk, total_risk_score};
use anyhow::Result;
use std::path::PathBuf;

pub struct RiskConfig {
    pub input: PathBuf,
    pub policy: RiskPolicy,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run(cfg: RiskConfig) -> Result<()> {
    let areas = read_risk_areas_file(&cfg.input)?;
    let total = total_risk_score(&areas);
    log::debug!("total risk {} across {} areas", total, areas.len());

    let (policy_name, level) = match cfg.policy {
        RiskPolicy::General => ("general", Some(classify_general_risk(total))),
        RiskPolicy::Supplier => ("supplier", classify_supplier_risk(total)),
    };

    let report = build_risk_report(&areas, total, policy_name, level);
    let mut writer = create_writer(cfg.output.as_deref())?;
    write_risk_report(&mut *writer, &report, cfg.format)
}
