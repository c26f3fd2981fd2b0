//! Likelihood x impact scoring for risk areas.
//!
//! Each risk area carries a likelihood and an impact rating (domain
//! convention is 1-5, not enforced here). The area sub-score is their
//! product; a supplier's total risk is the sum over its areas.

use serde::{Deserialize, Serialize};

/// Risk areas evaluated on the supplier risk form.
pub const STANDARD_AREAS: [&str; 4] = [
    "financial",
    "operational",
    "compliance",
    "supply_continuity",
];

/// One likelihood/impact pair. Missing ratings count as 0, so a half-filled
/// area scores 0 instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskArea {
    #[serde(rename = "area")]
    pub name: String,
    #[serde(default)]
    pub likelihood: Option<f64>,
    #[serde(default)]
    pub impact: Option<f64>,
}

impl RiskArea {
    pub fn new(name: impl Into<String>, likelihood: Option<f64>, impact: Option<f64>) -> Self {
        Self {
            name: name.into(),
            likelihood,
            impact,
        }
    }

    pub fn score(&self) -> f64 {
        score_area(self.likelihood, self.impact)
    }
}

/// Sub-score for one risk area: likelihood times impact, with absent
/// ratings coerced to 0. No clamping or scale enforcement.
pub fn score_area(likelihood: Option<f64>, impact: Option<f64>) -> f64 {
    likelihood.unwrap_or(0.0) * impact.unwrap_or(0.0)
}

/// Total risk score across areas. Order-independent.
pub fn total_risk_score(areas: &[RiskArea]) -> f64 {
    areas.iter().map(RiskArea::score).sum()
}
