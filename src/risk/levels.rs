//! Pure functions for classifying risk scores into severity levels.
//!
//! Two independent threshold tables exist in the domain: one for the general
//! risk register and one for supplier risk. They are distinct policies and
//! must not be merged. Both are total functions; callers coerce malformed
//! input to 0 before invocation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete severity bucket derived from a continuous risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a general risk-register score.
///
/// Thresholds (inclusive lower bounds, evaluated highest first):
/// - score >= 20: Critical
/// - score >= 12: High
/// - score >= 7: Medium
/// - otherwise: Low
pub fn classify_general_risk(score: f64) -> RiskLevel {
    match score {
        s if s >= 20.0 => RiskLevel::Critical,
        s if s >= 12.0 => RiskLevel::High,
        s if s >= 7.0 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

/// Classify a supplier risk score.
///
/// A zero or negative score means "unscored" rather than low risk, so the
/// result is `None` there. Otherwise:
/// - score >= 16: Critical
/// - score >= 10: High
/// - score >= 6: Medium
/// - otherwise: Low
pub fn classify_supplier_risk(score: f64) -> Option<RiskLevel> {
    if score <= 0.0 {
        return None;
    }
    Some(match score {
        s if s >= 16.0 => RiskLevel::Critical,
        s if s >= 10.0 => RiskLevel::High,
        s if s >= 6.0 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    })
}

/// Supplier risk label as the external API expects it: the level name, or
/// the empty string for an unscored supplier.
pub fn supplier_risk_label(score: f64) -> &'static str {
    classify_supplier_risk(score).map_or("", |level| level.label())
}
