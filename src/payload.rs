//! Outbound payload shapes for the external procurement API.
//!
//! Field names here are the API's contract (`otif_score`,
//! `corrective_actions_weight`, `total_risk`, ...). Derived scores are
//! recomputed through the engine at build time so the persisted values can
//! never drift from the on-screen preview.

use crate::config::DefaultWeights;
use crate::form::{EvaluationForm, RiskEntryForm, SupplierRiskForm};
use crate::numeric::parse_optional_number;
use crate::risk::supplier_risk_label;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierEvaluationPayload {
    pub supplier_id: String,
    pub evaluation_date: Option<NaiveDate>,
    pub otif_score: Option<f64>,
    pub otif_weight: Option<f64>,
    pub corrective_actions_score: Option<f64>,
    pub corrective_actions_weight: Option<f64>,
    pub esg_compliance_score: Option<f64>,
    pub esg_compliance_weight: Option<f64>,
    /// Blended weighted score; absent when no KPI was usable.
    pub overall_score: Option<f64>,
}

impl SupplierEvaluationPayload {
    pub fn from_form(form: &EvaluationForm, defaults: &DefaultWeights) -> Self {
        let result = form.preview(defaults);
        Self {
            supplier_id: form.supplier_id.clone(),
            evaluation_date: NaiveDate::parse_from_str(form.evaluation_date.trim(), "%Y-%m-%d")
                .ok(),
            otif_score: parse_optional_number(&form.otif.score),
            otif_weight: parse_optional_number(&form.otif.weight),
            corrective_actions_score: parse_optional_number(&form.corrective_actions.score),
            corrective_actions_weight: parse_optional_number(&form.corrective_actions.weight),
            esg_compliance_score: parse_optional_number(&form.esg_compliance.score),
            esg_compliance_weight: parse_optional_number(&form.esg_compliance.weight),
            overall_score: result.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskEntryPayload {
    pub title: String,
    pub likelihood: Option<f64>,
    pub impact: Option<f64>,
    pub risk_score: f64,
    pub risk_level: String,
}

impl RiskEntryPayload {
    pub fn from_form(form: &RiskEntryForm) -> Self {
        Self {
            title: form.title.clone(),
            likelihood: parse_optional_number(&form.rating.likelihood),
            impact: parse_optional_number(&form.rating.impact),
            risk_score: form.score(),
            risk_level: form.level().label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierRiskPayload {
    pub supplier_id: String,
    pub financial_likelihood: Option<f64>,
    pub financial_impact: Option<f64>,
    pub financial_score: f64,
    pub operational_likelihood: Option<f64>,
    pub operational_impact: Option<f64>,
    pub operational_score: f64,
    pub compliance_likelihood: Option<f64>,
    pub compliance_impact: Option<f64>,
    pub compliance_score: f64,
    pub supply_continuity_likelihood: Option<f64>,
    pub supply_continuity_impact: Option<f64>,
    pub supply_continuity_score: f64,
    pub total_risk: f64,
    /// Level label, or `""` for an unscored supplier.
    pub risk_level: String,
}

impl SupplierRiskPayload {
    pub fn from_form(form: &SupplierRiskForm) -> Self {
        let areas = form.areas();
        let total = form.total();
        // areas() yields the four standard areas in declaration order
        Self {
            supplier_id: form.supplier_id.clone(),
            financial_likelihood: areas[0].likelihood,
            financial_impact: areas[0].impact,
            financial_score: areas[0].score(),
            operational_likelihood: areas[1].likelihood,
            operational_impact: areas[1].impact,
            operational_score: areas[1].score(),
            compliance_likelihood: areas[2].likelihood,
            compliance_impact: areas[2].impact,
            compliance_score: areas[2].score(),
            supply_continuity_likelihood: areas[3].likelihood,
            supply_continuity_impact: areas[3].impact,
            supply_continuity_score: areas[3].score(),
            total_risk: total,
            risk_level: supplier_risk_label(total).to_string(),
        }
    }
}
