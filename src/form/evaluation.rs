//! Supplier evaluation form: one score/weight pair per KPI.

use crate::config::DefaultWeights;
use crate::numeric::parse_optional_number;
use crate::scoring::{compute_weighted_score, ScoreResult, WeightedMetric};
use serde::{Deserialize, Serialize};

/// KPI keys collected on the evaluation form, in display order.
pub const KPI_KEYS: [&str; 3] = ["otif", "corrective_actions", "esg_compliance"];

/// Raw text of one KPI's score and weight inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiField {
    pub score: String,
    pub weight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationForm {
    pub supplier_id: String,
    pub evaluation_date: String,
    pub otif: KpiField,
    pub corrective_actions: KpiField,
    pub esg_compliance: KpiField,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationAction {
    SetSupplierId(String),
    SetEvaluationDate(String),
    /// Set the raw score text of the KPI named by `key`.
    SetScore { key: String, value: String },
    /// Set the raw weight text of the KPI named by `key`.
    SetWeight { key: String, value: String },
    Reset,
}

/// Pure reducer: returns the next form state, leaving the input untouched.
/// Actions naming an unknown KPI key are ignored.
pub fn reduce_evaluation(form: &EvaluationForm, action: EvaluationAction) -> EvaluationForm {
    let mut next = form.clone();
    match action {
        EvaluationAction::SetSupplierId(value) => next.supplier_id = value,
        EvaluationAction::SetEvaluationDate(value) => next.evaluation_date = value,
        EvaluationAction::SetScore { key, value } => {
            if let Some(field) = next.field_mut(&key) {
                field.score = value;
            }
        }
        EvaluationAction::SetWeight { key, value } => {
            if let Some(field) = next.field_mut(&key) {
                field.weight = value;
            }
        }
        EvaluationAction::Reset => next = EvaluationForm::default(),
    }
    next
}

impl EvaluationForm {
    fn field(&self, key: &str) -> Option<&KpiField> {
        match key {
            "otif" => Some(&self.otif),
            "corrective_actions" => Some(&self.corrective_actions),
            "esg_compliance" => Some(&self.esg_compliance),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut KpiField> {
        match key {
            "otif" => Some(&mut self.otif),
            "corrective_actions" => Some(&mut self.corrective_actions),
            "esg_compliance" => Some(&mut self.esg_compliance),
            _ => None,
        }
    }

    /// Adapt the raw field text into engine input. Blank or malformed
    /// fields become `None` rather than errors.
    pub fn metrics(&self) -> Vec<WeightedMetric> {
        KPI_KEYS
            .iter()
            .filter_map(|key| self.field(key).map(|field| (key, field)))
            .map(|(key, field)| {
                WeightedMetric::new(
                    *key,
                    parse_optional_number(&field.score),
                    parse_optional_number(&field.weight),
                )
            })
            .collect()
    }

    /// Live score preview for the current form state.
    pub fn preview(&self, defaults: &DefaultWeights) -> ScoreResult {
        compute_weighted_score(&self.metrics(), defaults)
    }
}
