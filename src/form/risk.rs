//! Risk forms: the general risk-register entry and the four-area supplier
//! risk assessment. Both classify through their own threshold policy.

use crate::numeric::parse_optional_number;
use crate::risk::{
    classify_general_risk, classify_supplier_risk, score_area, total_risk_score, RiskArea,
    RiskLevel, STANDARD_AREAS,
};
use serde::{Deserialize, Serialize};

/// Raw text of one area's likelihood and impact inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaField {
    pub likelihood: String,
    pub impact: String,
}

impl AreaField {
    fn likelihood_value(&self) -> Option<f64> {
        parse_optional_number(&self.likelihood)
    }

    fn impact_value(&self) -> Option<f64> {
        parse_optional_number(&self.impact)
    }
}

/// One entry on the general risk register.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskEntryForm {
    pub title: String,
    pub rating: AreaField,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RiskEntryAction {
    SetTitle(String),
    SetLikelihood(String),
    SetImpact(String),
    Reset,
}

pub fn reduce_risk_entry(form: &RiskEntryForm, action: RiskEntryAction) -> RiskEntryForm {
    let mut next = form.clone();
    match action {
        RiskEntryAction::SetTitle(value) => next.title = value,
        RiskEntryAction::SetLikelihood(value) => next.rating.likelihood = value,
        RiskEntryAction::SetImpact(value) => next.rating.impact = value,
        RiskEntryAction::Reset => next = RiskEntryForm::default(),
    }
    next
}

impl RiskEntryForm {
    pub fn score(&self) -> f64 {
        score_area(self.rating.likelihood_value(), self.rating.impact_value())
    }

    /// Register entries always classify; an unrated entry scores 0 and
    /// lands in the Low band.
    pub fn level(&self) -> RiskLevel {
        classify_general_risk(self.score())
    }
}

/// The supplier risk assessment: one likelihood/impact pair per standard
/// risk area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierRiskForm {
    pub supplier_id: String,
    pub financial: AreaField,
    pub operational: AreaField,
    pub compliance: AreaField,
    pub supply_continuity: AreaField,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SupplierRiskAction {
    SetSupplierId(String),
    SetLikelihood { area: String, value: String },
    SetImpact { area: String, value: String },
    Reset,
}

pub fn reduce_supplier_risk(form: &SupplierRiskForm, action: SupplierRiskAction) -> SupplierRiskForm {
    let mut next = form.clone();
    match action {
        SupplierRiskAction::SetSupplierId(value) => next.supplier_id = value,
        SupplierRiskAction::SetLikelihood { area, value } => {
            if let Some(field) = next.area_mut(&area) {
                field.likelihood = value;
            }
        }
        SupplierRiskAction::SetImpact { area, value } => {
            if let Some(field) = next.area_mut(&area) {
                field.impact = value;
            }
        }
        SupplierRiskAction::Reset => next = SupplierRiskForm::default(),
    }
    next
}

impl SupplierRiskForm {
    fn area(&self, name: &str) -> Option<&AreaField> {
        match name {
            "financial" => Some(&self.financial),
            "operational" => Some(&self.operational),
            "compliance" => Some(&self.compliance),
            "supply_continuity" => Some(&self.supply_continuity),
            _ => None,
        }
    }

    fn area_mut(&mut self, name: &str) -> Option<&mut AreaField> {
        match name {
            "financial" => Some(&mut self.financial),
            "operational" => Some(&mut self.operational),
            "compliance" => Some(&mut self.compliance),
            "supply_continuity" => Some(&mut self.supply_continuity),
            _ => None,
        }
    }

    /// Adapt the raw field text into engine input, one `RiskArea` per
    /// standard area in display order.
    pub fn areas(&self) -> Vec<RiskArea> {
        STANDARD_AREAS
            .iter()
            .filter_map(|name| self.area(name).map(|field| (name, field)))
            .map(|(name, field)| {
                RiskArea::new(*name, field.likelihood_value(), field.impact_value())
            })
            .collect()
    }

    pub fn total(&self) -> f64 {
        total_risk_score(&self.areas())
    }

    /// `None` until at least one area has both ratings filled in.
    pub fn level(&self) -> Option<RiskLevel> {
        classify_supplier_risk(self.total())
    }
}
