//! Explicit, immutable form state.
//!
//! Forms hold the raw field text exactly as typed. Reducers take a state
//! and an action and return the next state; every derived number is
//! recomputed from the raw text through the scoring engine, so a live
//! preview and a saved payload can never disagree.

pub mod evaluation;
pub mod risk;

pub use evaluation::{reduce_evaluation, EvaluationAction, EvaluationForm, KpiField};
pub use risk::{
    reduce_risk_entry, reduce_supplier_risk, AreaField, RiskEntryAction, RiskEntryForm,
    SupplierRiskAction, SupplierRiskForm,
};
