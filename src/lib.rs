// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod form;
pub mod io;
pub mod numeric;
pub mod payload;
pub mod risk;
pub mod scoring;

// Re-export commonly used types
pub use crate::numeric::parse_optional_number;

pub use crate::risk::{
    classify_general_risk, classify_supplier_risk, score_area, supplier_risk_label,
    total_risk_score, RiskArea, RiskLevel,
};

pub use crate::scoring::{compute_weighted_score, resolve_weight, ScoreResult, WeightedMetric};

pub use crate::config::{get_config, get_default_weights, DefaultWeights, SupplyscoreConfig};
