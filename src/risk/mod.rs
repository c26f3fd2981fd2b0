pub mod areas;
pub mod levels;

pub use areas::{score_area, total_risk_score, RiskArea, STANDARD_AREAS};
pub use levels::{classify_general_risk, classify_supplier_risk, supplier_risk_label, RiskLevel};
