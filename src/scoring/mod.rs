pub mod weighted;

pub use weighted::{compute_weighted_score, resolve_weight, round2, ScoreResult, WeightedMetric};
