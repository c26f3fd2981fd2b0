//! Weighted KPI aggregation.
//!
//! Combines independently weighted component scores (each on a 0-100 scale)
//! into one blended score. Weights may arrive as percentages (0-100) or as
//! decimal fractions (0-1); both forms produce the same result. All functions
//! here are pure and never panic.

use crate::config::DefaultWeights;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single KPI component as collected from a form or API response.
///
/// `score` is `None` when the field was left blank; such metrics contribute
/// neither numerator nor denominator. `weight` is `None` when the user did
/// not supply one, in which case the per-key default from configuration
/// applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMetric {
    pub key: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl WeightedMetric {
    pub fn new(key: impl Into<String>, score: Option<f64>, weight: Option<f64>) -> Self {
        Self {
            key: key.into(),
            score,
            weight,
        }
    }
}

/// Result of weighted aggregation.
///
/// Both fields are `None` when no metric carried a usable score/weight
/// combination; callers treat that as "insufficient data to display a
/// score", not as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub value: Option<f64>,
    pub normalized_weights: Option<BTreeMap<String, f64>>,
}

impl ScoreResult {
    pub fn empty() -> Self {
        Self {
            value: None,
            normalized_weights: None,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.value.is_some()
    }
}

/// Resolve a raw weight into a decimal fraction.
///
/// Values above 1 are read as percentages, anything else as an
/// already-decimal fraction. A weight of exactly `1.0` therefore means 100%,
/// never 1%.
pub fn resolve_weight(raw: f64) -> f64 {
    if raw > 1.0 {
        raw / 100.0
    } else {
        raw
    }
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Combine 1-N weighted component scores into one blended 0-100 score.
///
/// Metrics without a score are skipped entirely. For the rest, weights are
/// resolved to decimals (supplied value, else the per-key default from
/// `defaults`, else unusable). Metrics with a positive resolved weight are
/// preferred; when none exists, all scored metrics are kept. The surviving
/// weights are normalized to sum to 1.0 and the blended score is the
/// weight-proportional average of the clamped component scores.
pub fn compute_weighted_score(metrics: &[WeightedMetric], defaults: &DefaultWeights) -> ScoreResult {
    let scored: Vec<(&str, f64, f64)> = metrics
        .iter()
        .filter_map(|m| {
            let score = m.score?;
            let decimal = m
                .weight
                .or_else(|| defaults.weight_for(&m.key))
                .map(resolve_weight)
                .unwrap_or(0.0);
            Some((m.key.as_str(), score.clamp(0.0, 100.0), decimal))
        })
        .collect();

    if scored.is_empty() {
        return ScoreResult::empty();
    }

    let positive: Vec<(&str, f64, f64)> = scored
        .iter()
        .copied()
        .filter(|(_, _, decimal)| *decimal > 0.0)
        .collect();

    let target = if positive.is_empty() { scored } else { positive };

    let total: f64 = target.iter().map(|(_, _, decimal)| decimal.max(0.0)).sum();
    if total <= 0.0 {
        return ScoreResult::empty();
    }

    let mut normalized_weights: BTreeMap<String, f64> = BTreeMap::new();
    let mut blended = 0.0;
    for (key, score, decimal) in &target {
        let normalized = decimal.max(0.0) / total;
        blended += score * normalized;
        // duplicate keys accumulate so the map still sums to 1.0
        *normalized_weights.entry((*key).to_string()).or_insert(0.0) += normalized;
    }

    ScoreResult {
        value: Some(round2(blended)),
        normalized_weights: Some(normalized_weights),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_defaults() -> DefaultWeights {
        DefaultWeights {
            otif: 0.0,
            corrective_actions: 0.0,
            esg_compliance: 0.0,
        }
    }

    #[test]
    fn test_resolve_weight_percentage_form() {
        assert_eq!(resolve_weight(40.0), 0.4);
        assert_eq!(resolve_weight(100.0), 1.0);
        assert_eq!(resolve_weight(1.5), 0.015);
    }

    #[test]
    fn test_resolve_weight_fraction_form() {
        assert_eq!(resolve_weight(0.4), 0.4);
        assert_eq!(resolve_weight(1.0), 1.0);
        assert_eq!(resolve_weight(0.0), 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(73.004), 73.0);
        // 0.125 is exactly representable, so the half case is genuine
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(72.999), 73.0);
        assert_eq!(round2(73.0), 73.0);
    }

    #[test]
    fn test_single_scored_metric_passes_through() {
        let metrics = vec![WeightedMetric::new("otif", Some(73.0), Some(0.4))];
        let result = compute_weighted_score(&metrics, &no_defaults());
        assert_eq!(result.value, Some(73.0));
        let weights = result.normalized_weights.unwrap();
        assert_eq!(weights.len(), 1);
        assert!((weights["otif"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_scored_metrics_yields_empty() {
        let metrics = vec![WeightedMetric::new("otif", None, Some(0.5))];
        assert_eq!(
            compute_weighted_score(&metrics, &no_defaults()),
            ScoreResult::empty()
        );
        assert_eq!(compute_weighted_score(&[], &no_defaults()), ScoreResult::empty());
    }

    #[test]
    fn test_percentage_weights_example() {
        let metrics = vec![
            WeightedMetric::new("otif", Some(90.0), Some(40.0)),
            WeightedMetric::new("corrective_actions", Some(70.0), Some(35.0)),
            WeightedMetric::new("esg_compliance", Some(50.0), Some(25.0)),
        ];
        let result = compute_weighted_score(&metrics, &no_defaults());
        assert_eq!(result.value, Some(73.0));
        let weights = result.normalized_weights.unwrap();
        assert!((weights["otif"] - 0.4).abs() < 1e-9);
        assert!((weights["corrective_actions"] - 0.35).abs() < 1e-9);
        assert!((weights["esg_compliance"] - 0.25).abs() < 1e-9);
        assert!((weights.values().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weight_metric_is_dropped_when_positive_exists() {
        let metrics = vec![
            WeightedMetric::new("otif", Some(90.0), Some(0.0)),
            WeightedMetric::new("esg_compliance", Some(50.0), Some(0.5)),
        ];
        let result = compute_weighted_score(&metrics, &no_defaults());
        assert_eq!(result.value, Some(50.0));
        let weights = result.normalized_weights.unwrap();
        assert!(!weights.contains_key("otif"));
    }

    #[test]
    fn test_all_nonpositive_weights_yields_empty() {
        let metrics = vec![
            WeightedMetric::new("otif", Some(90.0), Some(0.0)),
            WeightedMetric::new("esg_compliance", Some(50.0), Some(-2.0)),
        ];
        assert_eq!(
            compute_weighted_score(&metrics, &no_defaults()),
            ScoreResult::empty()
        );
    }

    #[test]
    fn test_missing_weight_falls_back_to_default() {
        let metrics = vec![
            WeightedMetric::new("otif", Some(80.0), None),
            WeightedMetric::new("esg_compliance", Some(40.0), None),
        ];
        let result = compute_weighted_score(&metrics, &DefaultWeights::default());
        // otif 0.4, esg_compliance 0.25 -> normalized 0.4/0.65 and 0.25/0.65
        let weights = result.normalized_weights.unwrap();
        assert!((weights["otif"] - 0.4 / 0.65).abs() < 1e-9);
        assert!((weights["esg_compliance"] - 0.25 / 0.65).abs() < 1e-9);
        let expected = round2(80.0 * (0.4 / 0.65) + 40.0 * (0.25 / 0.65));
        assert_eq!(result.value, Some(expected));
    }

    #[test]
    fn test_unknown_key_without_weight_is_unusable() {
        let metrics = vec![
            WeightedMetric::new("mystery", Some(10.0), None),
            WeightedMetric::new("otif", Some(60.0), Some(0.5)),
        ];
        let result = compute_weighted_score(&metrics, &no_defaults());
        assert_eq!(result.value, Some(60.0));
    }

    #[test]
    fn test_scores_are_clamped_to_scale() {
        let metrics = vec![
            WeightedMetric::new("otif", Some(250.0), Some(0.5)),
            WeightedMetric::new("esg_compliance", Some(-10.0), Some(0.5)),
        ];
        let result = compute_weighted_score(&metrics, &no_defaults());
        assert_eq!(result.value, Some(50.0));
    }
}
