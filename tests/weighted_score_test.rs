use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeMap;
use supplyscore::config::DefaultWeights;
use supplyscore::{compute_weighted_score, ScoreResult, WeightedMetric};

fn no_defaults() -> DefaultWeights {
    DefaultWeights {
        otif: 0.0,
        corrective_actions: 0.0,
        esg_compliance: 0.0,
    }
}

#[test]
fn weighted_score_end_to_end_example() {
    let metrics = vec![
        WeightedMetric::new("otif", Some(90.0), Some(40.0)),
        WeightedMetric::new("corrective_actions", Some(70.0), Some(35.0)),
        WeightedMetric::new("esg_compliance", Some(50.0), Some(25.0)),
    ];
    let result = compute_weighted_score(&metrics, &no_defaults());

    let expected_weights: BTreeMap<String, f64> = [
        ("otif".to_string(), 0.4),
        ("corrective_actions".to_string(), 0.35),
        ("esg_compliance".to_string(), 0.25),
    ]
    .into_iter()
    .collect();

    assert_eq!(result.value, Some(73.0));
    let weights = result.normalized_weights.unwrap();
    for (key, expected) in &expected_weights {
        assert!((weights[key] - expected).abs() < 1e-9, "weight for {}", key);
    }
}

#[test]
fn single_scored_metric_fully_determines_result() {
    for weight in [0.4, 40.0, 1.0, 0.001] {
        let result = compute_weighted_score(
            &[WeightedMetric::new("otif", Some(73.0), Some(weight))],
            &no_defaults(),
        );
        assert_eq!(result.value, Some(73.0), "weight {}", weight);
        let weights = result.normalized_weights.unwrap();
        assert!((weights["otif"] - 1.0).abs() < 1e-9);
    }
}

#[test]
fn unscored_metrics_produce_no_result() {
    let result = compute_weighted_score(
        &[WeightedMetric::new("otif", None, Some(0.5))],
        &no_defaults(),
    );
    assert_eq!(result, ScoreResult::empty());
}

fn metric_strategy() -> impl Strategy<Value = WeightedMetric> {
    (
        "[a-z]{1,8}",
        prop::option::of(0.0..100.0f64),
        prop::option::of(prop_oneof![0.0..1.0f64, 1.0..100.0f64]),
    )
        .prop_map(|(key, score, weight)| WeightedMetric::new(key, score, weight))
}

proptest! {
    // Supplying 40 and supplying 0.40 for the same metric must agree.
    // Percent values are generated as whole percents so both forms resolve
    // to the exact same decimal.
    #[test]
    fn weight_form_invariance(
        score in 0.0..100.0f64,
        percent in 2u32..=100,
        other_score in 0.0..100.0f64,
    ) {
        let fraction = f64::from(percent) / 100.0;
        let as_fraction = vec![
            WeightedMetric::new("otif", Some(score), Some(fraction)),
            WeightedMetric::new("esg_compliance", Some(other_score), Some(0.5)),
        ];
        let as_percent = vec![
            WeightedMetric::new("otif", Some(score), Some(f64::from(percent))),
            WeightedMetric::new("esg_compliance", Some(other_score), Some(0.5)),
        ];
        let a = compute_weighted_score(&as_fraction, &no_defaults());
        let b = compute_weighted_score(&as_percent, &no_defaults());
        prop_assert_eq!(a.value, b.value);
    }

    // Whenever a value comes back, the normalized weights sum to 1.
    #[test]
    fn normalized_weights_sum_to_one(metrics in prop::collection::vec(metric_strategy(), 0..8)) {
        let result = compute_weighted_score(&metrics, &DefaultWeights::default());
        if let Some(weights) = &result.normalized_weights {
            let sum: f64 = weights.values().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "weights summed to {}", sum);
            prop_assert!(result.value.is_some());
        } else {
            prop_assert!(result.value.is_none());
        }
    }

    // The blended score stays on the KPI scale.
    #[test]
    fn value_stays_within_scale(metrics in prop::collection::vec(metric_strategy(), 0..8)) {
        let result = compute_weighted_score(&metrics, &DefaultWeights::default());
        if let Some(value) = result.value {
            prop_assert!((0.0..=100.0).contains(&value), "value {}", value);
        }
    }

    // Pure function: same input, same output.
    #[test]
    fn deterministic(metrics in prop::collection::vec(metric_strategy(), 0..8)) {
        let first = compute_weighted_score(&metrics, &DefaultWeights::default());
        let second = compute_weighted_score(&metrics, &DefaultWeights::default());
        prop_assert_eq!(first, second);
    }
}
