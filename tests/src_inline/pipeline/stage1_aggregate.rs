use super::*;
use crate::model::assessment::ScoringPoint;

fn point(max: f64, s: f64, p: f64, t: f64) -> ScoringPoint {
    ScoringPoint {
        description: "p".to_string(),
        max_score: max,
        self_score: s,
        peer_score: p,
        teacher_score: t,
    }
}

fn dim(desc: &str, points: Vec<ScoringPoint>) -> Dimension {
    Dimension {
        description: desc.to_string(),
        points,
    }
}

#[test]
fn test_single_point_dimension() {
    let input = vec![dim("D1", vec![point(10.0, 8.0, 6.0, 9.0)])];
    let out = compute(&input);
    let s = out.get("dim-1").unwrap();
    assert_eq!(s.description, "D1");
    assert_eq!(s.total_max_score, 10.0);
    assert_eq!(s.self_total, 8.0);
    assert_eq!(s.peer_total, 6.0);
    assert_eq!(s.teacher_total, 9.0);
    assert!((s.self_rate - 0.8).abs() < 1e-12);
    assert!((s.peer_rate - 0.6).abs() < 1e-12);
    assert!((s.teacher_rate - 0.9).abs() < 1e-12);
    assert_eq!(s.point_count, 1);
    assert_eq!(s.points.len(), 1);
}

#[test]
fn test_empty_dimension_skipped_keeps_original_key() {
    let input = vec![
        dim("D1", vec![]),
        dim("D2", vec![point(5.0, 5.0, 5.0, 5.0)]),
    ];
    let out = compute(&input);
    assert_eq!(out.len(), 1);
    assert!(!out.contains_key("dim-1"));
    assert!(out.contains_key("dim-2"));
    assert_eq!(out.get("dim-2").unwrap().index, 2);
}

#[test]
fn test_output_count_matches_non_empty_dimensions() {
    let input = vec![
        dim("A", vec![point(1.0, 1.0, 1.0, 1.0)]),
        dim("B", vec![]),
        dim("C", vec![point(2.0, 1.0, 0.0, 2.0), point(3.0, 3.0, 3.0, 0.0)]),
        dim("D", vec![]),
        dim("E", vec![point(4.0, 2.0, 2.0, 2.0)]),
    ];
    let out = compute(&input);
    assert_eq!(out.len(), 3);
    let keys = out.keys().collect::<Vec<_>>();
    assert_eq!(keys, vec!["dim-1", "dim-3", "dim-5"]);
}

#[test]
fn test_totals_are_point_sums() {
    let input = vec![dim(
        "C",
        vec![
            point(2.0, 1.5, 0.0, 2.0),
            point(3.0, 3.0, 2.5, 0.0),
            point(5.0, 4.0, 4.0, 5.0),
        ],
    )];
    let out = compute(&input);
    let s = out.get("dim-1").unwrap();
    assert!((s.total_max_score - 10.0).abs() < 1e-12);
    assert!((s.self_total - 8.5).abs() < 1e-12);
    assert!((s.peer_total - 6.5).abs() < 1e-12);
    assert!((s.teacher_total - 7.0).abs() < 1e-12);
    assert_eq!(s.point_count, 3);
}

#[test]
fn test_zero_max_yields_zero_rates() {
    let input = vec![dim("Z", vec![point(0.0, 3.0, 2.0, 1.0)])];
    let out = compute(&input);
    let s = out.get("dim-1").unwrap();
    assert_eq!(s.self_total, 3.0);
    assert_eq!(s.self_rate, 0.0);
    assert_eq!(s.peer_rate, 0.0);
    assert_eq!(s.teacher_rate, 0.0);
}

#[test]
fn test_scores_above_max_are_kept() {
    let input = vec![dim("O", vec![point(4.0, 6.0, 4.0, 2.0)])];
    let out = compute(&input);
    let s = out.get("dim-1").unwrap();
    assert_eq!(s.self_total, 6.0);
    assert!((s.self_rate - 1.5).abs() < 1e-12);
}

#[test]
fn test_missing_description_defaults_to_position() {
    let input = vec![dim("", vec![]), dim("", vec![point(1.0, 1.0, 1.0, 1.0)])];
    let out = compute(&input);
    assert_eq!(out.get("dim-2").unwrap().description, "Dimension 2");
}

#[test]
fn test_empty_input() {
    let out = compute(&[]);
    assert!(out.is_empty());
    let aggregator = DimensionAggregator::default();
    assert!(aggregator.to_radar_series(&out).is_empty());
}

#[test]
fn test_compute_idempotent_and_input_untouched() {
    let input = vec![
        dim("A", vec![point(10.0, 7.0, 8.0, 9.0)]),
        dim("B", vec![point(5.0, 1.0, 2.0, 3.0)]),
    ];
    let before = input.clone();
    let a = compute(&input);
    let b = compute(&input);
    assert_eq!(a, b);
    assert_eq!(input, before);
}

#[test]
fn test_aggregator_normalization_mode_dispatch() {
    let input = vec![
        dim("A", vec![point(10.0, 10.0, 5.0, 0.0)]),
        dim("B", vec![point(2.0, 2.0, 1.0, 0.0)]),
    ];
    let per_axis = DimensionAggregator::new(NormalizationMode::PerAxis);
    let global = DimensionAggregator::new(NormalizationMode::Global);
    let series = per_axis.to_radar_series(&per_axis.compute(&input));

    let a = per_axis.normalize(&series);
    let b = global.normalize(&series);
    assert!((a.self_values[1] - 100.0).abs() < 1e-9);
    assert!((b.self_values[1] - 20.0).abs() < 1e-9);
}

#[test]
fn test_overflowing_totals_yield_zero_rates() {
    let input = vec![dim(
        "Huge",
        vec![point(1e308, 1e308, 1e308, 1.0), point(1e308, 1e308, 1e308, 1.0)],
    )];
    let out = compute(&input);
    let s = out.get("dim-1").unwrap();
    assert!(s.total_max_score.is_infinite());
    assert_eq!(s.self_rate, 0.0);
    assert_eq!(s.peer_rate, 0.0);
    assert_eq!(s.teacher_rate, 0.0);
    assert_eq!(rate(1.0, f64::INFINITY), 0.0);
    assert_eq!(rate(f64::INFINITY, 10.0), 0.0);
}
