use super::*;
use crate::model::assessment::{Dimension, ScoringPoint};
use crate::pipeline::stage1_aggregate::compute;

fn series(self_v: &[f64], peer_v: &[f64], teacher_v: &[f64]) -> RadarSeries {
    RadarSeries {
        labels: (0..self_v.len()).map(|i| format!("axis{}", i)).collect(),
        self_values: self_v.to_vec(),
        peer_values: peer_v.to_vec(),
        teacher_values: teacher_v.to_vec(),
    }
}

#[test]
fn test_series_follows_mapping_order() {
    let dims = vec![
        Dimension {
            description: "First".to_string(),
            points: vec![ScoringPoint {
                description: String::new(),
                max_score: 10.0,
                self_score: 8.0,
                peer_score: 6.0,
                teacher_score: 9.0,
            }],
        },
        Dimension {
            description: "Empty".to_string(),
            points: vec![],
        },
        Dimension {
            description: "Third".to_string(),
            points: vec![ScoringPoint {
                description: String::new(),
                max_score: 5.0,
                self_score: 1.0,
                peer_score: 2.0,
                teacher_score: 3.0,
            }],
        },
    ];
    let s = to_radar_series(&compute(&dims));
    assert_eq!(s.labels, vec!["First".to_string(), "Third".to_string()]);
    assert_eq!(s.self_values, vec![8.0, 1.0]);
    assert_eq!(s.peer_values, vec![6.0, 2.0]);
    assert_eq!(s.teacher_values, vec![9.0, 3.0]);
}

#[test]
fn test_empty_mapping_gives_empty_series() {
    let s = to_radar_series(&DimensionStatsMap::new());
    assert!(s.is_empty());
    assert!(s.self_values.is_empty());
    assert!(normalize(&s).is_empty());
}

#[test]
fn test_normalize_single_axis() {
    let out = normalize(&series(&[8.0], &[6.0], &[9.0]));
    assert!((out.self_values[0] - 88.888_888).abs() < 1e-3);
    assert!((out.peer_values[0] - 66.666_666).abs() < 1e-3);
    assert!((out.teacher_values[0] - 100.0).abs() < 1e-9);
    assert_eq!(out.labels, vec!["axis0".to_string()]);
}

#[test]
fn test_normalize_all_zero_axis() {
    let out = normalize(&series(&[0.0, 4.0], &[0.0, 2.0], &[0.0, 1.0]));
    assert_eq!(out.self_values[0], 0.0);
    assert_eq!(out.peer_values[0], 0.0);
    assert_eq!(out.teacher_values[0], 0.0);
    assert_eq!(out.self_values[1], 100.0);
}

#[test]
fn test_normalize_range() {
    let out = normalize(&series(
        &[3.0, 0.0, 12.5, 100.0],
        &[7.0, 0.5, 12.5, 1.0],
        &[1.0, 0.0, 0.0, 50.0],
    ));
    for values in [&out.self_values, &out.peer_values, &out.teacher_values] {
        for &v in values.iter() {
            assert!((0.0..=100.0).contains(&v));
        }
    }
}

#[test]
fn test_normalize_negative_input_clamped() {
    let out = normalize(&series(&[-2.0], &[4.0], &[2.0]));
    assert_eq!(out.self_values[0], 0.0);
    assert_eq!(out.peer_values[0], 100.0);
}

#[test]
fn test_normalize_axes_independent() {
    let base = series(&[8.0, 2.0, 5.0], &[6.0, 4.0, 5.0], &[9.0, 1.0, 0.0]);
    let mut changed = base.clone();
    changed.self_values[0] = 400.0;
    changed.peer_values[0] = 3.0;

    let a = normalize(&base);
    let b = normalize(&changed);
    for axis in 1..3 {
        assert_eq!(a.self_values[axis].to_bits(), b.self_values[axis].to_bits());
        assert_eq!(a.peer_values[axis].to_bits(), b.peer_values[axis].to_bits());
        assert_eq!(
            a.teacher_values[axis].to_bits(),
            b.teacher_values[axis].to_bits()
        );
    }
}

#[test]
fn test_global_normalization_differs_from_per_axis() {
    let s = series(&[10.0, 2.0], &[5.0, 1.0], &[0.0, 2.0]);
    let per_axis = normalize(&s);
    let global = normalize_global(&s);
    assert_eq!(per_axis.self_values[1], 100.0);
    assert!((global.self_values[1] - 20.0).abs() < 1e-9);
    assert_eq!(global.self_values[0], 100.0);
}

#[test]
fn test_scale_to_percent_zero_max() {
    assert_eq!(scale_to_percent(5.0, 0.0), 0.0);
    assert_eq!(scale_to_percent(5.0, 10.0), 50.0);
}

#[test]
fn test_normalize_overflowing_totals_stay_in_range() {
    let dims = vec![Dimension {
        description: "Huge".to_string(),
        points: vec![
            ScoringPoint {
                description: String::new(),
                max_score: 1e308,
                self_score: 1e308,
                peer_score: 1e308,
                teacher_score: 1.0,
            };
            2
        ],
    }];
    let raw = to_radar_series(&compute(&dims));
    assert!(raw.self_values[0].is_infinite());
    for out in [normalize(&raw), normalize_global(&raw)] {
        for values in [&out.self_values, &out.peer_values, &out.teacher_values] {
            for &v in values.iter() {
                assert!((0.0..=100.0).contains(&v), "out of range {v}");
            }
        }
    }
    assert_eq!(scale_to_percent(f64::INFINITY, f64::INFINITY), 0.0);
    assert_eq!(scale_to_percent(f64::NAN, 10.0), 0.0);
}
