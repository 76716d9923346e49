use crate::model::radar::{RadarSeries, Rater};
use crate::model::stats::DimensionStatsMap;

/// Raw per-rater totals in mapping order. An empty mapping yields an empty
/// series, which callers report as "nothing to chart".
pub fn to_radar_series(stats: &DimensionStatsMap) -> RadarSeries {
    let mut series = RadarSeries {
        labels: Vec::with_capacity(stats.len()),
        self_values: Vec::with_capacity(stats.len()),
        peer_values: Vec::with_capacity(stats.len()),
        teacher_values: Vec::with_capacity(stats.len()),
    };
    for s in stats.values() {
        series.labels.push(s.description.clone());
        series.self_values.push(s.self_total);
        series.peer_values.push(s.peer_total);
        series.teacher_values.push(s.teacher_total);
    }
    series
}

/// Scales each axis independently by the largest of its three rater values,
/// so raters stay comparable on an axis regardless of its point value.
pub fn normalize(series: &RadarSeries) -> RadarSeries {
    let maxima = (0..series.len())
        .map(|axis| series.axis_max(axis))
        .collect::<Vec<_>>();
    rescale(series, |axis| maxima[axis])
}

/// Single maximum across every axis and rater.
pub fn normalize_global(series: &RadarSeries) -> RadarSeries {
    let max = (0..series.len())
        .map(|axis| series.axis_max(axis))
        .fold(0.0, f64::max);
    rescale(series, |_| max)
}

/// Non-finite maxima or ratios (overflowed totals) read as 0.
pub fn scale_to_percent(value: f64, max: f64) -> f64 {
    if !(max > 0.0 && max.is_finite()) {
        return 0.0;
    }
    let pct = value / max * 100.0;
    if pct.is_finite() {
        pct.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn rescale(series: &RadarSeries, max_for_axis: impl Fn(usize) -> f64) -> RadarSeries {
    let scaled = |rater: Rater| {
        (0..series.len())
            .map(|axis| scale_to_percent(series.value_at(rater, axis), max_for_axis(axis)))
            .collect::<Vec<_>>()
    };
    let [self_values, peer_values, teacher_values] =
        [Rater::SelfRater, Rater::Peer, Rater::Teacher].map(scaled);

    RadarSeries {
        labels: series.labels.clone(),
        self_values,
        peer_values,
        teacher_values,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_radar.rs"]
mod tests;
