use crate::model::assessment::{Dimension, default_dimension_label};
use crate::model::profile::NormalizationMode;
use crate::model::radar::RadarSeries;
use crate::model::stats::{DimensionStats, DimensionStatsMap, PointDetail};
use crate::pipeline::stage2_radar;

/// Stateless aggregation entry point. Every call returns a freshly owned
/// result; nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct DimensionAggregator {
    pub normalization: NormalizationMode,
}

impl Default for DimensionAggregator {
    fn default() -> Self {
        Self {
            normalization: NormalizationMode::PerAxis,
        }
    }
}

impl DimensionAggregator {
    pub fn new(normalization: NormalizationMode) -> Self {
        Self { normalization }
    }

    pub fn compute(&self, dimensions: &[Dimension]) -> DimensionStatsMap {
        compute(dimensions)
    }

    pub fn to_radar_series(&self, stats: &DimensionStatsMap) -> RadarSeries {
        stage2_radar::to_radar_series(stats)
    }

    pub fn normalize(&self, series: &RadarSeries) -> RadarSeries {
        match self.normalization {
            NormalizationMode::PerAxis => stage2_radar::normalize(series),
            NormalizationMode::Global => stage2_radar::normalize_global(series),
        }
    }
}

/// Sums rater scores per dimension. Dimensions without points are skipped,
/// so the output may hold fewer entries than the input; surviving entries keep
/// their original 1-based key.
pub fn compute(dimensions: &[Dimension]) -> DimensionStatsMap {
    let mut out = DimensionStatsMap::new();

    for (idx, dim) in dimensions.iter().enumerate() {
        let index = idx + 1;
        if dim.points.is_empty() {
            tracing::debug!(dimension = index, "skipping dimension with no scoring points");
            continue;
        }

        let mut total_max_score = 0.0f64;
        let mut self_total = 0.0f64;
        let mut peer_total = 0.0f64;
        let mut teacher_total = 0.0f64;
        for point in &dim.points {
            total_max_score += point.max_score;
            self_total += point.self_score;
            peer_total += point.peer_score;
            teacher_total += point.teacher_score;
        }

        let description = if dim.description.is_empty() {
            default_dimension_label(index)
        } else {
            dim.description.clone()
        };

        out.insert(DimensionStats {
            index,
            description,
            total_max_score,
            self_total,
            peer_total,
            teacher_total,
            self_rate: rate(self_total, total_max_score),
            peer_rate: rate(peer_total, total_max_score),
            teacher_rate: rate(teacher_total, total_max_score),
            point_count: dim.points.len(),
            points: dim.points.iter().map(PointDetail::from).collect(),
        });
    }

    out
}

pub fn rate(total: f64, total_max: f64) -> f64 {
    if !(total_max > 0.0 && total_max.is_finite()) {
        return 0.0;
    }
    let r = total / total_max;
    if r.is_finite() { r } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_aggregate.rs"]
mod tests;
