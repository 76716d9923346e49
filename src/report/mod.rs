pub mod json;
pub mod text;

use crate::model::assessment::AnalysisText;
use crate::model::radar::RadarSeries;
use crate::model::stats::DimensionStatsMap;
use crate::pipeline::stage3_overview::ScoreOverview;

#[derive(Debug, Clone)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
    pub input: String,
    pub normalization: String,
    pub coercion: String,
}

/// Everything the renderers read, owned by the caller for one run.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub meta: ToolMeta,
    pub is_sample: bool,
    pub overview: ScoreOverview,
    pub analysis: AnalysisText,
    pub stats: DimensionStatsMap,
    pub radar_raw: RadarSeries,
    pub radar_normalized: RadarSeries,
    pub input_dimensions: usize,
}

impl ReportData {
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn total_points(&self) -> usize {
        self.stats.values().map(|s| s.point_count).sum()
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_f64_1(v: f64) -> String {
    format!("{:.1}", v)
}

/// Whole numbers print without a fraction, everything else at one decimal.
pub fn format_score(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format_f64_1(v)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
