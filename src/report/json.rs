use serde::Serialize;

use crate::model::radar::RadarSeries;
use crate::model::stats::DimensionStatsMap;
use crate::report::ReportData;

#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: &'a str,
    tool_meta: ToolMetaJson<'a>,
    is_sample: bool,
    overview: OverviewJson<'a>,
    dimensions: DimensionsJson<'a>,
    radar: RadarJson<'a>,
    analysis: AnalysisJson<'a>,
}

#[derive(Debug, Serialize)]
struct ToolMetaJson<'a> {
    name: &'a str,
    version: &'a str,
    input: &'a str,
    normalization: &'a str,
    coercion: &'a str,
}

#[derive(Debug, Serialize)]
struct OverviewJson<'a> {
    #[serde(rename = "self")]
    self_score: f64,
    peer: f64,
    teacher: f64,
    average: f64,
    band: &'a str,
}

#[derive(Debug, Serialize)]
struct DimensionsJson<'a> {
    input_count: usize,
    aggregated_count: usize,
    total_points: usize,
    empty: bool,
    stats: &'a DimensionStatsMap,
}

#[derive(Debug, Serialize)]
struct RadarJson<'a> {
    empty: bool,
    raw: &'a RadarSeries,
    normalized: &'a RadarSeries,
}

#[derive(Debug, Serialize)]
struct AnalysisJson<'a> {
    report: Option<&'a str>,
    strengths: &'a [String],
    improvements: &'a [String],
    overall: Option<&'a str>,
}

pub fn render_summary_json(data: &ReportData) -> serde_json::Result<String> {
    let summary = Summary {
        tool: &data.meta.name,
        tool_meta: ToolMetaJson {
            name: &data.meta.name,
            version: &data.meta.version,
            input: &data.meta.input,
            normalization: &data.meta.normalization,
            coercion: &data.meta.coercion,
        },
        is_sample: data.is_sample,
        overview: OverviewJson {
            self_score: data.overview.self_score,
            peer: data.overview.peer_score,
            teacher: data.overview.teacher_score,
            average: data.overview.average,
            band: data.overview.band.label(),
        },
        dimensions: DimensionsJson {
            input_count: data.input_dimensions,
            aggregated_count: data.stats.len(),
            total_points: data.total_points(),
            empty: data.is_empty(),
            stats: &data.stats,
        },
        radar: RadarJson {
            empty: data.radar_raw.is_empty(),
            raw: &data.radar_raw,
            normalized: &data.radar_normalized,
        },
        analysis: AnalysisJson {
            report: data.analysis.report.as_deref(),
            strengths: &data.analysis.strengths,
            improvements: &data.analysis.improvements,
            overall: data.analysis.overall.as_deref(),
        },
    };
    serde_json::to_string_pretty(&summary)
}
