use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::radar::rater_order;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{ReportData, format_f64_6};

pub const DIMENSIONS_TSV: &str = "dimensions.tsv";
pub const RADAR_TSV: &str = "radar.tsv";
pub const SUMMARY_JSON: &str = "summary.json";
pub const REPORT_TXT: &str = "report.txt";

pub fn write_reports(data: &ReportData, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_dimensions_tsv(data, &out_dir.join(DIMENSIONS_TSV))?;
    write_radar_tsv(data, &out_dir.join(RADAR_TSV))?;

    let json = render_summary_json(data).map_err(std::io::Error::other)?;
    write_text(&out_dir.join(SUMMARY_JSON), &json)?;

    let report = render_report_text(data);
    write_text(&out_dir.join(REPORT_TXT), &report)?;

    if data.is_empty() {
        tracing::warn!("no dimension scores found; reports contain the empty state");
    }
    tracing::info!(
        out = %out_dir.display(),
        dimensions = data.stats.len(),
        "reports written"
    );
    Ok(())
}

fn write_dimensions_tsv(data: &ReportData, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "key",
        "dimension",
        "point",
        "max_score",
        "self",
        "peer",
        "teacher",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for (key, stats) in data.stats.iter() {
        for point in &stats.points {
            let row = [
                key.to_string(),
                tsv_field(&stats.description),
                tsv_field(&point.description),
                format_f64_6(point.max_score),
                format_f64_6(point.self_score),
                format_f64_6(point.peer_score),
                format_f64_6(point.teacher_score),
            ];
            writeln!(w, "{}", row.join("\t"))?;
        }
    }
    w.flush()
}

fn write_radar_tsv(data: &ReportData, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let mut header = vec!["label".to_string()];
    for r in rater_order() {
        header.push(format!("{}_raw", r.name()));
    }
    for r in rater_order() {
        header.push(format!("{}_norm", r.name()));
    }
    writeln!(w, "{}", header.join("\t"))?;

    for (axis, label) in data.radar_raw.labels.iter().enumerate() {
        let mut row = vec![tsv_field(label)];
        for &r in rater_order() {
            row.push(format_f64_6(data.radar_raw.value_at(r, axis)));
        }
        for &r in rater_order() {
            row.push(format_f64_6(data.radar_normalized.value_at(r, axis)));
        }
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn tsv_field(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
