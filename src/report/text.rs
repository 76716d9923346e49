use crate::model::radar::rater_order;
use crate::report::{ReportData, format_f64_1, format_score};

pub fn render_report_text(data: &ReportData) -> String {
    let mut out = String::new();

    out.push_str("Task Score Assessment Report\n");
    out.push_str("============================\n");
    if data.is_sample {
        out.push_str("(sample data)\n");
    }
    out.push('\n');

    out.push_str("1. Score overview\n");
    out.push_str(&format!(
        "Average: {} ({})\n",
        format_f64_1(data.overview.average),
        data.overview.band.label()
    ));
    out.push_str(&format!(
        "Self: {}  Peer: {}  Teacher: {}\n\n",
        format_score(data.overview.self_score),
        format_score(data.overview.peer_score),
        format_score(data.overview.teacher_score)
    ));

    out.push_str("2. Analysis\n");
    out.push_str(&format!(
        "{}\n",
        data.analysis.report.as_deref().unwrap_or("No report available.")
    ));
    out.push_str("Strengths:\n");
    push_list(&mut out, &data.analysis.strengths, "No strengths recorded.");
    out.push_str("Improvements:\n");
    push_list(
        &mut out,
        &data.analysis.improvements,
        "No improvement suggestions.",
    );
    out.push_str(&format!(
        "Overall: {}\n\n",
        data.analysis
            .overall
            .as_deref()
            .unwrap_or("No overall evaluation.")
    ));

    out.push_str("3. Dimensions\n");
    if data.is_empty() {
        out.push_str("No dimension scores found.\n\n");
    } else {
        out.push_str(&format!("Dimension count: {}\n", data.stats.len()));
        for (key, s) in data.stats.iter() {
            out.push_str(&format!(
                "[{}] {} (max {}): self {}, peer {}, teacher {}\n",
                key,
                s.description,
                format_score(s.total_max_score),
                format_f64_1(s.self_total),
                format_f64_1(s.peer_total),
                format_f64_1(s.teacher_total)
            ));
            for p in &s.points {
                out.push_str(&format!(
                    "  - {} | max {} | self {} | peer {} | teacher {}\n",
                    p.description,
                    format_score(p.max_score),
                    format_score(p.self_score),
                    format_score(p.peer_score),
                    format_score(p.teacher_score)
                ));
            }
        }
        out.push('\n');
    }

    out.push_str("4. Radar\n");
    if data.radar_raw.is_empty() {
        out.push_str("No data to chart.\n");
    } else {
        out.push_str(&format!("Normalization: {}\n", data.meta.normalization));
        for (axis, label) in data.radar_raw.labels.iter().enumerate() {
            let cells = rater_order()
                .iter()
                .map(|&r| {
                    format!(
                        "{} {} ({}%)",
                        r.name(),
                        format_f64_1(data.radar_raw.value_at(r, axis)),
                        format_f64_1(data.radar_normalized.value_at(r, axis))
                    )
                })
                .collect::<Vec<_>>();
            out.push_str(&format!("{}: {}\n", label, cells.join(", ")));
        }
    }

    out
}

fn push_list(out: &mut String, items: &[String], empty_msg: &str) {
    if items.is_empty() {
        out.push_str(&format!("  {}\n", empty_msg));
        return;
    }
    for item in items {
        out.push_str(&format!("  - {}\n", item));
    }
}
