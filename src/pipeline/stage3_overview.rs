use crate::model::assessment::AssessmentResult;
use crate::model::profile::{EvaluationBand, ScoringProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOverview {
    pub self_score: f64,
    pub peer_score: f64,
    pub teacher_score: f64,
    pub average: f64,
    pub band: EvaluationBand,
}

pub fn build_overview(result: &AssessmentResult, profile: &ScoringProfile) -> ScoreOverview {
    let t = result.total_score;
    let average = (t.self_score + t.peer_score + t.teacher_score) / 3.0;
    ScoreOverview {
        self_score: t.self_score,
        peer_score: t.peer_score,
        teacher_score: t.teacher_score,
        average,
        band: profile.band_for(average),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_overview.rs"]
mod tests;
