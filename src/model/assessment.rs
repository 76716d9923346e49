/// One gradable item inside a dimension. Rater scores are taken as given,
/// even when they exceed `max_score`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringPoint {
    pub description: String,
    pub max_score: f64,
    pub self_score: f64,
    pub peer_score: f64,
    pub teacher_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dimension {
    pub description: String,
    pub points: Vec<ScoringPoint>,
}

/// Overall totals as reported upstream, one per rater.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RaterTotals {
    pub self_score: f64,
    pub peer_score: f64,
    pub teacher_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisText {
    pub report: Option<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub overall: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentResult {
    pub dimensions: Vec<Dimension>,
    pub total_score: RaterTotals,
    pub analysis: AnalysisText,
    pub is_sample: bool,
}

pub fn default_dimension_label(index: usize) -> String {
    format!("Dimension {}", index)
}
