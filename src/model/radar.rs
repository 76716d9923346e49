use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rater {
    SelfRater,
    Peer,
    Teacher,
}

pub fn rater_order() -> &'static [Rater] {
    &[Rater::SelfRater, Rater::Peer, Rater::Teacher]
}

impl Rater {
    pub fn name(self) -> &'static str {
        match self {
            Rater::SelfRater => "self",
            Rater::Peer => "peer",
            Rater::Teacher => "teacher",
        }
    }
}

/// Parallel per-axis values, one sequence per rater, aligned with `labels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RadarSeries {
    pub labels: Vec<String>,
    pub self_values: Vec<f64>,
    pub peer_values: Vec<f64>,
    pub teacher_values: Vec<f64>,
}

impl RadarSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn values(&self, rater: Rater) -> &[f64] {
        match rater {
            Rater::SelfRater => &self.self_values,
            Rater::Peer => &self.peer_values,
            Rater::Teacher => &self.teacher_values,
        }
    }

    /// Missing trailing values read as 0.
    pub fn value_at(&self, rater: Rater, axis: usize) -> f64 {
        self.values(rater).get(axis).copied().unwrap_or(0.0)
    }

    pub fn axis_max(&self, axis: usize) -> f64 {
        rater_order()
            .iter()
            .map(|&r| self.value_at(r, axis))
            .fold(0.0, f64::max)
    }
}
