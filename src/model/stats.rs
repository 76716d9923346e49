use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::model::assessment::ScoringPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointDetail {
    pub description: String,
    pub max_score: f64,
    pub self_score: f64,
    pub peer_score: f64,
    pub teacher_score: f64,
}

impl From<&ScoringPoint> for PointDetail {
    fn from(p: &ScoringPoint) -> Self {
        Self {
            description: p.description.clone(),
            max_score: p.max_score,
            self_score: p.self_score,
            peer_score: p.peer_score,
            teacher_score: p.teacher_score,
        }
    }
}

/// Per-dimension totals and rates. `index` is the 1-based input position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionStats {
    pub index: usize,
    pub description: String,
    pub total_max_score: f64,
    pub self_total: f64,
    pub peer_total: f64,
    pub teacher_total: f64,
    pub self_rate: f64,
    pub peer_rate: f64,
    pub teacher_rate: f64,
    pub point_count: usize,
    pub points: Vec<PointDetail>,
}

impl DimensionStats {
    pub fn key(&self) -> String {
        dimension_key(self.index)
    }
}

pub fn dimension_key(index: usize) -> String {
    format!("dim-{}", index)
}

/// Insertion-ordered `dim-{n}` -> stats mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionStatsMap {
    entries: Vec<(String, DimensionStats)>,
}

impl DimensionStatsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys derive from unique input positions, so entries are appended.
    pub fn insert(&mut self, stats: DimensionStats) {
        self.entries.push((stats.key(), stats));
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&DimensionStats> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DimensionStats)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &DimensionStats> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl Serialize for DimensionStatsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, stats) in &self.entries {
            map.serialize_entry(key, stats)?;
        }
        map.end()
    }
}
