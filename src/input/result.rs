use serde_json::{Map, Value};

use crate::input::{FieldLocation, InputError};
use crate::input::coerce::{Coerced, coerce_with};
use crate::model::assessment::{
    AnalysisText, AssessmentResult, Dimension, RaterTotals, ScoringPoint,
};
use crate::model::profile::CoercionPolicy;

const POINT_FIELDS: [&str; 4] = ["score", "self", "peer", "teacher"];

pub fn parse_result(root: &Value, policy: CoercionPolicy) -> Result<AssessmentResult, InputError> {
    let obj = root
        .as_object()
        .ok_or_else(|| InputError::Parse("top-level value is not an object".to_string()))?;

    let dimensions = match obj.get("dimensions") {
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                out.push(parse_dimension(item, idx + 1, policy)?);
            }
            out
        }
        Some(Value::Null) | None => Vec::new(),
        Some(_) => {
            tracing::warn!("`dimensions` is not an array; treating result as having no dimensions");
            Vec::new()
        }
    };

    let total_score = parse_total_score(obj.get("total_score"), policy)?;

    Ok(AssessmentResult {
        dimensions,
        total_score,
        analysis: AnalysisText {
            report: non_empty_string(obj.get("report")),
            strengths: string_list(obj.get("strengths")),
            improvements: string_list(obj.get("improvements")),
            overall: non_empty_string(obj.get("overall")),
        },
        is_sample: obj.get("is_sample").and_then(Value::as_bool).unwrap_or(false),
    })
}

fn parse_dimension(
    value: &Value,
    index: usize,
    policy: CoercionPolicy,
) -> Result<Dimension, InputError> {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let description = non_empty_string(obj.get("desc")).unwrap_or_default();
    let mut points = Vec::new();
    if let Some(Value::Array(items)) = obj.get("points") {
        points.reserve(items.len());
        for (p_idx, item) in items.iter().enumerate() {
            points.push(parse_point(item, index, p_idx + 1, policy)?);
        }
    }

    Ok(Dimension {
        description,
        points,
    })
}

fn parse_point(
    value: &Value,
    dimension: usize,
    point: usize,
    policy: CoercionPolicy,
) -> Result<ScoringPoint, InputError> {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let mut scores = [0.0f64; 4];
    for (slot, field) in scores.iter_mut().zip(POINT_FIELDS) {
        *slot = match coerce_with(policy, obj.get(field)) {
            Coerced::Value(v) => v,
            Coerced::Malformed => {
                return Err(InputError::MalformedNumericField {
                    location: FieldLocation::Point { dimension, point },
                    field,
                });
            }
        };
    }

    Ok(ScoringPoint {
        description: non_empty_string(obj.get("desc")).unwrap_or_default(),
        max_score: scores[0],
        self_score: scores[1],
        peer_score: scores[2],
        teacher_score: scores[3],
    })
}

/// Accepts `[self, peer, teacher]` or `{self, peer, teacher}`.
fn parse_total_score(
    value: Option<&Value>,
    policy: CoercionPolicy,
) -> Result<RaterTotals, InputError> {
    let fields: [Option<&Value>; 3] = match value {
        Some(Value::Array(items)) => [items.first(), items.get(1), items.get(2)],
        Some(Value::Object(obj)) => [obj.get("self"), obj.get("peer"), obj.get("teacher")],
        _ => [None, None, None],
    };

    let mut out = [0.0f64; 3];
    for (slot, (field, name)) in out
        .iter_mut()
        .zip(fields.into_iter().zip(["self", "peer", "teacher"]))
    {
        *slot = match coerce_with(policy, field) {
            Coerced::Value(v) => v,
            Coerced::Malformed => {
                return Err(InputError::MalformedNumericField {
                    location: FieldLocation::TotalScore,
                    field: name,
                });
            }
        };
    }

    Ok(RaterTotals {
        self_score: out[0],
        peer_score: out[1],
        teacher_score: out[2],
    })
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        _ => Vec::new(),
    }
}
