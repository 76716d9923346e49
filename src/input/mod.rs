use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

pub mod coerce;
pub mod result;

use crate::model::assessment::AssessmentResult;
use crate::model::profile::CoercionPolicy;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("malformed numeric field `{field}` in {location}")]
    MalformedNumericField {
        location: FieldLocation,
        field: &'static str,
    },
}

/// Where a malformed score field was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    Point { dimension: usize, point: usize },
    TotalScore,
}

impl std::fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldLocation::Point { dimension, point } => {
                write!(f, "dimension {dimension}, point {point}")
            }
            FieldLocation::TotalScore => write!(f, "total_score"),
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(value: serde_json::Error) -> Self {
        InputError::Parse(value.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InputOptions {
    pub coercion: CoercionPolicy,
    pub max_input_bytes: u64,
}

pub fn load_result(path: &Path, options: &InputOptions) -> Result<AssessmentResult, InputError> {
    let size = std::fs::metadata(path)?.len();
    if size > options.max_input_bytes {
        return Err(InputError::TooLarge {
            size,
            limit: options.max_input_bytes,
        });
    }

    tracing::info!(path = %path.display(), bytes = size, "reading assessment result");

    let text = read_maybe_gz(path, options.max_input_bytes)?;
    let root: serde_json::Value = serde_json::from_str(&text)?;
    let result = result::parse_result(&root, options.coercion)?;

    tracing::debug!(
        dimensions = result.dimensions.len(),
        sample = result.is_sample,
        "parsed assessment result"
    );
    Ok(result)
}

/// Reads a text file, transparently inflating `.gz`. Decompressed output is
/// held to the same byte limit as the file itself.
pub fn read_maybe_gz(path: &Path, limit: u64) -> Result<String, InputError> {
    let file = BufReader::new(File::open(path)?);
    let mut reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let mut buf = Vec::new();
    reader
        .by_ref()
        .take(limit.saturating_add(1))
        .read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Err(InputError::TooLarge {
            size: buf.len() as u64,
            limit,
        });
    }

    String::from_utf8(buf).map_err(|e| InputError::Parse(format!("input is not UTF-8: {e}")))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
