use crate::domain::errors::ExtractionError;
use serde::{Deserialize, Serialize};

/// A single `<number> <unit>` pair found in benchmark output.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
    /// 1-based line number in the scanned source
    pub line: usize,
}

/// What to do when the token in front of a unit label is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the whole scan with `ExtractionError::MalformedMeasurement`
    #[default]
    Fail,
    /// Log the occurrence and keep scanning
    Skip,
}

impl std::str::FromStr for MalformedPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(MalformedPolicy::Fail),
            "skip" => Ok(MalformedPolicy::Skip),
            _ => anyhow::bail!("Invalid malformed policy: {}. Must be 'fail' or 'skip'", s),
        }
    }
}

impl std::fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedPolicy::Fail => write!(f, "fail"),
            MalformedPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// Splits a line on the single space character.
///
/// Runs of spaces yield empty tokens and tabs are kept inside tokens, so
/// `"239\tmicros/op"` is one token.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}

/// Finds every occurrence of `unit` as a whole token and parses the token
/// immediately before it.
///
/// A label that is not the first token of the line yields one item per
/// occurrence, in line order.
pub fn measurements_in_line(
    line: &str,
    line_number: usize,
    unit: &str,
) -> Vec<Result<Measurement, ExtractionError>> {
    if !line.contains(unit) {
        return Vec::new();
    }

    let tokens = tokenize(line);
    tokens
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, token)| **token == unit)
        .map(|(i, _)| {
            let candidate = tokens[i - 1];
            candidate
                .trim()
                .parse::<f64>()
                .map(|value| Measurement {
                    value,
                    unit: unit.to_string(),
                    line: line_number,
                })
                .map_err(|_| ExtractionError::MalformedMeasurement {
                    line: line_number,
                    token: candidate.to_string(),
                    unit: unit.to_string(),
                })
        })
        .collect()
}
