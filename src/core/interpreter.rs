use crate::core::{Advisory, CommandInvocation, ExecutionOutcome, GenomeCount};
use crate::utils::error::{GenomeCheckError, Result};
use serde_json::{Map, Value};

/// Converts a `total_count` value to a count without losing information.
///
/// Tries, in order: a non-negative JSON integer, a JSON float with no
/// fractional part, then a string holding a non-negative integer.
pub fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Classifies the outcome of a `datasets` run into a count or an error.
pub fn interpret(
    species_name: &str,
    invocation: &CommandInvocation,
    outcome: ExecutionOutcome,
) -> Result<GenomeCount> {
    if !outcome.success() {
        return Err(GenomeCheckError::NonZeroExit {
            command: invocation.to_string(),
            status: outcome.status,
            stderr: outcome.stderr.trim().to_string(),
        });
    }

    if outcome.stdout.trim().is_empty() {
        // datasets 成功但沒有輸出，通常代表 0 筆
        return Ok(GenomeCount::zero_with(Advisory::EmptyOutput {
            species: species_name.to_string(),
        }));
    }

    let data: Value = match serde_json::from_str(&outcome.stdout) {
        Ok(data) => data,
        Err(source) => {
            return Err(GenomeCheckError::MalformedJson {
                raw: outcome.stdout,
                source,
            })
        }
    };

    let Value::Object(fields) = &data else {
        return Err(GenomeCheckError::UnexpectedSchema {
            document: pretty(&data),
        });
    };

    match fields.get("total_count") {
        Some(value) => Ok(match count_from_value(value) {
            Some(total) => GenomeCount::exact(total),
            None => GenomeCount::zero_with(Advisory::NonIntegerCount {
                value: value.to_string(),
            }),
        }),
        None if looks_like_zero_matches(fields) => {
            Ok(GenomeCount::zero_with(Advisory::MissingTotalCount {
                document: pretty(&data),
            }))
        }
        None => Err(GenomeCheckError::UnexpectedSchema {
            document: pretty(&data),
        }),
    }
}

/// Zero-match responses sometimes omit `total_count`: accept an explicit zero
/// `count`, or a missing or empty `reports`.
fn looks_like_zero_matches(fields: &Map<String, Value>) -> bool {
    let zero_count = fields.get("count").and_then(count_from_value) == Some(0);
    let no_reports = fields.get("reports").map_or(true, is_empty_value);
    zero_count || no_reports
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` all count as empty.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn pretty(data: &Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}
