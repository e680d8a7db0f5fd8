//! Segment-by-segment traversal of a decoded JSON tree.
use serde_json::Value;

use crate::{number::Number, Error};

/// Walk `segments` from `root`, descending through objects only.
///
/// Every intermediate value must be an object and every value reached must be a string, a
/// number or an object. Errors name the segment that failed.
pub(crate) fn resolve<'a, I>(root: &'a Value, segments: I) -> Result<&'a Value, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut segments = segments.into_iter().peekable();
    if segments.peek().is_none() {
        return Err(Error::PathNull);
    }
    segments
        .try_fold(root, |current, segment| step(current, segment.as_ref()))
        .inspect_err(|error| tracing::trace!(%error, "Path resolution failed"))
}

fn step<'a>(current: &'a Value, key: &str) -> Result<&'a Value, Error> {
    match current {
        Value::Object(object) => match object.get(key) {
            Some(value @ (Value::String(_) | Value::Number(_) | Value::Object(_))) => Ok(value),
            Some(Value::Null | Value::Bool(_) | Value::Array(_)) => {
                Err(Error::key_type_invalid(key))
            }
            None => Err(Error::key_not_found(key)),
        },
        // Only objects can be descended into
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
            Err(Error::key_type_invalid(key))
        }
    }
}

/// Textual form of a resolved scalar.
///
/// `path` is only evaluated to build the error for non-scalar values.
pub(crate) fn to_text(value: &Value, path: impl FnOnce() -> String) -> Result<String, Error> {
    match value {
        Value::String(string) => Ok(string.clone()),
        Value::Number(number) => Ok(Number::from(number).to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            Err(Error::key_type_invalid(path()))
        }
    }
}
