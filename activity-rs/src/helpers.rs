use serde_json::Value;

use dash_common::Sample;

use crate::errors::ActivityError;
use crate::models::{ActivityRecord, Prediction};

const ACTIVITY: &str = "activity";
const CONFIDENCE: &str = "confidence";
const ACC_VARIABLES: [&str; 3] = ["acc_x", "acc_y", "acc_z"];
const ID: &str = "id";
const TIMESTAMP: &str = "timestamp";
const DURATION: &str = "duration";

pub(crate) const UNKNOWN_ACTIVITY: &str = "Unknown";

/// Reads a prediction response. Missing fields take defaults: the activity becomes
/// "Unknown" and the echoed axes fall back to the request sample.
pub(crate) fn parse_prediction(
    data: &Value,
    request: &Sample,
) -> Result<Prediction, ActivityError> {
    let object = data
        .as_object()
        .ok_or(ActivityError::IncorrectDataFormat(
            "Prediction response is not an object".to_string(),
        ))?;

    let activity = object
        .get(ACTIVITY)
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ACTIVITY);
    let confidence = object.get(CONFIDENCE).and_then(Value::as_f64);

    let requested = [request.x(), request.y(), request.z()];
    let mut axes = [0.0; 3];
    for (i, var) in ACC_VARIABLES.iter().enumerate() {
        axes[i] = object
            .get(*var)
            .and_then(Value::as_f64)
            .unwrap_or(requested[i]);
    }

    Ok(Prediction::remote(activity, confidence, Sample::new(axes)))
}

/// Reads a history response. Entries that are not objects are skipped.
pub(crate) fn parse_history(data: &Value) -> Result<Vec<ActivityRecord>, ActivityError> {
    let entries = data.as_array().ok_or(ActivityError::IncorrectDataFormat(
        "History response is not an array".to_string(),
    ))?;

    let records = entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| {
            let text = |key: &str| entry.get(key).and_then(Value::as_str).unwrap_or_default();
            ActivityRecord::new(
                &entry.get(ID).map(id_to_string).unwrap_or_default(),
                entry.get(TIMESTAMP).and_then(millis).unwrap_or_default(),
                text(ACTIVITY),
                text(DURATION),
            )
        })
        .collect();
    Ok(records)
}

// Ids may be sent as numbers.
fn id_to_string(value: &Value) -> String {
    match value {
        Value::String(id) => id.clone(),
        Value::Number(id) => id.to_string(),
        _ => String::new(),
    }
}

// Timestamps may be sent as floats or numeric strings.
fn millis(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|t| t as i64))
        .or_else(|| value.as_str().and_then(|t| t.trim().parse().ok()))
}
