//! Wire DTOs for the activities REST API.
//!
//! DESIGN
//! ======
//! Every activity field except the key is optional on the wire. Decoding is
//! lenient so a sparse server payload still renders instead of failing the
//! whole catalog load: `null` or mistyped fields decode as absent, a `null`
//! roster as empty, and a capacity outside `u32` as unknown.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Full set of activities keyed by activity key, as returned by `GET /activities`.
///
/// Key order here is storage order only; display order is by name and lives
/// in `state::board`.
pub type ActivityCatalog = BTreeMap<String, Activity>;

/// A schedulable offering with a participant roster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Activity {
    /// Human-readable name. Falls back to the catalog key when absent.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub description: Option<String>,
    /// Free-text schedule (e.g. `"Fridays, 3:30 PM - 5:00 PM"`).
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub schedule: Option<String>,
    /// Roster capacity, if the server tracks one.
    #[serde(default, deserialize_with = "deserialize_lenient_capacity")]
    pub max_participants: Option<u32>,
    /// Participant emails in server order. Non-string entries are skipped.
    #[serde(default, deserialize_with = "deserialize_lenient_roster")]
    pub participants: Vec<String>,
}

impl Activity {
    /// Name to display for this activity, falling back to `key`.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        non_blank(self.name.as_deref()).unwrap_or(key)
    }

    /// Description, treating an empty string as absent.
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// Schedule, treating an empty string as absent.
    pub fn schedule(&self) -> Option<&str> {
        non_blank(self.schedule.as_deref())
    }

    /// Remaining capacity, saturating at zero. `None` when capacity is unknown.
    pub fn spots_left(&self) -> Option<u32> {
        let max = self.max_participants?;
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        Some(max.saturating_sub(taken))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

fn deserialize_lenient_capacity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Number(number) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(int) = number.as_u64() {
        return Ok(u32::try_from(int).ok());
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= 0.0
        && float <= f64::from(u32::MAX)
    {
        return Ok(Some(float as u32));
    }
    Ok(None)
}

fn deserialize_lenient_roster<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(email) => Some(email),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Success body of `POST /activities/{key}/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignupReceipt {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body returned with non-2xx statuses.
///
/// `detail` is usually a string, but validation failures can carry a list of
/// objects, so it is kept as a raw value and narrowed by the caller.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// The detail message when it is a non-blank string.
    pub fn message(&self) -> Option<&str> {
        non_blank(self.detail.as_str())
    }
}
