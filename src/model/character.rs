use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Fields;

/// A character of the dataset.
///
/// Only `id` and `name` are typed. Every other field, `status` included, stays as raw
/// JSON in `extra` and is written back with its value untouched: a `null` or non-string
/// `status` survives a write-back. On output `id` and `name` come first, followed by the
/// remaining fields in the order they were read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Fields,
}

impl Character {
    /// Creates a character whose only extra field is `status`.
    pub fn new(id: u64, name: impl Into<String>, status: impl Into<String>) -> Self {
        let mut extra = Fields::new();
        extra.insert("status".to_string(), Value::String(status.into()));
        Self {
            id,
            name: name.into(),
            extra,
        }
    }

    /// The `status` field when it holds a string. Absent, `null` and non-string values
    /// all read as `None`.
    pub fn status(&self) -> Option<&str> {
        self.extra.get("status").and_then(Value::as_str)
    }
}

/// Lifecycle status values accepted by the status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Alive,
    Deceased,
}

impl Status {
    /// Case-insensitive parse; anything outside the known set yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("alive") {
            Some(Status::Alive)
        } else if raw.eq_ignore_ascii_case("deceased") {
            Some(Status::Deceased)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Alive => "alive",
            Status::Deceased => "deceased",
        }
    }

    /// True when `value` names this status, ignoring case.
    pub fn matches(&self, value: &str) -> bool {
        value.eq_ignore_ascii_case(self.as_str())
    }
}
