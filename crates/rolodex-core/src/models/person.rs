use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, RolodexError};

/// First/last name pair as delivered by the people endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

/// A single fetched person. Immutable once decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRecord {
    pub name: PersonName,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
}

impl PersonRecord {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            name: PersonName {
                first: first.into(),
                last: last.into(),
            },
            avatar_url: String::new(),
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }

    /// `"First Last"`, the value written into the input on commit.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
            .trim()
            .to_string()
    }

    /// First and last name joined with no separator; the text the filter matches against.
    pub fn search_key(&self) -> String {
        format!("{}{}", self.name.first, self.name.last)
    }

    /// Lenient decode of one entry. Missing or mistyped fields become empty strings.
    pub fn from_json(v: &Value) -> Self {
        let name = v.get("name");
        let name_part = |key: &str| {
            name.and_then(|n| n.get(key))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let avatar_url = ["avatarUrl", "avatar_url", "profile"]
            .iter()
            .find_map(|key| v.get(*key).and_then(Value::as_str))
            .or_else(|| {
                v.get("picture").and_then(Value::as_object).and_then(|pic| {
                    pic.get("thumbnail")
                        .or_else(|| pic.get("medium"))
                        .or_else(|| pic.get("large"))
                        .and_then(Value::as_str)
                })
            })
            .unwrap_or_default()
            .to_string();

        Self {
            name: PersonName {
                first: name_part("first"),
                last: name_part("last"),
            },
            avatar_url,
        }
    }
}

/// Decode a people payload: a bare array, `{ "results": [...] }`, or `{ "people": [...] }`.
pub fn decode_people(payload: &Value) -> Result<Vec<PersonRecord>> {
    let entries = match payload {
        Value::Array(arr) => arr,
        Value::Object(obj) => ["results", "people"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_array))
            .ok_or_else(|| {
                RolodexError::MalformedPayload(
                    "expected an array or an object with a `results` array".to_string(),
                )
            })?,
        other => {
            return Err(RolodexError::MalformedPayload(format!(
                "expected a JSON list of people, got {}",
                json_kind(other)
            )));
        }
    };

    Ok(entries.iter().map(PersonRecord::from_json).collect())
}

/// Parse raw response text and decode it.
pub fn decode_people_str(text: &str) -> Result<Vec<PersonRecord>> {
    let payload: Value = serde_json::from_str(text)?;
    decode_people(&payload)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
