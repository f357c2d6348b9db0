use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::MatchError;

/// Adoptable pet listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: u32,
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub photo: Option<String>,
}

impl Pet {
    /// Tag lookup is exact and case-sensitive
    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Community feed post about an adoption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: u32,
    pub author: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub timestamp: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LivingSpace {
    Apartment,
    HouseSmall,
    HouseLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Experience {
    FirstTime,
    #[serde(rename = "some")]
    Intermediate,
    Experienced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeAvailable {
    Limited,
    Moderate,
    Lots,
}

/// Lifestyle quiz answers
///
/// Every field is optional. A value that is missing, `null`, of the wrong JSON
/// type or not one of the known choices decodes to `None` and simply scores
/// nothing; it never rejects the whole answer set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswers {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub living_space: Option<LivingSpace>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub experience: Option<Experience>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub time_available: Option<TimeAvailable>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub has_kids: Option<bool>,
}

impl QuizAnswers {
    /// Decode answers from a raw JSON body
    ///
    /// Fails only when the body is not a JSON object at all.
    pub fn from_value(value: Value) -> Result<Self, MatchError> {
        if !value.is_object() {
            return Err(MatchError::InvalidInput(format!(
                "expected a JSON object of quiz answers, got {}",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value).map_err(|e| MatchError::InvalidInput(e.to_string()))
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
