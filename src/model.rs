// Response shapes returned by the analysis backend.
//
// Every field is optional on the wire: the renderer prints placeholders
// for whatever is missing instead of failing. The curriculum is kept as a
// raw JSON value so it can be saved and sent back to the exporter exactly
// as the server produced it; `Curriculum` is only a read-only view of it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Body of a successful `POST /ai/analyze-multiple-documents`.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub files_count: u64,
    #[serde(deserialize_with = "nullable_list")]
    pub file_names: Vec<String>,
    pub total_size: u64,
    pub analysis: Analysis,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct Analysis {
    /// Untouched curriculum object, `Value::Null` when absent.
    pub curriculum: Value,
    #[serde(deserialize_with = "nullable_list")]
    pub key_topics: Vec<String>,
    #[serde(deserialize_with = "nullable_list")]
    pub learning_objectives: Vec<String>,
}

impl Analysis {
    /// Whether the server sent a curriculum object at all.
    pub fn has_curriculum(&self) -> bool {
        self.curriculum.is_object()
    }

    /// Typed view of the curriculum. A missing or malformed curriculum
    /// yields an empty view; the raw value is left untouched.
    pub fn curriculum_view(&self) -> Curriculum {
        if self.curriculum.is_null() {
            return Curriculum::default();
        }
        match Curriculum::deserialize(&self.curriculum) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("curriculum does not have the expected shape: {}", e);
                Curriculum::default()
            }
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Curriculum {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_minutes")]
    pub total_duration: Option<Minutes>,
    #[serde(deserialize_with = "lenient_text")]
    pub methodology: Option<String>,
    #[serde(deserialize_with = "lenient_modules")]
    pub modules: Vec<Module>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Module {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_minutes")]
    pub duration: Option<Minutes>,
    #[serde(deserialize_with = "lenient_text")]
    pub difficulty: Option<String>,
    #[serde(deserialize_with = "lenient_text_list")]
    pub enhanced_elements: Vec<String>,
}

/// A duration in minutes. The backend sends either a number or a numeric
/// string, so both are accepted.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Minutes(pub f64);

impl Minutes {
    pub fn hours(self) -> f64 {
        self.0 / 60.0
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<Minutes>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64().map(Minutes),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().map(Minutes),
        _ => None,
    })
}

/// Text as the server sent it: strings verbatim, any other scalar or
/// structure in its JSON form.
fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text_of))
}

fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.into_iter().filter_map(text_of).collect(),
        Some(other) => text_of(other).into_iter().collect(),
        None => Vec::new(),
    })
}

/// Each module is read on its own so one odd entry does not hide the rest.
fn lenient_modules<'de, D>(deserializer: D) -> Result<Vec<Module>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        Some(other) => {
            tracing::warn!("curriculum modules is not a list: {}", other);
            return Ok(Vec::new());
        }
        None => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .map(|item| {
            Module::deserialize(item).unwrap_or_else(|e| {
                tracing::warn!("module does not have the expected shape: {}", e);
                Module::default()
            })
        })
        .collect())
}

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
