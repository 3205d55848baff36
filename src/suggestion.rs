//! Suggestion records and the per-widget suggestion cache
//!
//! A `Suggestion` is the thin record returned by the prediction query. The full
//! record is only fetched once the user picks an entry.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One candidate clinician shown in the dropdown
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Suggestion {
    /// National Provider Identifier, unique per clinician
    #[serde(deserialize_with = "string_or_number")]
    pub npi: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub credential: String,
    #[serde(default, alias = "speciality")]
    pub specialty: String,
    #[serde(default, alias = "address")]
    pub address_line: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, deserialize_with = "string_or_number_default")]
    pub zip: String,
}

impl Suggestion {
    pub fn new(npi: impl Into<String>, first_name: &str, last_name: &str) -> Self {
        Self {
            npi: npi.into(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_credential(mut self, credential: &str) -> Self {
        self.credential = credential.to_string();
        self
    }

    pub fn with_specialty(mut self, specialty: &str) -> Self {
        self.specialty = specialty.to_string();
        self
    }

    pub fn with_address(mut self, line: &str, city: &str, state: &str, zip: &str) -> Self {
        self.address_line = line.to_string();
        self.city = city.to_string();
        self.state = state.to_string();
        self.zip = zip.to_string();
        self
    }

    /// Value written into the input on selection: "First Last"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "City, ST 12345", skipping empty parts
    pub fn locality(&self) -> String {
        let mut out = self.city.clone();
        if !self.state.is_empty() {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(&self.state);
        }
        if !self.zip.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&self.zip);
        }
        out
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())?;
        if !self.credential.is_empty() {
            write!(f, ", {}", self.credential)?;
        }
        Ok(())
    }
}

/// Identifier → suggestion payload, scoped to a widget instance
///
/// Entries are never evicted; keys are unique per record and values never change
/// once stored, so later result sets only add to it.
#[derive(Debug, Clone, Default)]
pub struct SuggestionCache {
    entries: HashMap<String, Suggestion>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, suggestion: Suggestion) {
        self.entries.insert(suggestion.npi.clone(), suggestion);
    }

    pub fn get(&self, npi: &str) -> Option<&Suggestion> {
        self.entries.get(npi)
    }

    pub fn contains(&self, npi: &str) -> bool {
        self.entries.contains_key(npi)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn string_or_number_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer)
        .map(|value| value.map(String::from).unwrap_or_default())
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
