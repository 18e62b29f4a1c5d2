//! Character records as delivered by the character search API
//!
//! Only the fields the fighter builder reads are modelled. Every field is
//! optional and unknown fields are ignored, so partial payloads still load.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Raw character record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub personal: Option<PersonalInfo>,
    #[serde(default)]
    pub affiliations: Option<Vec<String>>,
    #[serde(default)]
    pub clans: Option<Vec<String>>,
    #[serde(default, rename = "kekkeiGenkai")]
    pub kekkei_genkai: Option<Vec<String>>,
}

/// The `personal` block of a record
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default, rename = "natureType")]
    pub nature_type: Option<Vec<String>>,
    /// Shape varies between records (string, object, list); only presence matters
    #[serde(default, rename = "TailedBeast")]
    pub tailed_beast: Option<Value>,
    #[serde(default)]
    pub jinchuriki: Option<Value>,
}

impl CharacterRecord {
    /// Record with only a name set
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Lowercased name, empty when the record has none
    pub fn name_lower(&self) -> String {
        self.name.as_deref().unwrap_or_default().to_lowercase()
    }

    pub fn nature_types(&self) -> &[String] {
        self.personal
            .as_ref()
            .and_then(|p| p.nature_type.as_deref())
            .unwrap_or_default()
    }

    pub fn clans(&self) -> &[String] {
        self.clans.as_deref().unwrap_or_default()
    }

    pub fn affiliations(&self) -> &[String] {
        self.affiliations.as_deref().unwrap_or_default()
    }

    pub fn has_kekkei_genkai(&self) -> bool {
        self.kekkei_genkai.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// A record counts as a jinchuriki when either tailed-beast marker is present and truthy
    pub fn is_jinchuriki(&self) -> bool {
        self.personal.as_ref().is_some_and(|p| {
            p.tailed_beast.as_ref().is_some_and(is_truthy) || p.jinchuriki.as_ref().is_some_and(is_truthy)
        })
    }

    /// First image, if any
    pub fn first_image(&self) -> Option<&str> {
        self.images.as_ref().and_then(|i| i.first()).map(String::as_str)
    }

    /// Load a JSON array of records from a file
    pub fn load_all(path: &Path) -> anyhow::Result<Vec<Self>> {
        let content = std::fs::read_to_string(path)?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }
}

/// Presence check for loosely-typed marker fields
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
