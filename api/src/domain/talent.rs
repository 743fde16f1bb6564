//! Talent dataset models
//!
//! The dataset is deserialized once at startup and never mutated afterwards;
//! localized views are derived per request in the application layer.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// The five attribute weights attached to every talent.
///
/// Values stay `serde_json::Number` so dataset numerals survive the
/// deserialize/serialize round trip unchanged (an integer weight never turns
/// into `1.0` on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentFactors {
    pub strength: Number,
    pub intellect: Number,
    pub agility: Number,
    pub will: Number,
    pub power: Number,
}

impl TalentFactors {
    /// Factor values in canonical field order, as floats.
    pub fn as_f64(&self) -> [f64; 5] {
        [
            self.strength.as_f64().unwrap_or(0.0),
            self.intellect.as_f64().unwrap_or(0.0),
            self.agility.as_f64().unwrap_or(0.0),
            self.will.as_f64().unwrap_or(0.0),
            self.power.as_f64().unwrap_or(0.0),
        ]
    }
}

/// A single talent entry. At least one of the name fields is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talent {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_de: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(rename = "baseTalentValue")]
    pub base_talent_value: Number,
    pub factors: TalentFactors,
}

/// A named collection of talents sharing a group id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentGroup {
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "groupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "groupName_de", skip_serializing_if = "Option::is_none")]
    pub group_name_de: Option<String>,
    #[serde(rename = "groupName_en", skip_serializing_if = "Option::is_none")]
    pub group_name_en: Option<String>,
    pub talents: Vec<Talent>,
}

/// Root document of the bundled dataset: an ordered sequence of groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentDataset {
    #[serde(rename = "talentGroups")]
    pub talent_groups: Vec<TalentGroup>,
}

/// Raw form input for a single factor: clients send either a number or the
/// untouched string from the form field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Number(f64),
    Text(String),
}

/// Client-supplied factor inputs before numeric coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculationInputs {
    #[serde(default)]
    pub strength: Option<RawInput>,
    #[serde(default)]
    pub intellect: Option<RawInput>,
    #[serde(default)]
    pub agility: Option<RawInput>,
    #[serde(default)]
    pub will: Option<RawInput>,
    #[serde(default)]
    pub power: Option<RawInput>,
}

impl CalculationInputs {
    /// Field name / value pairs in canonical factor order.
    pub fn fields(&self) -> [(&'static str, Option<&RawInput>); 5] {
        [
            ("strength", self.strength.as_ref()),
            ("intellect", self.intellect.as_ref()),
            ("agility", self.agility.as_ref()),
            ("will", self.will.as_ref()),
            ("power", self.power.as_ref()),
        ]
    }
}
