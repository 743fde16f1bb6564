//! Talent dataset service
//!
//! Owns the in-memory dataset and derives localized response views. The
//! dataset is loaded once at startup and shared read-only across requests;
//! localization never touches the source.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use serde_json::Number;

use crate::domain::{Talent, TalentDataset, TalentFactors, TalentGroup};
use crate::i18n::Lang;

/// A dataset copy with display names resolved for one locale.
///
/// The source name fields travel along with the resolved `name`/`groupName`
/// so clients keyed on a specific locale keep working.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedDataset {
    #[serde(rename = "talentGroups")]
    pub talent_groups: Vec<LocalizedGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedGroup {
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "groupName_de", skip_serializing_if = "Option::is_none")]
    pub group_name_de: Option<String>,
    #[serde(rename = "groupName_en", skip_serializing_if = "Option::is_none")]
    pub group_name_en: Option<String>,
    #[serde(rename = "groupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    pub talents: Vec<LocalizedTalent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedTalent {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_de: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "baseTalentValue")]
    pub base_talent_value: Number,
    pub factors: TalentFactors,
}

/// Service owning the shared read-only dataset.
pub struct TalentService {
    dataset: Arc<TalentDataset>,
}

impl TalentService {
    pub fn new(dataset: TalentDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Load the bundled dataset from disk. Failing here is fatal; the
    /// service has nothing to serve without it.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading talent dataset from {}", path.display()))?;
        let dataset: TalentDataset = serde_json::from_str(&raw)
            .with_context(|| format!("parsing talent dataset {}", path.display()))?;
        Ok(Self::new(dataset))
    }

    /// Find a talent anywhere in the dataset by its id.
    pub fn find_talent(&self, id: &str) -> Option<&Talent> {
        self.dataset
            .talent_groups
            .iter()
            .flat_map(|g| g.talents.iter())
            .find(|t| t.id == id)
    }

    /// Derive a dataset copy with display names resolved for `lang`.
    pub fn localized(&self, lang: Lang) -> LocalizedDataset {
        LocalizedDataset {
            talent_groups: self
                .dataset
                .talent_groups
                .iter()
                .map(|group| localize_group(group, lang))
                .collect(),
        }
    }
}

fn localize_group(group: &TalentGroup, lang: Lang) -> LocalizedGroup {
    LocalizedGroup {
        group_id: group.group_id.clone(),
        group_name_de: group.group_name_de.clone(),
        group_name_en: group.group_name_en.clone(),
        group_name: resolve_name(
            lang,
            group.group_name_de.as_deref(),
            group.group_name_en.as_deref(),
            group.group_name.as_deref(),
        ),
        talents: group
            .talents
            .iter()
            .map(|talent| localize_talent(talent, lang))
            .collect(),
    }
}

fn localize_talent(talent: &Talent, lang: Lang) -> LocalizedTalent {
    LocalizedTalent {
        id: talent.id.clone(),
        name_de: talent.name_de.clone(),
        name_en: talent.name_en.clone(),
        name: resolve_name(
            lang,
            talent.name_de.as_deref(),
            talent.name_en.as_deref(),
            talent.name.as_deref(),
        ),
        base_talent_value: talent.base_talent_value.clone(),
        factors: talent.factors.clone(),
    }
}

/// Pick the display name for `lang`, falling back to the generic name and
/// then the other locale.
fn resolve_name(
    lang: Lang,
    de: Option<&str>,
    en: Option<&str>,
    generic: Option<&str>,
) -> Option<String> {
    let picked = match lang {
        Lang::En => en.or(generic).or(de),
        Lang::De => de.or(generic).or(en),
    };
    picked.map(str::to_owned)
}
