//! Test fixtures
//!
//! Factory functions for datasets used across unit and integration tests.

use crate::domain::TalentDataset;

/// A small dataset: full German/English coverage in the first group, a
/// German-only second group to exercise the localization fallback.
pub fn sample_dataset() -> TalentDataset {
    serde_json::from_str(sample_dataset_json()).expect("fixture dataset parses")
}

fn sample_dataset_json() -> &'static str {
    r#"{
      "talentGroups": [
        {
          "groupId": "g1",
          "groupName_de": "Gruppe",
          "groupName_en": "Group",
          "talents": [
            {
              "id": "t1",
              "name_de": "Stärke",
              "name_en": "Strength",
              "baseTalentValue": 10,
              "factors": { "strength": 1, "intellect": 0, "agility": 0, "will": 0, "power": 0 }
            }
          ]
        },
        {
          "groupId": "g2",
          "groupName_de": "Geist",
          "talents": [
            {
              "id": "t2",
              "name_de": "Rechnen",
              "baseTalentValue": 8,
              "factors": { "strength": 0, "intellect": 2, "agility": 0, "will": 1, "power": 0 }
            }
          ]
        }
      ]
    }"#
}
