use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::RatioContainer;

/// One completed analysis session: the inputs the user gave, the analysis
/// the service returned, and (optionally) the bead colors they settled on.
///
/// The id is assigned once at creation and never changes; re-saving the same
/// session overwrites every other field under that id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,

    // Inputs
    pub dob: NaiveDate,
    pub birth_time: String, // "HH:mm"
    pub gender: String,     // "male" | "female"
    pub num_beads: usize,

    // Outputs
    pub analysis: String,
    pub ratios: RatioContainer,
    /// Saved bead-color sequence, present only if the user arranged one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beads: Option<Vec<String>>,
}

impl HistoryEntry {
    pub fn new(
        dob: NaiveDate,
        birth_time: impl Into<String>,
        gender: impl Into<String>,
        num_beads: usize,
        analysis: impl Into<String>,
        ratios: RatioContainer,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            dob,
            birth_time: birth_time.into(),
            gender: gender.into(),
            num_beads,
            analysis: analysis.into(),
            ratios,
            beads: None,
        }
    }

    pub fn with_beads(mut self, beads: Vec<String>) -> Self {
        self.beads = Some(beads);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementColorMap, ElementRatio};

    fn sample_ratios() -> RatioContainer {
        RatioContainer {
            current: ElementRatio::new(25.0, 15.0, 20.0, 20.0, 20.0),
            goal: ElementRatio::new(20.0, 20.0, 20.0, 20.0, 20.0),
            colors: ElementColorMap {
                metal: "#FFFFFF".into(),
                wood: "#00A550".into(),
                water: "#0000FF".into(),
                fire: "#FF0000".into(),
                earth: "#8B4513".into(),
            },
        }
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_beads() {
        let entry = HistoryEntry::new(
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "08:30",
            "female",
            10,
            "balanced",
            sample_ratios(),
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"birthTime\":\"08:30\""));
        assert!(json.contains("\"numBeads\":10"));
        assert!(json.contains("\"1990-04-12\""));
        assert!(!json.contains("\"beads\""));

        let with_beads = entry.with_beads(vec!["#FF0000".into(); 10]);
        let json = serde_json::to_string(&with_beads).unwrap();
        assert!(json.contains("\"beads\""));
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, with_beads);
    }
}
