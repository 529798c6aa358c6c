use serde::{Deserialize, Serialize};

use crate::core::BodyOrigin;
use crate::core::primitives::whole_degrees_in_sign;

use super::PlacementEntry;

/// Text options for body labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Append whole degrees within the sign, e.g. `Su 14°`.
    pub show_degrees: bool,
    pub retrograde_marker: Option<String>,
    /// Appended to transit labels so they read differently without styling.
    pub transit_marker: Option<String>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            show_degrees: false,
            retrograde_marker: Some("(R)".to_owned()),
            transit_marker: None,
        }
    }
}

static ABBREVIATIONS: [(&[&str], &str); 13] = [
    (&["sun", "surya"], "Su"),
    (&["moon", "chandra"], "Mo"),
    (&["mars", "mangal", "mangala"], "Ma"),
    (&["mercury", "budha"], "Me"),
    (&["jupiter", "guru", "brihaspati"], "Ju"),
    (&["venus", "shukra"], "Ve"),
    (&["saturn", "shani"], "Sa"),
    (&["rahu"], "Ra"),
    (&["ketu"], "Ke"),
    (&["uranus"], "Ur"),
    (&["neptune"], "Ne"),
    (&["pluto"], "Pl"),
    (&["ascendant", "lagna"], "As"),
];

/// Conventional short name for well-known bodies; other names pass through.
#[must_use]
pub fn body_abbreviation(name: &str) -> &str {
    let trimmed = name.trim();
    ABBREVIATIONS
        .iter()
        .find(|(aliases, _)| aliases.iter().any(|alias| alias.eq_ignore_ascii_case(trimmed)))
        .map_or(trimmed, |(_, short)| *short)
}

#[must_use]
pub fn format_body_label(entry: &PlacementEntry, config: &LabelConfig) -> String {
    let mut label = body_abbreviation(&entry.body_name).to_owned();
    if config.show_degrees {
        if let Some(longitude) = entry.longitude {
            label.push_str(&format!(" {}°", whole_degrees_in_sign(longitude)));
        }
    }
    if entry.is_retrograde {
        if let Some(marker) = &config.retrograde_marker {
            label.push_str(marker);
        }
    }
    if entry.origin == BodyOrigin::Transit {
        if let Some(marker) = &config.transit_marker {
            label.push_str(marker);
        }
    }
    label
}
