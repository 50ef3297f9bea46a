/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog and the UI layer. Field names follow the camelCase
/// keys of the seed dataset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse occupancy descriptor shown to users
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrowdStatus {
    Quiet,
    Moderate,
    Busy,
}

impl CrowdStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CrowdStatus::Quiet => "Quiet",
            CrowdStatus::Moderate => "Moderate",
            CrowdStatus::Busy => "Busy",
        }
    }
}

impl fmt::Display for CrowdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How full a spot is at one point of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyBand {
    Low,
    Medium,
    High,
}

/// One bar of the occupancy history
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OccupancySample {
    /// Time label (e.g., "10am")
    pub time: String,
    /// Percentage full, 0-100
    pub level: u8,
}

impl OccupancySample {
    /// Above 75% is high, above 40% is medium
    pub fn band(&self) -> OccupancyBand {
        if self.level > 75 {
            OccupancyBand::High
        } else if self.level > 40 {
            OccupancyBand::Medium
        } else {
            OccupancyBand::Low
        }
    }
}

/// A single user review. Immutable once created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    /// Display name of the author
    pub user: String,
    /// Stars, 1-5
    pub rating: u8,
    pub text: String,
    /// Display string (e.g., "2 days ago")
    pub date: String,
}

/// Position of a spot on the schematic campus map
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapPin {
    /// Short pin label (e.g., "Thode")
    pub label: String,
    /// Distance from the top edge, as a fraction of map height
    pub top: f32,
    /// Distance from the left edge, as a fraction of map width
    pub left: f32,
}

/// A study location in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudySpot {
    /// Unique, stable for the session
    pub id: String,
    pub name: String,
    pub category: String,
    /// Aggregate rating, 0.0-5.0
    pub rating: f32,
    /// Display string (e.g., "Central Campus")
    pub distance: String,
    pub crowd_status: CrowdStatus,
    /// Image URL
    pub image: String,
    pub description: String,
    pub amenities: Vec<String>,
    /// Newest first
    pub reviews: Vec<Review>,
    pub occupancy_data: Vec<OccupancySample>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub checked_in: bool,
    #[serde(default)]
    pub last_check_in: Option<String>,
    #[serde(default)]
    pub map_pin: Option<MapPin>,
}

impl StudySpot {
    /// Case-insensitive amenity lookup
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities
            .iter()
            .any(|a| a.eq_ignore_ascii_case(amenity))
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}
