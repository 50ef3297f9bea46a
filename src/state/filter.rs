/// Catalog filtering
///
/// The filtered view is a pure function of the spot list, the active
/// category, the search term and the structured `FilterState`. Nothing
/// here mutates the catalog, and the result keeps catalog order.

use std::collections::BTreeSet;

use super::data::{CrowdStatus, StudySpot};

/// Category chip that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Category chips offered on the home screen
pub const CATEGORIES: [&str; 6] = [
    ALL_CATEGORIES,
    "Libraries",
    "Cafes",
    "Outdoors",
    "Study Halls",
    "Lounges",
];

/// Amenities offered by the filter overlay
pub const AMENITY_CHOICES: [&str; 6] = [
    "Power Outlets",
    "Whiteboards",
    "Food Nearby",
    "WiFi",
    "Monitor",
    "Standing Desk",
];

/// User-facing noise vocabulary
///
/// Silent and Quiet both map onto the `Quiet` crowd status, Social
/// maps onto `Busy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseLevel {
    #[default]
    Any,
    Silent,
    Quiet,
    Moderate,
    Social,
}

impl NoiseLevel {
    /// Choices shown in the overlay (`Any` is only reachable via reset)
    pub const CHOICES: [NoiseLevel; 4] = [
        NoiseLevel::Silent,
        NoiseLevel::Quiet,
        NoiseLevel::Moderate,
        NoiseLevel::Social,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NoiseLevel::Any => "Any",
            NoiseLevel::Silent => "Silent",
            NoiseLevel::Quiet => "Quiet",
            NoiseLevel::Moderate => "Moderate",
            NoiseLevel::Social => "Social",
        }
    }

    /// Crowd status this level selects, `None` for `Any`
    pub fn crowd_status(&self) -> Option<CrowdStatus> {
        match self {
            NoiseLevel::Any => None,
            NoiseLevel::Silent | NoiseLevel::Quiet => Some(CrowdStatus::Quiet),
            NoiseLevel::Moderate => Some(CrowdStatus::Moderate),
            NoiseLevel::Social => Some(CrowdStatus::Busy),
        }
    }

    pub fn matches(&self, status: CrowdStatus) -> bool {
        self.crowd_status().map_or(true, |wanted| wanted == status)
    }
}

/// Structured filters chosen in the filter overlay
///
/// Applies globally to the catalog view, independent of any single spot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub noise_level: NoiseLevel,
    /// Amenities a spot must all have
    pub amenities: BTreeSet<String>,
    /// Stored and shown, but not applied: every spot is treated as open
    pub open_now: bool,
}

impl FilterState {
    /// Add the amenity if absent, remove it if present
    pub fn toggle_amenity(&mut self, amenity: &str) {
        if !self.amenities.remove(amenity) {
            self.amenities.insert(amenity.to_string());
        }
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.contains(amenity)
    }

    /// Check if no filter is narrowing the view
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Back to `any`, no amenities, open-now off
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Noise and amenity predicates, ANDed
    pub fn matches(&self, spot: &StudySpot) -> bool {
        self.noise_level.matches(spot.crowd_status)
            && self.amenities.iter().all(|a| spot.has_amenity(a))
    }
}

pub fn matches_category(spot: &StudySpot, category: &str) -> bool {
    category == ALL_CATEGORIES || spot.category == category
}

/// Case-insensitive substring match on name or description
pub fn matches_search(spot: &StudySpot, search: &str) -> bool {
    let needle = search.to_lowercase();
    spot.name.to_lowercase().contains(&needle)
        || spot.description.to_lowercase().contains(&needle)
}

/// Derive the visible spot list. Stable: catalog order is preserved.
pub fn filter_spots<'a>(
    spots: &'a [StudySpot],
    category: &str,
    search: &str,
    filters: &FilterState,
) -> Vec<&'a StudySpot> {
    spots
        .iter()
        .filter(|spot| matches_category(spot, category))
        .filter(|spot| matches_search(spot, search))
        .filter(|spot| filters.matches(spot))
        .collect()
}
