use chrono::Utc;
use std::collections::HashSet;

use super::data::{Review, StudySpot};
use crate::error::{CatalogError, ReviewError};

/// Seed dataset, embedded at compile time
const SEED_SPOTS: &str = include_str!("seed_spots.json");

/// Display marker for check-ins and reviews made during this session
pub const JUST_NOW: &str = "Just now";

/// The Catalog owns the mutable list of study spots for the session.
///
/// It is copied from the read-only seed at startup and never written back.
/// Lookups with an unknown id are no-ops rather than errors: the set of
/// spots is closed and the UI only ever hands out ids it got from here.
pub struct Catalog {
    spots: Vec<StudySpot>,
    /// Sequence suffix that keeps review ids unique within a millisecond
    next_review_seq: u64,
}

impl Catalog {
    /// Create a catalog from the embedded seed dataset
    pub fn seeded() -> Result<Self, CatalogError> {
        let spots: Vec<StudySpot> = serde_json::from_str(SEED_SPOTS)?;
        Self::from_spots(spots)
    }

    /// Create a catalog from an explicit spot list.
    /// Fails on an empty list or a repeated spot id.
    pub fn from_spots(spots: Vec<StudySpot>) -> Result<Self, CatalogError> {
        if spots.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for spot in &spots {
            if !seen.insert(spot.id.as_str()) {
                return Err(CatalogError::DuplicateSpotId(spot.id.clone()));
            }
        }

        Ok(Catalog {
            spots,
            next_review_seq: 0,
        })
    }

    /// All spots, in seed order
    pub fn spots(&self) -> &[StudySpot] {
        &self.spots
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn get(&self, id: &str) -> Option<&StudySpot> {
        self.spots.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut StudySpot> {
        self.spots.iter_mut().find(|s| s.id == id)
    }

    /// Look up a spot, falling back to the first catalog entry.
    /// The catalog is never empty, so this always yields a spot.
    pub fn get_or_first(&self, id: &str) -> &StudySpot {
        self.get(id).unwrap_or(&self.spots[0])
    }

    /// Flip the favorite flag of one spot.
    /// Returns the new flag, or None if the id is unknown.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let spot = self.get_mut(id)?;
        spot.is_favorite = !spot.is_favorite;
        Some(spot.is_favorite)
    }

    /// Mark a spot as checked in "just now".
    /// Repeated calls simply reset the marker.
    pub fn check_in(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(spot) => {
                spot.checked_in = true;
                spot.last_check_in = Some(JUST_NOW.to_string());
                true
            }
            None => false,
        }
    }

    /// Prepend a new review to a spot's review list.
    ///
    /// The aggregate rating is left untouched. Returns `Ok(None)` when the
    /// spot id is unknown.
    pub fn submit_review(
        &mut self,
        id: &str,
        user: &str,
        rating: u8,
        text: &str,
    ) -> Result<Option<&Review>, ReviewError> {
        if !(1..=5).contains(&rating) {
            return Err(ReviewError::RatingOutOfRange(rating));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ReviewError::EmptyText);
        }

        let review_id = format!("r{}-{}", Utc::now().timestamp_millis(), self.next_review_seq);
        let Some(spot) = self.spots.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        self.next_review_seq += 1;

        spot.reviews.insert(
            0,
            Review {
                id: review_id,
                user: user.to_string(),
                rating,
                text: text.to_string(),
                date: JUST_NOW.to_string(),
            },
        );

        Ok(spot.reviews.first())
    }

    /// Spots the user marked as favorite, in catalog order
    pub fn favorites(&self) -> impl Iterator<Item = &StudySpot> {
        self.spots.iter().filter(|s| s.is_favorite)
    }

    /// Spots the user checked in to, in catalog order
    pub fn checked_in(&self) -> impl Iterator<Item = &StudySpot> {
        self.spots.iter().filter(|s| s.checked_in)
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("spots", &self.spots.len())
            .field("next_review_seq", &self.next_review_seq)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_counts(catalog: &Catalog) -> Vec<usize> {
        catalog.spots().iter().map(|s| s.review_count()).collect()
    }

    #[test]
    fn test_seed_loads() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.spots().iter().all(|s| !s.is_favorite && !s.checked_in));
        assert!(catalog.spots().iter().all(|s| s.map_pin.is_some()));
    }

    #[test]
    fn test_seed_is_well_formed() {
        let catalog = Catalog::seeded().unwrap();
        for spot in catalog.spots() {
            assert!((0.0..=5.0).contains(&spot.rating), "{}", spot.id);
            assert!(spot.occupancy_data.iter().all(|o| o.level <= 100));
            assert!(spot.reviews.iter().all(|r| (1..=5).contains(&r.rating)));
        }

        let mut review_ids = HashSet::new();
        for review in catalog.spots().iter().flat_map(|s| s.reviews.iter()) {
            assert!(review_ids.insert(review.id.clone()));
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut spots = Catalog::seeded().unwrap().spots().to_vec();
        spots[1].id = spots[0].id.clone();

        let result = Catalog::from_spots(spots);
        assert!(matches!(result, Err(CatalogError::DuplicateSpotId(id)) if id == "1"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(Catalog::from_spots(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_get_or_first_falls_back() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.get_or_first("3").id, "3");
        assert_eq!(catalog.get_or_first("missing").id, "1");
        assert_eq!(catalog.get_or_first("").id, "1");
    }

    #[test]
    fn test_toggle_favorite_twice_restores() {
        let mut catalog = Catalog::seeded().unwrap();
        let before = catalog.spots().to_vec();

        assert_eq!(catalog.toggle_favorite("2"), Some(true));
        assert!(catalog.get("2").unwrap().is_favorite);
        assert!(catalog.spots().iter().filter(|s| s.id != "2").all(|s| !s.is_favorite));

        assert_eq!(catalog.toggle_favorite("2"), Some(false));
        assert_eq!(catalog.spots(), before.as_slice());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut catalog = Catalog::seeded().unwrap();
        let before = catalog.spots().to_vec();

        assert_eq!(catalog.toggle_favorite("42"), None);
        assert!(!catalog.check_in("42"));
        assert_eq!(catalog.submit_review("42", "You", 4, "Lovely place").unwrap(), None);

        assert_eq!(catalog.spots(), before.as_slice());
    }

    #[test]
    fn test_check_in_sets_marker() {
        let mut catalog = Catalog::seeded().unwrap();
        assert!(catalog.check_in("5"));
        assert!(catalog.check_in("5"));

        let spot = catalog.get("5").unwrap();
        assert!(spot.checked_in);
        assert_eq!(spot.last_check_in.as_deref(), Some(JUST_NOW));
        assert_eq!(catalog.checked_in().count(), 1);
    }

    #[test]
    fn test_submit_review_prepends() {
        let mut catalog = Catalog::seeded().unwrap();
        let before = review_counts(&catalog);
        let rating_before = catalog.get("1").unwrap().rating;

        let review = catalog
            .submit_review("1", "You", 3, "  Great spot ")
            .unwrap()
            .cloned()
            .unwrap();
        assert_eq!(review.rating, 3);
        assert_eq!(review.text, "Great spot");
        assert_eq!(review.date, JUST_NOW);

        let spot = catalog.get("1").unwrap();
        assert_eq!(spot.reviews[0], review);
        assert_eq!(spot.rating, rating_before);

        let after = review_counts(&catalog);
        assert_eq!(after[0], before[0] + 1);
        assert_eq!(&after[1..], &before[1..]);
    }

    #[test]
    fn test_review_ids_are_unique() {
        let mut catalog = Catalog::seeded().unwrap();
        for _ in 0..5 {
            catalog.submit_review("4", "You", 5, "Busy but fun").unwrap();
        }

        let ids: HashSet<&str> = catalog
            .get("4")
            .unwrap()
            .reviews
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_submit_review_validates() {
        let mut catalog = Catalog::seeded().unwrap();
        let before = review_counts(&catalog);

        assert_eq!(
            catalog.submit_review("1", "You", 0, "Great spot").unwrap_err(),
            ReviewError::RatingOutOfRange(0)
        );
        assert_eq!(
            catalog.submit_review("1", "You", 6, "Great spot").unwrap_err(),
            ReviewError::RatingOutOfRange(6)
        );
        assert_eq!(
            catalog.submit_review("1", "You", 4, "   ").unwrap_err(),
            ReviewError::EmptyText
        );

        assert_eq!(review_counts(&catalog), before);
    }
}
