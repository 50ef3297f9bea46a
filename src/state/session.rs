use log::{debug, info};

use super::catalog::Catalog;
use super::data::StudySpot;
use super::filter::{filter_spots, FilterState, NoiseLevel, ALL_CATEGORIES};
use super::navigation::{Navigator, Screen};
use super::review::ReviewDraft;
use crate::error::ReviewError;

/// Handle for the delayed return to Detail after a review submission.
///
/// Only the most recent ticket is live, and any navigation cancels it, so a
/// ticket that fires late never acts on a screen the user already left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnTicket(u64);

/// All mutable state of one McStudy session.
///
/// Screens read from it; every change goes through one of the named
/// operations below. The filtered list is always recomputed from
/// (spots, category, search, filters) and never stored.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    navigator: Navigator,
    active_category: String,
    search_term: String,
    filters: FilterState,
    draft: ReviewDraft,
    pending_return: Option<ReturnTicket>,
    next_ticket: u64,
    /// Reviews added by `submit_review` since startup
    submitted_reviews: usize,
    /// Author name put on reviews submitted this session
    reviewer: String,
    min_review_chars: usize,
}

impl Session {
    pub fn new(catalog: Catalog, reviewer: impl Into<String>, min_review_chars: usize) -> Self {
        Session {
            catalog,
            navigator: Navigator::new(),
            active_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
            filters: FilterState::default(),
            draft: ReviewDraft::new(),
            pending_return: None,
            next_ticket: 0,
            submitted_reviews: 0,
            reviewer: reviewer.into(),
            min_review_chars,
        }
    }

    // ========== Read access ==========

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn pending_return(&self) -> Option<ReturnTicket> {
        self.pending_return
    }

    /// Spots passing category, search, noise and amenity filters
    pub fn filtered_spots(&self) -> Vec<&StudySpot> {
        filter_spots(
            self.catalog.spots(),
            &self.active_category,
            &self.search_term,
            &self.filters,
        )
    }

    /// Spot under inspection, or the first catalog entry if none is selected
    pub fn selected_spot(&self) -> &StudySpot {
        self.catalog
            .get_or_first(self.navigator.selected_place_id().unwrap_or_default())
    }

    /// Number of reviews submitted during this session
    pub fn my_review_count(&self) -> usize {
        self.submitted_reviews
    }

    // ========== Navigation ==========

    pub fn navigate_to(&mut self, screen: Screen, place_id: Option<&str>) {
        self.cancel_pending_return();
        if screen == Screen::Review && self.navigator.current() != Screen::Review {
            self.draft.clear();
        }
        self.navigator.navigate_to(screen, place_id);
    }

    pub fn go_back(&mut self) -> bool {
        self.cancel_pending_return();
        self.navigator.go_back()
    }

    fn cancel_pending_return(&mut self) {
        if let Some(ticket) = self.pending_return.take() {
            debug!("⏹️  Cancelled pending return {:?}", ticket);
        }
    }

    // ========== Catalog view criteria ==========

    pub fn set_category(&mut self, category: &str) {
        self.active_category = category.to_string();
    }

    pub fn set_search(&mut self, term: String) {
        self.search_term = term;
    }

    /// Selecting the active level again keeps it selected
    pub fn set_noise_level(&mut self, level: NoiseLevel) {
        self.filters.noise_level = level;
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        self.filters.toggle_amenity(amenity);
    }

    pub fn set_open_now(&mut self, open_now: bool) {
        self.filters.open_now = open_now;
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    // ========== Spot mutations ==========

    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let favorite = self.catalog.toggle_favorite(id)?;
        info!("❤️  Spot {} favorite: {}", id, favorite);
        Some(favorite)
    }

    pub fn check_in(&mut self, id: &str) -> bool {
        let checked_in = self.catalog.check_in(id);
        if checked_in {
            info!("📍 Checked in to spot {}", id);
        }
        checked_in
    }

    // ========== Review form ==========

    pub fn set_draft_rating(&mut self, rating: u8) {
        self.draft.set_rating(rating);
    }

    pub fn set_draft_text(&mut self, text: String) {
        self.draft.set_text(text);
    }

    /// Validate the draft, add the review to the selected spot and schedule
    /// the return to Detail.
    ///
    /// The returned ticket must be handed back to `complete_return` once the
    /// submission delay elapses. While that ticket is live, further
    /// submissions are refused.
    pub fn submit_review(&mut self) -> Result<ReturnTicket, ReviewError> {
        if self.pending_return.is_some() {
            return Err(ReviewError::AlreadySubmitted);
        }

        let (rating, text) = self.draft.validate(self.min_review_chars)?;
        let spot_id = self.selected_spot().id.clone();

        if let Some(review) = self
            .catalog
            .submit_review(&spot_id, &self.reviewer, rating, text)?
        {
            info!("📝 Review {} added to spot {} ({} stars)", review.id, spot_id, rating);
            self.submitted_reviews += 1;
        }

        let ticket = ReturnTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending_return = Some(ticket);

        Ok(ticket)
    }

    /// Act on a due return ticket.
    ///
    /// Goes back to Detail only if the ticket is still the live one and the
    /// user is still on the review screen. Returns whether it navigated.
    pub fn complete_return(&mut self, ticket: ReturnTicket) -> bool {
        if self.pending_return != Some(ticket) {
            debug!("⏭️  Ignoring stale return {:?}", ticket);
            return false;
        }
        self.pending_return = None;

        if self.navigator.current() != Screen::Review {
            return false;
        }
        self.navigator.go_back()
    }
}
