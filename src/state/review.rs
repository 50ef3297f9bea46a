/// Review form state
///
/// The draft lives only while the review screen is open. Validation here is
/// the caller-side check (a star must be picked, the text must say
/// something); the catalog repeats only the hard range check.

use crate::error::ReviewError;

/// Minimum trimmed review length when no config overrides it
pub const DEFAULT_MIN_REVIEW_CHARS: usize = 5;

/// Label shown under the star selector
pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Very Good",
        5 => "Excellent",
        _ => "Select a rating",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    /// 0 until a star is picked
    pub rating: u8,
    pub text: String,
}

impl ReviewDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a star; values above 5 are clamped
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.min(5);
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Check the draft and return the rating and trimmed text to submit
    pub fn validate(&self, min_chars: usize) -> Result<(u8, &str), ReviewError> {
        if self.rating == 0 {
            return Err(ReviewError::MissingRating);
        }

        let text = self.text.trim();
        if text.chars().count() < min_chars {
            return Err(ReviewError::TooShort { min: min_chars });
        }

        Ok((self.rating, text))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rating() {
        let draft = ReviewDraft {
            rating: 0,
            text: "Great spot".into(),
        };
        assert_eq!(
            draft.validate(DEFAULT_MIN_REVIEW_CHARS),
            Err(ReviewError::MissingRating)
        );
    }

    #[test]
    fn test_too_short_after_trim() {
        let draft = ReviewDraft {
            rating: 4,
            text: "  ok   ".into(),
        };
        assert_eq!(
            draft.validate(DEFAULT_MIN_REVIEW_CHARS),
            Err(ReviewError::TooShort { min: 5 })
        );
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let mut draft = ReviewDraft::new();
        draft.set_rating(3);
        draft.set_text(" Great spot\n".into());

        assert_eq!(draft.validate(DEFAULT_MIN_REVIEW_CHARS), Ok((3, "Great spot")));
    }

    #[test]
    fn test_rating_is_clamped() {
        let mut draft = ReviewDraft::new();
        draft.set_rating(9);
        assert_eq!(draft.rating, 5);
    }

    #[test]
    fn test_labels() {
        assert_eq!(rating_label(0), "Select a rating");
        assert_eq!(rating_label(1), "Poor");
        assert_eq!(rating_label(4), "Very Good");
        assert_eq!(rating_label(5), "Excellent");
    }

    #[test]
    fn test_clear() {
        let mut draft = ReviewDraft {
            rating: 2,
            text: "meh".into(),
        };
        draft.clear();
        assert_eq!(draft, ReviewDraft::default());
    }
}
