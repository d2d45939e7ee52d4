//! Product review entity.

/// Lowest rating the review form accepts.
pub const MIN_RATING: u32 = 1;
/// Highest rating the review form accepts.
pub const MAX_RATING: u32 = 5;

/// A single review attached to a product.
///
/// Reviews carry no identifier and are never edited once submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    user: String,
    rating: u32,
    comment: String,
}

impl Review {
    /// Creates a new review.
    ///
    /// The rating is not range-checked here; see [`Review::has_valid_rating`].
    #[must_use]
    pub fn new(user: impl Into<String>, rating: u32, comment: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Returns the reviewer name.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the star rating.
    #[must_use]
    pub const fn rating(&self) -> u32 {
        self.rating
    }

    /// Returns the review text.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns whether the reviewer name and comment are filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.user.is_empty() && !self.comment.is_empty()
    }

    /// Returns whether the rating lies within the form bounds.
    #[must_use]
    pub const fn has_valid_rating(&self) -> bool {
        self.rating >= MIN_RATING && self.rating <= MAX_RATING
    }
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}/5: {}", self.user, self.rating, self.comment)
    }
}
