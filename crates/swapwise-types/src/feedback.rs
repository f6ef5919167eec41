use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest rating a participant can leave.
pub const MIN_RATING: u8 = 1;

/// Highest rating a participant can leave.
pub const MAX_RATING: u8 = 5;

/// Whether a rating falls inside the accepted 1-5 range.
pub fn rating_in_bounds(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// A single feedback entry on an account's ledger.
///
/// The ledger is append-only and preserves insertion order so "most recent
/// N" queries stay cheap. Out-of-range ratings are rejected at submission
/// and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    /// Email of the account that left the feedback.
    pub author: String,
    /// Star rating in [1,5].
    pub rating: u8,
    /// Freeform comment.
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(author: &str, rating: u8, comment: &str) -> Self {
        Self {
            author: author.to_string(),
            rating,
            comment: comment.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(!rating_in_bounds(0));
        assert!(rating_in_bounds(1));
        assert!(rating_in_bounds(3));
        assert!(rating_in_bounds(5));
        assert!(!rating_in_bounds(6));
    }

    #[test]
    fn test_feedback_fields() {
        let f = Feedback::new("yashpal@swapwise.dev", 5, "Excellent mentor!");
        assert_eq!(f.author, "yashpal@swapwise.dev");
        assert_eq!(f.rating, 5);
        assert_eq!(f.comment, "Excellent mentor!");
    }
}
