use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw listing query as decoded from the URL query string
///
/// Every value arrives as a string (or is absent); numeric and boolean
/// coercion happens in the query engine, which also supplies defaults for
/// anything missing or malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Alias for `search` used by the cross-domain search box
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub featured: Option<String>,
    /// Price-level token, either a run of `$` characters or a digit
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default, rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, rename = "endDate")]
    pub end_date: Option<String>,
}

impl ListingQuery {
    /// The effective search term, preferring `search` over the `q` alias
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .or(self.q.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Request to toggle a saved item on or off
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToggleFavoriteRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(alias = "item_type", rename = "itemType")]
    pub item_type: String,
    #[serde(alias = "item_id", rename = "itemId")]
    pub item_id: u32,
}

/// Request to submit a review for a listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitReviewRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(alias = "item_type", rename = "itemType")]
    pub item_type: String,
    #[serde(alias = "item_id", rename = "itemId")]
    pub item_id: u32,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[validate(length(min = 1, max = 2000))]
    pub comment: String,
}

/// Request to set or cancel an event RSVP
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RsvpRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    /// One of going|interested|declined, or "cancel" to withdraw
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_prefers_search_over_q() {
        let query = ListingQuery {
            search: Some("park".to_string()),
            q: Some("museum".to_string()),
            ..Default::default()
        };
        assert_eq!(query.search_term(), Some("park"));
    }

    #[test]
    fn test_search_term_falls_back_to_q() {
        let query = ListingQuery {
            q: Some("creek".to_string()),
            ..Default::default()
        };
        assert_eq!(query.search_term(), Some("creek"));
    }

    #[test]
    fn test_blank_search_term_is_none() {
        let query = ListingQuery {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.search_term(), None);
    }

    #[test]
    fn test_review_request_validation() {
        let request = SubmitReviewRequest {
            user_id: "user_1".to_string(),
            item_type: "restaurant".to_string(),
            item_id: 3,
            rating: 6,
            comment: "Great pasta".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
