use crate::models::domain::{FavoriteItem, Listing, Review, Rsvp, RsvpCounts};
use serde::{Deserialize, Serialize};

/// One page of filtered, sorted listing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingPage {
    pub items: Vec<Listing>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "currentPage")]
    pub current_page: usize,
}

/// Detail view of a single listing with its reviews
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDetailResponse {
    #[serde(flatten)]
    pub listing: Listing,
    pub reviews: Vec<Review>,
    #[serde(rename = "averageRating")]
    pub average_rating: Option<f64>,
}

/// Cross-domain search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Listing>,
    pub count: usize,
}

/// A user's saved items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedItemsResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub items: Vec<FavoriteItem>,
    pub count: usize,
}

/// Result of toggling a saved item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleFavoriteResponse {
    pub favorited: bool,
    pub items: Vec<FavoriteItem>,
}

/// Reviews for one listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsResponse {
    pub items: Vec<Review>,
    #[serde(rename = "averageRating")]
    pub average_rating: Option<f64>,
    pub count: usize,
}

/// Result of submitting a review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewResponse {
    pub success: bool,
    pub review: Review,
}

/// Result of an RSVP update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsvpResponse {
    pub success: bool,
    pub rsvp: Option<Rsvp>,
    pub counts: RsvpCounts,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
