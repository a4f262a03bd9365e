// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    FavoriteItem, FilterOption, FilterSpec, Listing, ListingKind, QueryParams, Review, Rsvp,
    RsvpCounts, RsvpStatus, SortKey,
};
pub use requests::{ListingQuery, RsvpRequest, SubmitReviewRequest, ToggleFavoriteRequest};
pub use responses::{
    ErrorResponse, HealthResponse, ListingDetailResponse, ListingPage, ReviewsResponse,
    RsvpResponse, SavedItemsResponse, SearchResponse, SubmitReviewResponse,
    ToggleFavoriteResponse,
};
