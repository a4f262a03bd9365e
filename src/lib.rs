//! City Guide API - listing and engagement service for the Macomb city guide
//!
//! This library provides the listing query engine behind the guide's
//! attractions, events and dining pages: a filter/sort/paginate pipeline
//! over in-memory catalogs, plus the favorites, review and RSVP stores
//! the frontend's engagement features talk to.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::QueryEngine;
pub use models::{
    Listing, ListingKind, ListingPage, ListingQuery, QueryParams, SortKey,
};
pub use services::{CatalogStore, FavoritesStore, ReviewStore, RsvpStore};
