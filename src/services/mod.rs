// Service exports
pub mod catalog;
pub mod engagement;
pub mod favorites;

pub use catalog::{CatalogError, CatalogStore};
pub use engagement::{ReviewStore, RsvpStore};
pub use favorites::FavoritesStore;
