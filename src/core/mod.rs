// Core query pipeline exports
pub mod engine;
pub mod filters;
pub mod sort;

pub use engine::QueryEngine;
pub use filters::{
    matches_category, matches_price_level, matches_search, parse_price_token, within_date_range,
};
pub use sort::{compare, sort_listings};
