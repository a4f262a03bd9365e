use crate::models::Listing;
use chrono::NaiveDate;

/// Check whether a listing matches a search needle
///
/// The needle must already be lower-cased; matching is a plain substring
/// test over title, description and address. No tokenization or ranking.
#[inline]
pub fn matches_search(listing: &Listing, needle: &str) -> bool {
    listing.title.to_lowercase().contains(needle)
        || listing.description.to_lowercase().contains(needle)
        || listing.address.to_lowercase().contains(needle)
}

/// Check whether a listing belongs to a category (case-insensitive exact match)
#[inline]
pub fn matches_category(listing: &Listing, category: &str) -> bool {
    listing.category.eq_ignore_ascii_case(category)
}

/// Check whether a listing sits at an exact price level
///
/// Listings without a price level never match a price filter.
#[inline]
pub fn matches_price_level(listing: &Listing, level: u8) -> bool {
    listing.price_level == Some(level)
}

/// Check whether a listing's date falls within an inclusive range
///
/// Either bound may be open-ended. When no bound is set every listing
/// passes; once a bound is set, undated listings are excluded.
#[inline]
pub fn within_date_range(
    listing: &Listing,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    if start.is_none() && end.is_none() {
        return true;
    }
    let Some(date) = listing.date else {
        return false;
    };
    if let Some(start) = start {
        if date < start {
            return false;
        }
    }
    if let Some(end) = end {
        if date > end {
            return false;
        }
    }
    true
}

/// Coerce a price token from the query string into a price level
///
/// Accepts a run of `$` characters ("$$$" -> 3) or a bare digit ("2" -> 2).
/// Anything else, including levels outside 1-4, is ignored.
pub fn parse_price_token(token: &str) -> Option<u8> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let level = if token.chars().all(|c| c == '$') {
        token.len() as u8
    } else {
        token.parse::<u8>().ok()?
    };

    (1..=4).contains(&level).then_some(level)
}
