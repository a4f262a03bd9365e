use crate::models::{Listing, SortKey};
use std::cmp::Ordering;

/// Compare two listings under a sort key
///
/// Name comparisons are case-insensitive. Price comparisons use the ticket
/// price where present and fall back to the price level; listings with
/// neither compare as free. Undated listings order before dated ones.
pub fn compare(key: SortKey, a: &Listing, b: &Listing) -> Ordering {
    match key {
        SortKey::RatingHigh => cmp_f64(b.rating, a.rating),
        SortKey::RatingLow => cmp_f64(a.rating, b.rating),
        SortKey::NameAsc => cmp_name(a, b),
        SortKey::NameDesc => cmp_name(b, a),
        SortKey::PriceAsc => cmp_f64(price_rank(a), price_rank(b)),
        SortKey::PriceDesc => cmp_f64(price_rank(b), price_rank(a)),
        SortKey::DateAsc => a.date.cmp(&b.date),
        SortKey::DateDesc => b.date.cmp(&a.date),
    }
}

/// Sort a filtered sequence in place
///
/// `Vec::sort_by` is a stable sort, so listings that compare equal keep
/// their original catalog order. The pagination invariants rely on this.
pub fn sort_listings(listings: &mut Vec<&Listing>, key: SortKey) {
    listings.sort_by(|a, b| compare(key, a, b));
}

#[inline]
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[inline]
fn cmp_name(a: &Listing, b: &Listing) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

#[inline]
fn price_rank(listing: &Listing) -> f64 {
    listing
        .price
        .or_else(|| listing.price_level.map(f64::from))
        .unwrap_or(0.0)
}
