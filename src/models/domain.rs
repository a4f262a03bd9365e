use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The listing domains served by the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Attraction,
    Event,
    Restaurant,
}

impl ListingKind {
    /// Parse the `itemType` token used by the saved-items and reviews API
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "attraction" => Some(ListingKind::Attraction),
            "event" => Some(ListingKind::Event),
            "restaurant" => Some(ListingKind::Restaurant),
            _ => None,
        }
    }

    /// The sort applied when a query carries no (or an unknown) sort token
    pub fn default_sort(&self) -> SortKey {
        match self {
            ListingKind::Event => SortKey::DateAsc,
            _ => SortKey::RatingHigh,
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ListingKind::Attraction => "attraction",
            ListingKind::Event => "event",
            ListingKind::Restaurant => "restaurant",
        };
        write!(f, "{}", name)
    }
}

/// A single listed entity (attraction, event or restaurant)
///
/// Records are immutable during a query; the engine never mutates the
/// catalog it filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub kind: ListingKind,
    pub title: String,
    pub description: String,
    pub category: String,
    pub address: String,
    pub rating: f64,
    /// Price tier 1-4, shown as a run of `$` characters (restaurants)
    #[serde(rename = "priceLevel", default)]
    pub price_level: Option<u8>,
    /// Ticket price in dollars (events); 0 means free admission
    #[serde(default)]
    pub price: Option<f64>,
    /// Calendar date, present for event listings
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub featured: bool,
}

/// Recognized sort orders for listing queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    RatingHigh,
    RatingLow,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    DateAsc,
    DateDesc,
}

impl SortKey {
    /// Parse a sort token from the query string; unknown tokens yield None
    /// so the caller can fall back to the domain default
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "rating-high" | "rating-desc" => Some(SortKey::RatingHigh),
            "rating-low" | "rating-asc" => Some(SortKey::RatingLow),
            "name-asc" => Some(SortKey::NameAsc),
            "name-desc" => Some(SortKey::NameDesc),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "date-asc" => Some(SortKey::DateAsc),
            "date-desc" => Some(SortKey::DateDesc),
            _ => None,
        }
    }
}

/// Typed query parameters after coercion from the query-string form
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: SortKey,
    pub page: usize,
    pub limit: usize,
    pub featured: bool,
    pub price_level: Option<u8>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Description of one filter control a listing domain exposes
///
/// Replaces the untyped `{key, label, type, options}` dictionaries the
/// frontend used to configure its filter bars.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterSpec {
    Select {
        key: String,
        label: String,
        options: Vec<FilterOption>,
    },
    Checkbox {
        key: String,
        label: String,
    },
    NumberRange {
        key: String,
        label: String,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// One saved item in a user's favorites list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteItem {
    #[serde(rename = "itemType")]
    pub item_type: ListingKind,
    #[serde(rename = "itemId")]
    pub item_id: u32,
    #[serde(rename = "savedAt")]
    pub saved_at: chrono::DateTime<chrono::Utc>,
}

/// A user review of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(rename = "itemType")]
    pub item_type: ListingKind,
    #[serde(rename = "itemId")]
    pub item_id: u32,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// An RSVP for an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rsvp {
    #[serde(rename = "eventId")]
    pub event_id: u32,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub status: RsvpStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Going,
    Interested,
    Declined,
}

impl RsvpStatus {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "going" => Some(RsvpStatus::Going),
            "interested" => Some(RsvpStatus::Interested),
            "declined" => Some(RsvpStatus::Declined),
            _ => None,
        }
    }
}

/// Per-event RSVP tallies
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RsvpCounts {
    pub going: usize,
    pub interested: usize,
    pub declined: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("rating-high"), Some(SortKey::RatingHigh));
        assert_eq!(SortKey::parse("date-asc"), Some(SortKey::DateAsc));
        assert_eq!(SortKey::parse("popularity"), None);
    }

    #[test]
    fn test_kind_default_sort() {
        assert_eq!(ListingKind::Event.default_sort(), SortKey::DateAsc);
        assert_eq!(ListingKind::Restaurant.default_sort(), SortKey::RatingHigh);
        assert_eq!(ListingKind::Attraction.default_sort(), SortKey::RatingHigh);
    }

    #[test]
    fn test_kind_parse_case_insensitive() {
        assert_eq!(ListingKind::parse("Attraction"), Some(ListingKind::Attraction));
        assert_eq!(ListingKind::parse("EVENT"), Some(ListingKind::Event));
        assert_eq!(ListingKind::parse("property"), None);
    }

    #[test]
    fn test_rsvp_status_parse() {
        assert_eq!(RsvpStatus::parse("going"), Some(RsvpStatus::Going));
        assert_eq!(RsvpStatus::parse("Interested"), Some(RsvpStatus::Interested));
        assert_eq!(RsvpStatus::parse("maybe"), None);
    }
}
