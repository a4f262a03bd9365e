use crate::core::filters::{
    matches_category, matches_price_level, matches_search, parse_price_token, within_date_range,
};
use crate::core::sort::sort_listings;
use crate::models::{Listing, ListingPage, ListingQuery, QueryParams, SortKey};
use chrono::NaiveDate;

/// Listing query engine - filter, sort and paginate a listing catalog
///
/// # Pipeline stages
/// 1. Search filter (substring over title/description/address)
/// 2. Category filter
/// 3. Featured filter
/// 4. Price-level filter
/// 5. Date-range filter
/// 6. Stable sort
/// 7. Pagination
///
/// The engine is pure: it never mutates the records it is given, so the
/// same catalog can back repeated queries.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine {
    default_limit: usize,
    max_limit: usize,
}

impl QueryEngine {
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        Self {
            default_limit: default_limit.max(1),
            max_limit: max_limit.max(1),
        }
    }

    /// Coerce a raw query-string form into typed parameters
    ///
    /// Every malformed value degrades to its default rather than failing:
    /// an unknown sort token falls back to `default_sort`, non-numeric or
    /// non-positive page/limit values become 1 and the configured default,
    /// unparsable dates and price tokens are dropped.
    pub fn decode(&self, raw: &ListingQuery, default_sort: SortKey) -> QueryParams {
        let sort = raw
            .sort
            .as_deref()
            .and_then(SortKey::parse)
            .unwrap_or(default_sort);

        QueryParams {
            search: raw.search_term().map(|s| s.to_string()),
            category: raw
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            sort,
            page: parse_positive(raw.page.as_deref()).unwrap_or(1),
            limit: parse_positive(raw.limit.as_deref())
                .unwrap_or(self.default_limit)
                .min(self.max_limit),
            featured: raw
                .featured
                .as_deref()
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
            price_level: raw.price.as_deref().and_then(parse_price_token),
            start_date: parse_date(raw.start_date.as_deref()),
            end_date: parse_date(raw.end_date.as_deref()),
        }
    }

    /// Run the full pipeline over a catalog slice
    pub fn query(&self, records: &[Listing], params: &QueryParams) -> ListingPage {
        let needle = params.search.as_deref().map(str::to_lowercase);

        let mut matched: Vec<&Listing> = records
            .iter()
            .filter(|l| needle.as_deref().map_or(true, |n| matches_search(l, n)))
            .filter(|l| {
                params
                    .category
                    .as_deref()
                    .map_or(true, |c| matches_category(l, c))
            })
            .filter(|l| !params.featured || l.featured)
            .filter(|l| {
                params
                    .price_level
                    .map_or(true, |level| matches_price_level(l, level))
            })
            .filter(|l| within_date_range(l, params.start_date, params.end_date))
            .collect();

        sort_listings(&mut matched, params.sort);

        let limit = params.limit.clamp(1, self.max_limit);
        let current_page = params.page.max(1);
        let total_count = matched.len();
        let total_pages = (total_count + limit - 1) / limit;

        // A page past the end yields an empty slice, never an error
        let start = (current_page - 1).saturating_mul(limit);
        let items = if start >= total_count {
            Vec::new()
        } else {
            let end = (start + limit).min(total_count);
            matched[start..end].iter().map(|l| (*l).clone()).collect()
        };

        ListingPage {
            items,
            total_count,
            total_pages,
            current_page,
        }
    }

    /// Decode and query in one step; what the listing routes call
    pub fn run(
        &self,
        records: &[Listing],
        raw: &ListingQuery,
        default_sort: SortKey,
    ) -> ListingPage {
        let params = self.decode(raw, default_sort);
        self.query(records, &params)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(9, 100)
    }
}

fn parse_positive(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
        .map(|v| v as usize)
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingKind;

    fn create_listing(id: u32, title: &str, category: &str, rating: f64) -> Listing {
        Listing {
            id,
            kind: ListingKind::Attraction,
            title: title.to_string(),
            description: format!("{} in Macomb County", title),
            category: category.to_string(),
            address: "Macomb County, MI".to_string(),
            rating,
            price_level: None,
            price: None,
            date: None,
            featured: id % 3 == 0,
        }
    }

    fn sample_catalog() -> Vec<Listing> {
        vec![
            create_listing(1, "Stony Creek Metropark", "Outdoors", 4.8),
            create_listing(2, "Partridge Creek Mall", "Shopping", 4.6),
            create_listing(3, "Macomb Recreation Center", "Recreation", 4.7),
            create_listing(4, "Cherry Creek Golf Club", "Recreation", 4.6),
            create_listing(5, "Michigan Transit Museum", "Museum", 4.3),
        ]
    }

    #[test]
    fn test_search_filters_by_substring() {
        let engine = QueryEngine::default();
        let catalog = sample_catalog();
        let raw = ListingQuery {
            search: Some("creek".to_string()),
            ..Default::default()
        };

        let page = engine.run(&catalog, &raw, SortKey::NameAsc);

        assert_eq!(page.total_count, 3);
        let titles: Vec<&str> = page.items.iter().map(|l| l.title.as_str()).collect();
        assert!(titles.contains(&"Stony Creek Metropark"));
        assert!(titles.contains(&"Cherry Creek Golf Club"));
        assert!(titles.contains(&"Partridge Creek Mall"));
    }

    #[test]
    fn test_category_filter() {
        let engine = QueryEngine::default();
        let catalog = sample_catalog();
        let raw = ListingQuery {
            category: Some("Recreation".to_string()),
            ..Default::default()
        };

        let page = engine.run(&catalog, &raw, SortKey::RatingHigh);

        assert_eq!(page.total_count, 2);
        assert!(page.items.iter().all(|l| l.category == "Recreation"));
    }

    #[test]
    fn test_featured_filter() {
        let engine = QueryEngine::default();
        let catalog = sample_catalog();
        let raw = ListingQuery {
            featured: Some("true".to_string()),
            ..Default::default()
        };

        let page = engine.run(&catalog, &raw, SortKey::RatingHigh);

        assert!(page.items.iter().all(|l| l.featured));
    }

    #[test]
    fn test_default_sort_applied_on_unknown_token() {
        let engine = QueryEngine::default();
        let params = engine.decode(
            &ListingQuery {
                sort: Some("popularity".to_string()),
                ..Default::default()
            },
            SortKey::RatingHigh,
        );
        assert_eq!(params.sort, SortKey::RatingHigh);
    }

    #[test]
    fn test_malformed_page_and_limit_coerced() {
        let engine = QueryEngine::new(9, 100);
        let params = engine.decode(
            &ListingQuery {
                page: Some("-3".to_string()),
                limit: Some("zero".to_string()),
                ..Default::default()
            },
            SortKey::RatingHigh,
        );
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 9);
    }

    #[test]
    fn test_limit_capped_at_max() {
        let engine = QueryEngine::new(9, 50);
        let params = engine.decode(
            &ListingQuery {
                limit: Some("500".to_string()),
                ..Default::default()
            },
            SortKey::RatingHigh,
        );
        assert_eq!(params.limit, 50);
    }

    #[test]
    fn test_pagination_slice_and_totals() {
        let engine = QueryEngine::default();
        let catalog: Vec<Listing> = (1..=12)
            .map(|i| create_listing(i, &format!("Listing {}", i), "Recreation", 4.0))
            .collect();
        let raw = ListingQuery {
            page: Some("2".to_string()),
            limit: Some("9".to_string()),
            ..Default::default()
        };

        let page = engine.run(&catalog, &raw, SortKey::NameAsc);

        assert_eq!(page.total_count, 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_page_past_end_is_empty_not_error() {
        let engine = QueryEngine::default();
        let catalog = sample_catalog();
        let raw = ListingQuery {
            page: Some("5".to_string()),
            limit: Some("3".to_string()),
            ..Default::default()
        };

        let page = engine.run(&catalog, &raw, SortKey::RatingHigh);

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 5);
    }

    #[test]
    fn test_empty_result_set_is_normal() {
        let engine = QueryEngine::default();
        let catalog = sample_catalog();
        let raw = ListingQuery {
            search: Some("waterslide".to_string()),
            ..Default::default()
        };

        let page = engine.run(&catalog, &raw, SortKey::RatingHigh);

        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_query_is_idempotent_and_non_mutating() {
        let engine = QueryEngine::default();
        let catalog = sample_catalog();
        let raw = ListingQuery {
            search: Some("creek".to_string()),
            sort: Some("name-asc".to_string()),
            ..Default::default()
        };

        let first = engine.run(&catalog, &raw, SortKey::RatingHigh);
        let second = engine.run(&catalog, &raw, SortKey::RatingHigh);

        let first_ids: Vec<u32> = first.items.iter().map(|l| l.id).collect();
        let second_ids: Vec<u32> = second.items.iter().map(|l| l.id).collect();
        assert_eq!(first_ids, second_ids);
        // Input order untouched
        assert_eq!(catalog[0].id, 1);
        assert_eq!(catalog[4].id, 5);
    }

    #[test]
    fn test_rating_high_example_ordering() {
        let engine = QueryEngine::default();
        let catalog = vec![
            create_listing(1, "Bonefish Grill", "Seafood", 4.7),
            create_listing(2, "Chesterfield Tavern", "Pub", 4.5),
        ];
        let raw = ListingQuery {
            sort: Some("rating-high".to_string()),
            ..Default::default()
        };

        let page = engine.run(&catalog, &raw, SortKey::RatingHigh);

        assert_eq!(page.items[0].title, "Bonefish Grill");
        assert_eq!(page.items[1].title, "Chesterfield Tavern");
    }
}
