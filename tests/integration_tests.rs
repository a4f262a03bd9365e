// Integration tests for the City Guide API

use actix_web::{test as actix_test, web, App};
use city_guide_api::core::QueryEngine;
use city_guide_api::models::{ListingKind, ListingPage, ListingQuery, RsvpStatus, SortKey};
use city_guide_api::routes::{configure_routes, listings::AppState};
use city_guide_api::services::{CatalogStore, FavoritesStore, ReviewStore, RsvpStore};
use std::sync::Arc;

fn create_app_state() -> AppState {
    AppState {
        catalog: Arc::new(CatalogStore::with_mock_data()),
        favorites: Arc::new(FavoritesStore::new()),
        reviews: Arc::new(ReviewStore::new()),
        rsvps: Arc::new(RsvpStore::new()),
        engine: QueryEngine::new(9, 100),
    }
}

#[test]
fn test_end_to_end_restaurant_query() {
    let catalog = CatalogStore::with_mock_data();
    let engine = QueryEngine::new(9, 100);

    // Italian places at price level $$$, best rated first
    let raw = ListingQuery {
        category: Some("Italian".to_string()),
        price: Some("$$$".to_string()),
        sort: Some("rating-high".to_string()),
        ..Default::default()
    };

    let page = engine.run(
        catalog.listings(ListingKind::Restaurant),
        &raw,
        ListingKind::Restaurant.default_sort(),
    );

    assert_eq!(page.total_count, 2);
    assert_eq!(page.items[0].title, "Testa Barra");
    assert_eq!(page.items[1].title, "Andiamo");
    for item in &page.items {
        assert_eq!(item.category, "Italian");
        assert_eq!(item.price_level, Some(3));
    }
}

#[test]
fn test_end_to_end_event_date_window() {
    let catalog = CatalogStore::with_mock_data();
    let engine = QueryEngine::new(9, 100);

    let raw = ListingQuery {
        start_date: Some("2025-06-01".to_string()),
        end_date: Some("2025-07-31".to_string()),
        ..Default::default()
    };

    let page = engine.run(
        catalog.listings(ListingKind::Event),
        &raw,
        ListingKind::Event.default_sort(),
    );

    // Five June/July events, upcoming first under the events default sort
    assert_eq!(page.total_count, 5);
    let dates: Vec<_> = page.items.iter().map(|l| l.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn test_featured_attractions_query() {
    let catalog = CatalogStore::with_mock_data();
    let engine = QueryEngine::new(9, 100);

    let raw = ListingQuery {
        featured: Some("true".to_string()),
        ..Default::default()
    };

    let page = engine.run(
        catalog.listings(ListingKind::Attraction),
        &raw,
        SortKey::RatingHigh,
    );

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].title, "Macomb Recreation Center");
}

#[tokio::test]
async fn test_favorites_toggle_round_trip() {
    let favorites = FavoritesStore::new();

    let (favorited, items) = favorites.toggle("user_1", ListingKind::Attraction, 2).await;
    assert!(favorited);
    assert_eq!(items.len(), 1);

    favorites.toggle("user_1", ListingKind::Restaurant, 3).await;
    let listed = favorites.list("user_1").await;
    assert_eq!(listed.len(), 2);

    let (favorited, items) = favorites.toggle("user_1", ListingKind::Attraction, 2).await;
    assert!(!favorited);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_type, ListingKind::Restaurant);
}

#[tokio::test]
async fn test_review_average_feeds_detail() {
    let reviews = ReviewStore::new();
    reviews
        .submit(ListingKind::Restaurant, 1, "user_1", 5, "Excellent fish")
        .await;
    reviews
        .submit(ListingKind::Restaurant, 1, "user_2", 3, "Busy on weekends")
        .await;

    assert_eq!(
        reviews.average_rating(ListingKind::Restaurant, 1).await,
        Some(4.0)
    );
}

#[tokio::test]
async fn test_rsvp_counts_by_status() {
    let rsvps = RsvpStore::new();
    rsvps.set(1, "user_1", RsvpStatus::Going).await;
    rsvps.set(1, "user_2", RsvpStatus::Going).await;
    rsvps.set(1, "user_3", RsvpStatus::Interested).await;
    rsvps.cancel(1, "user_2").await;

    let counts = rsvps.counts(1).await;
    assert_eq!(counts.going, 1);
    assert_eq!(counts.interested, 1);
    assert_eq!(counts.declined, 0);
}

#[actix_web::test]
async fn test_http_listing_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/attractions?search=creek&sort=name-asc")
        .to_request();
    let page: ListingPage = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(page.total_count, 3);
    assert_eq!(page.items[0].title, "Cherry Creek Golf Club");
}

#[actix_web::test]
async fn test_http_unknown_listing_is_404() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/restaurants/999")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_http_saved_items_flow() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/saved-items")
        .set_json(serde_json::json!({
            "userId": "user_1",
            "itemType": "attraction",
            "itemId": 2
        }))
        .to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["favorited"], true);

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/saved-items?userId=user_1")
        .to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 1);
}

#[actix_web::test]
async fn test_http_malformed_page_degrades_to_default() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(create_app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/events?page=banana&limit=-2&sort=wat")
        .to_request();
    let page: ListingPage = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(page.current_page, 1);
    assert!(page.items.len() <= 9);
    assert_eq!(page.total_count, 12);
}
