use crate::core::QueryEngine;
use crate::models::{
    ErrorResponse, HealthResponse, ListingDetailResponse, ListingKind, ListingQuery,
    SearchResponse,
};
use crate::services::{CatalogStore, FavoritesStore, ReviewStore, RsvpStore};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub favorites: Arc<FavoritesStore>,
    pub reviews: Arc<ReviewStore>,
    pub rsvps: Arc<RsvpStore>,
    pub engine: QueryEngine,
}

/// Configure the listing routes
///
/// The `/filters` routes must be registered before the `/{id}` routes so
/// actix does not try to parse "filters" as an id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/search", web::get().to(search))
        .route("/attractions", web::get().to(list_attractions))
        .route("/attractions/filters", web::get().to(attraction_filters))
        .route("/attractions/{id}", web::get().to(get_attraction))
        .route("/events", web::get().to(list_events))
        .route("/events/filters", web::get().to(event_filters))
        .route("/events/{id}", web::get().to(get_event))
        .route("/restaurants", web::get().to(list_restaurants))
        .route("/restaurants/filters", web::get().to(restaurant_filters))
        .route("/restaurants/{id}", web::get().to(get_restaurant));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Listing query endpoint
///
/// GET /api/v1/{domain}?search=&category=&sort=&page=&limit=&featured=&price=&startDate=&endDate=
///
/// Every parameter is optional; malformed values fall back to defaults
/// rather than failing the request.
fn run_listing_query(state: &AppState, kind: ListingKind, raw: &ListingQuery) -> HttpResponse {
    let page = state
        .engine
        .run(state.catalog.listings(kind), raw, kind.default_sort());

    tracing::debug!(
        "{} query returned {} of {} listings (page {}/{})",
        kind,
        page.items.len(),
        page.total_count,
        page.current_page,
        page.total_pages
    );

    HttpResponse::Ok().json(page)
}

async fn list_attractions(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> impl Responder {
    run_listing_query(&state, ListingKind::Attraction, &query)
}

async fn list_events(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> impl Responder {
    run_listing_query(&state, ListingKind::Event, &query)
}

async fn list_restaurants(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> impl Responder {
    run_listing_query(&state, ListingKind::Restaurant, &query)
}

/// Listing detail endpoint
///
/// GET /api/v1/{domain}/{id}
///
/// Returns the listing together with its reviews and their mean rating.
async fn listing_detail(state: &AppState, kind: ListingKind, id: u32) -> HttpResponse {
    match state.catalog.get(kind, id) {
        Ok(listing) => {
            let reviews = state.reviews.for_listing(kind, id).await;
            let average_rating = state.reviews.average_rating(kind, id).await;
            HttpResponse::Ok().json(ListingDetailResponse {
                listing: listing.clone(),
                reviews,
                average_rating,
            })
        }
        Err(e) => {
            tracing::debug!("Detail lookup failed: {}", e);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "not_found".to_string(),
                message: e.to_string(),
                status_code: 404,
            })
        }
    }
}

async fn get_attraction(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    listing_detail(&state, ListingKind::Attraction, path.into_inner()).await
}

async fn get_event(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    listing_detail(&state, ListingKind::Event, path.into_inner()).await
}

async fn get_restaurant(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    listing_detail(&state, ListingKind::Restaurant, path.into_inner()).await
}

/// Filter-control metadata for a domain's listing page
async fn attraction_filters(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.filter_specs(ListingKind::Attraction))
}

async fn event_filters(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.filter_specs(ListingKind::Event))
}

async fn restaurant_filters(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.filter_specs(ListingKind::Restaurant))
}

/// Cross-domain search endpoint
///
/// GET /api/v1/search?q=term
async fn search(state: web::Data<AppState>, query: web::Query<ListingQuery>) -> impl Responder {
    let Some(term) = query.search_term() else {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "missing_query".to_string(),
            message: "q query parameter is required".to_string(),
            status_code: 400,
        });
    };

    let results: Vec<_> = state.catalog.search(term).into_iter().cloned().collect();
    tracing::debug!("Search '{}' matched {} listings", term, results.len());

    HttpResponse::Ok().json(SearchResponse {
        query: term.to_string(),
        count: results.len(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
