use crate::models::{
    ErrorResponse, ListingKind, ReviewsResponse, RsvpRequest, RsvpResponse, RsvpStatus,
    SavedItemsResponse, SubmitReviewRequest, SubmitReviewResponse, ToggleFavoriteRequest,
    ToggleFavoriteResponse,
};
use crate::routes::listings::AppState;
use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;
use validator::Validate;

/// Configure the engagement routes (favorites, reviews, RSVPs)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/saved-items", web::get().to(get_saved_items))
        .route("/saved-items", web::post().to(toggle_saved_item))
        .route("/reviews", web::get().to(get_reviews))
        .route("/reviews", web::post().to(submit_review))
        .route("/events/{id}/rsvp", web::get().to(get_rsvp))
        .route("/events/{id}/rsvp", web::post().to(set_rsvp));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn not_found(message: String) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "not_found".to_string(),
        message,
        status_code: 404,
    })
}

/// Get a user's saved items
///
/// GET /api/v1/saved-items?userId={userId}
async fn get_saved_items(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let Some(user_id) = query.get("userId") else {
        return bad_request(
            "missing_user_id",
            "userId query parameter is required".to_string(),
        );
    };

    let items = state.favorites.list(user_id).await;
    HttpResponse::Ok().json(SavedItemsResponse {
        user_id: user_id.clone(),
        count: items.len(),
        items,
    })
}

/// Toggle a saved item on or off
///
/// POST /api/v1/saved-items
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "itemType": "attraction|event|restaurant",
///   "itemId": 1
/// }
/// ```
async fn toggle_saved_item(
    state: web::Data<AppState>,
    req: web::Json<ToggleFavoriteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for toggle_saved_item: {:?}", errors);
        return bad_request("validation_failed", errors.to_string());
    }

    let Some(item_type) = ListingKind::parse(&req.item_type) else {
        return bad_request(
            "invalid_item_type",
            "itemType must be one of: attraction, event, restaurant".to_string(),
        );
    };

    if let Err(e) = state.catalog.get(item_type, req.item_id) {
        return not_found(e.to_string());
    }

    let (favorited, items) = state
        .favorites
        .toggle(&req.user_id, item_type, req.item_id)
        .await;

    tracing::debug!(
        "User {} {} {} {}",
        req.user_id,
        if favorited { "saved" } else { "removed" },
        item_type,
        req.item_id
    );

    HttpResponse::Ok().json(ToggleFavoriteResponse { favorited, items })
}

/// Get reviews for a listing
///
/// GET /api/v1/reviews?itemType={type}&itemId={id}
async fn get_reviews(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let item_type = query.get("itemType").and_then(|t| ListingKind::parse(t));
    let item_id = query.get("itemId").and_then(|i| i.parse::<u32>().ok());

    let (Some(item_type), Some(item_id)) = (item_type, item_id) else {
        return bad_request(
            "invalid_query",
            "itemType and itemId query parameters are required".to_string(),
        );
    };

    let items = state.reviews.for_listing(item_type, item_id).await;
    let average_rating = state.reviews.average_rating(item_type, item_id).await;

    HttpResponse::Ok().json(ReviewsResponse {
        count: items.len(),
        average_rating,
        items,
    })
}

/// Submit a review for a listing
///
/// POST /api/v1/reviews
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "itemType": "restaurant",
///   "itemId": 3,
///   "rating": 5,
///   "comment": "string"
/// }
/// ```
async fn submit_review(
    state: web::Data<AppState>,
    req: web::Json<SubmitReviewRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for submit_review: {:?}", errors);
        return bad_request("validation_failed", errors.to_string());
    }

    let Some(item_type) = ListingKind::parse(&req.item_type) else {
        return bad_request(
            "invalid_item_type",
            "itemType must be one of: attraction, event, restaurant".to_string(),
        );
    };

    if let Err(e) = state.catalog.get(item_type, req.item_id) {
        return not_found(e.to_string());
    }

    let review = state
        .reviews
        .submit(item_type, req.item_id, &req.user_id, req.rating, &req.comment)
        .await;

    tracing::debug!(
        "User {} reviewed {} {} with rating {}",
        req.user_id,
        item_type,
        req.item_id,
        req.rating
    );

    HttpResponse::Ok().json(SubmitReviewResponse {
        success: true,
        review,
    })
}

/// Get RSVP counts for an event, plus the requesting user's RSVP if any
///
/// GET /api/v1/events/{id}/rsvp?userId={userId}
async fn get_rsvp(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let event_id = path.into_inner();

    if let Err(e) = state.catalog.get(ListingKind::Event, event_id) {
        return not_found(e.to_string());
    }

    let rsvp = match query.get("userId") {
        Some(user_id) => state.rsvps.get(event_id, user_id).await,
        None => None,
    };
    let counts = state.rsvps.counts(event_id).await;

    HttpResponse::Ok().json(RsvpResponse {
        success: true,
        rsvp,
        counts,
    })
}

/// Set or cancel an RSVP for an event
///
/// POST /api/v1/events/{id}/rsvp
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "status": "going|interested|declined|cancel"
/// }
/// ```
async fn set_rsvp(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    req: web::Json<RsvpRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("validation_failed", errors.to_string());
    }

    let event_id = path.into_inner();
    if let Err(e) = state.catalog.get(ListingKind::Event, event_id) {
        return not_found(e.to_string());
    }

    if req.status.eq_ignore_ascii_case("cancel") {
        let cancelled = state.rsvps.cancel(event_id, &req.user_id).await;
        let counts = state.rsvps.counts(event_id).await;
        return HttpResponse::Ok().json(RsvpResponse {
            success: cancelled,
            rsvp: None,
            counts,
        });
    }

    let Some(status) = RsvpStatus::parse(&req.status) else {
        return bad_request(
            "invalid_status",
            "status must be one of: going, interested, declined, cancel".to_string(),
        );
    };

    let rsvp = state.rsvps.set(event_id, &req.user_id, status).await;
    let counts = state.rsvps.counts(event_id).await;

    tracing::debug!("User {} RSVP'd {:?} to event {}", req.user_id, status, event_id);

    HttpResponse::Ok().json(RsvpResponse {
        success: true,
        rsvp: Some(rsvp),
        counts,
    })
}
