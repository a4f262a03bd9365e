use crate::models::{ListingKind, Review, Rsvp, RsvpCounts, RsvpStatus};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory review store keyed by listing
#[derive(Default)]
pub struct ReviewStore {
    reviews: RwLock<HashMap<(ListingKind, u32), Vec<Review>>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a review and return it with its generated id
    pub async fn submit(
        &self,
        item_type: ListingKind,
        item_id: u32,
        user_id: &str,
        rating: u8,
        comment: &str,
    ) -> Review {
        let review = Review {
            id: uuid::Uuid::new_v4().to_string(),
            item_type,
            item_id,
            user_id: user_id.to_string(),
            rating,
            comment: comment.to_string(),
            created_at: chrono::Utc::now(),
        };

        self.reviews
            .write()
            .await
            .entry((item_type, item_id))
            .or_default()
            .push(review.clone());

        review
    }

    /// Reviews for one listing, newest first
    pub async fn for_listing(&self, item_type: ListingKind, item_id: u32) -> Vec<Review> {
        let mut reviews = self
            .reviews
            .read()
            .await
            .get(&(item_type, item_id))
            .cloned()
            .unwrap_or_default();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews
    }

    /// Mean review rating, None when the listing has no reviews
    pub async fn average_rating(&self, item_type: ListingKind, item_id: u32) -> Option<f64> {
        let reviews = self.reviews.read().await;
        let list = reviews.get(&(item_type, item_id))?;
        if list.is_empty() {
            return None;
        }
        let sum: u32 = list.iter().map(|r| r.rating as u32).sum();
        Some(sum as f64 / list.len() as f64)
    }
}

/// In-memory RSVP store keyed by event
///
/// One RSVP per user per event; setting a new status replaces the old one.
#[derive(Default)]
pub struct RsvpStore {
    rsvps: RwLock<HashMap<u32, HashMap<String, Rsvp>>>,
}

impl RsvpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace a user's RSVP for an event
    pub async fn set(&self, event_id: u32, user_id: &str, status: RsvpStatus) -> Rsvp {
        let rsvp = Rsvp {
            event_id,
            user_id: user_id.to_string(),
            status,
            created_at: chrono::Utc::now(),
        };

        self.rsvps
            .write()
            .await
            .entry(event_id)
            .or_default()
            .insert(user_id.to_string(), rsvp.clone());

        rsvp
    }

    /// Withdraw a user's RSVP; false when there was none
    pub async fn cancel(&self, event_id: u32, user_id: &str) -> bool {
        self.rsvps
            .write()
            .await
            .get_mut(&event_id)
            .map(|users| users.remove(user_id).is_some())
            .unwrap_or(false)
    }

    pub async fn get(&self, event_id: u32, user_id: &str) -> Option<Rsvp> {
        self.rsvps
            .read()
            .await
            .get(&event_id)
            .and_then(|users| users.get(user_id).cloned())
    }

    /// Tally RSVPs for an event by status
    pub async fn counts(&self, event_id: u32) -> RsvpCounts {
        let rsvps = self.rsvps.read().await;
        let mut counts = RsvpCounts::default();
        if let Some(users) = rsvps.get(&event_id) {
            for rsvp in users.values() {
                match rsvp.status {
                    RsvpStatus::Going => counts.going += 1,
                    RsvpStatus::Interested => counts.interested += 1,
                    RsvpStatus::Declined => counts.declined += 1,
                }
            }
        }
        counts
    }
}
