use crate::models::{FavoriteItem, ListingKind};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Per-user saved-items store
///
/// Replaces the ambient global favorites list with an injected store: all
/// reads and writes go through this type, shared via application state.
/// In-memory only; contents do not survive a restart.
#[derive(Default)]
pub struct FavoritesStore {
    items: RwLock<HashMap<String, Vec<FavoriteItem>>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A user's saved items, in the order they were saved
    pub async fn list(&self, user_id: &str) -> Vec<FavoriteItem> {
        self.items
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Toggle one item on or off for a user
    ///
    /// Returns whether the item is now saved, plus the full updated list
    /// (the saved-items API contract returns the complete list on every
    /// write).
    pub async fn toggle(
        &self,
        user_id: &str,
        item_type: ListingKind,
        item_id: u32,
    ) -> (bool, Vec<FavoriteItem>) {
        let mut items = self.items.write().await;
        let list = items.entry(user_id.to_string()).or_default();

        let existing = list
            .iter()
            .position(|f| f.item_type == item_type && f.item_id == item_id);

        let favorited = match existing {
            Some(index) => {
                list.remove(index);
                false
            }
            None => {
                list.push(FavoriteItem {
                    item_type,
                    item_id,
                    saved_at: chrono::Utc::now(),
                });
                true
            }
        };

        (favorited, list.clone())
    }

    pub async fn is_favorite(&self, user_id: &str, item_type: ListingKind, item_id: u32) -> bool {
        self.items
            .read()
            .await
            .get(user_id)
            .map(|list| {
                list.iter()
                    .any(|f| f.item_type == item_type && f.item_id == item_id)
            })
            .unwrap_or(false)
    }

    /// Drop everything a user has saved
    pub async fn clear(&self, user_id: &str) {
        self.items.write().await.remove(user_id);
    }
}
