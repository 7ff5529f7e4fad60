use std::sync::Arc;

use crate::modules::favorites::domain::FavoriteShow;
use crate::shared::{
    errors::{AppError, AppResult},
    infrastructure::KeyValueStore,
    utils::LogContext,
};

/// Storage slot holding the favorites document
pub const FAVORITES_KEY: &str = "favorites";

/// Favorites persisted as one JSON array under [`FAVORITES_KEY`]
///
/// Reads degrade to an empty list when the slot cannot be read or parsed;
/// write failures are returned. Mutations are read-modify-write of the whole
/// document without locking, so callers must not run two mutations at once.
pub struct LocalFavoritesStore {
    storage: Arc<dyn KeyValueStore>,
}

impl LocalFavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Stored favorites in storage order; empty on any read problem
    pub async fn get_favorites(&self) -> Vec<FavoriteShow> {
        match self.load().await {
            Ok(favorites) => favorites,
            Err(e) => {
                LogContext::error_with_context(&e, "Error reading favorites from storage");
                Vec::new()
            }
        }
    }

    /// Overwrite the whole document with `favorites`
    pub async fn save_favorites(&self, favorites: &[FavoriteShow]) -> AppResult<()> {
        let json = serde_json::to_string(favorites).map_err(|e| {
            log::error!("Error encoding favorites: {}", e);
            AppError::PersistenceWriteError("Failed to save favorites".to_string())
        })?;

        self.storage
            .set_item(FAVORITES_KEY, &json)
            .await
            .map_err(|e| {
                LogContext::error_with_context(&e, "Error saving favorites to storage");
                AppError::PersistenceWriteError("Failed to save favorites".to_string())
            })?;

        LogContext::storage_operation("save", FAVORITES_KEY, Some(favorites.len()));
        Ok(())
    }

    /// Append `show` unless its id is already present; a duplicate issues no write
    pub async fn add_to_favorites(&self, show: FavoriteShow) -> AppResult<()> {
        let mut favorites = self.get_favorites().await;

        if favorites.iter().any(|fav| fav.id == show.id) {
            log::debug!("Show {} already in favorites", show.id);
            return Ok(());
        }

        favorites.push(show);
        self.save_favorites(&favorites).await
    }

    /// Drop the entry with `show_id`
    ///
    /// When no entry matches, nothing is written: the stored document stays
    /// byte-for-byte as it was, and a document that could not be read is not
    /// replaced by an empty list.
    pub async fn remove_from_favorites(&self, show_id: u32) -> AppResult<()> {
        let mut favorites = self.get_favorites().await;
        let original_len = favorites.len();

        favorites.retain(|fav| fav.id != show_id);

        if favorites.len() == original_len {
            log::debug!("Show {} not in favorites, nothing to remove", show_id);
            return Ok(());
        }

        self.save_favorites(&favorites).await
    }

    pub async fn is_favorite(&self, show_id: u32) -> bool {
        match self.load().await {
            Ok(favorites) => favorites.iter().any(|fav| fav.id == show_id),
            Err(e) => {
                LogContext::error_with_context(&e, "Error checking if favorite");
                false
            }
        }
    }

    async fn load(&self) -> AppResult<Vec<FavoriteShow>> {
        let raw = self
            .storage
            .get_item(FAVORITES_KEY)
            .await
            .map_err(|e| AppError::PersistenceReadError(e.message().to_string()))?;

        let favorites = match raw {
            Some(json) => serde_json::from_str::<Vec<FavoriteShow>>(&json).map_err(|e| {
                AppError::PersistenceReadError(format!("Corrupt favorites document: {}", e))
            })?,
            None => Vec::new(),
        };

        LogContext::storage_operation("load", FAVORITES_KEY, Some(favorites.len()));
        Ok(favorites)
    }
}
