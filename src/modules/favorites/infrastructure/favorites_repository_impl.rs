use async_trait::async_trait;
use std::sync::Arc;

use super::local_favorites_store::LocalFavoritesStore;
use crate::modules::favorites::domain::{FavoriteShow, FavoritesRepository};
use crate::shared::{errors::AppResult, utils::text::locale_compare};

pub struct FavoritesRepositoryImpl {
    store: Arc<LocalFavoritesStore>,
}

impl FavoritesRepositoryImpl {
    pub fn new(store: Arc<LocalFavoritesStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FavoritesRepository for FavoritesRepositoryImpl {
    async fn get_favorites(&self) -> AppResult<Vec<FavoriteShow>> {
        let mut favorites = self.store.get_favorites().await;
        // Stable: equal names keep storage order
        favorites.sort_by(|a, b| locale_compare(&a.name, &b.name));
        Ok(favorites)
    }

    async fn add_to_favorites(&self, show: FavoriteShow) -> AppResult<()> {
        log::info!("Adding show {} ('{}') to favorites", show.id, show.name);
        self.store.add_to_favorites(show).await
    }

    async fn remove_from_favorites(&self, show_id: u32) -> AppResult<()> {
        log::info!("Removing show {} from favorites", show_id);
        self.store.remove_from_favorites(show_id).await
    }

    async fn is_favorite(&self, show_id: u32) -> bool {
        self.store.is_favorite(show_id).await
    }
}
