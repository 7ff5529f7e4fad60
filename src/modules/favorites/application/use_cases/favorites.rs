use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::favorites::domain::{FavoriteShow, FavoritesRepository};
use crate::shared::{
    application::{Query, UseCase},
    errors::AppResult,
};

/// Favorites ordered by name
pub struct GetFavoritesUseCase {
    favorites_repository: Arc<dyn FavoritesRepository>,
}

impl GetFavoritesUseCase {
    pub fn new(favorites_repository: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            favorites_repository,
        }
    }
}

#[async_trait]
impl Query<(), Vec<FavoriteShow>> for GetFavoritesUseCase {
    async fn execute(&self, _query: ()) -> AppResult<Vec<FavoriteShow>> {
        self.favorites_repository.get_favorites().await
    }
}

pub struct AddToFavoritesUseCase {
    favorites_repository: Arc<dyn FavoritesRepository>,
}

impl AddToFavoritesUseCase {
    pub fn new(favorites_repository: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            favorites_repository,
        }
    }
}

#[async_trait]
impl UseCase<FavoriteShow, ()> for AddToFavoritesUseCase {
    async fn execute(&self, show: FavoriteShow) -> AppResult<()> {
        self.favorites_repository.add_to_favorites(show).await
    }
}

pub struct RemoveFromFavoritesUseCase {
    favorites_repository: Arc<dyn FavoritesRepository>,
}

impl RemoveFromFavoritesUseCase {
    pub fn new(favorites_repository: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            favorites_repository,
        }
    }
}

#[async_trait]
impl UseCase<u32, ()> for RemoveFromFavoritesUseCase {
    async fn execute(&self, show_id: u32) -> AppResult<()> {
        self.favorites_repository.remove_from_favorites(show_id).await
    }
}

pub struct IsFavoriteUseCase {
    favorites_repository: Arc<dyn FavoritesRepository>,
}

impl IsFavoriteUseCase {
    pub fn new(favorites_repository: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            favorites_repository,
        }
    }
}

#[async_trait]
impl Query<u32, bool> for IsFavoriteUseCase {
    async fn execute(&self, show_id: u32) -> AppResult<bool> {
        Ok(self.favorites_repository.is_favorite(show_id).await)
    }
}

/// Flip membership of a show; returns whether it is a favorite afterwards
pub struct ToggleFavoriteUseCase {
    favorites_repository: Arc<dyn FavoritesRepository>,
}

impl ToggleFavoriteUseCase {
    pub fn new(favorites_repository: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            favorites_repository,
        }
    }
}

#[async_trait]
impl UseCase<FavoriteShow, bool> for ToggleFavoriteUseCase {
    async fn execute(&self, show: FavoriteShow) -> AppResult<bool> {
        if self.favorites_repository.is_favorite(show.id).await {
            self.favorites_repository
                .remove_from_favorites(show.id)
                .await?;
            Ok(false)
        } else {
            self.favorites_repository.add_to_favorites(show).await?;
            Ok(true)
        }
    }
}
