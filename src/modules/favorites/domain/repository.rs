use async_trait::async_trait;

use super::entities::FavoriteShow;
use crate::shared::errors::AppResult;

/// Domain-facing access to the favorites list
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// All favorites ordered alphabetically by name
    async fn get_favorites(&self) -> AppResult<Vec<FavoriteShow>>;

    /// No-op when a favorite with the same id exists
    async fn add_to_favorites(&self, show: FavoriteShow) -> AppResult<()>;

    /// No-op when no favorite has this id
    async fn remove_from_favorites(&self, show_id: u32) -> AppResult<()>;

    /// Membership test; storage problems read as `false`
    async fn is_favorite(&self, show_id: u32) -> bool;
}
