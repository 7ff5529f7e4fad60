use async_trait::async_trait;

use crate::modules::catalog::{Episode, Show};
use crate::shared::{application::PaginatedResponse, errors::AppResult};

/// Domain-facing access to shows and episodes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShowRepository: Send + Sync {
    async fn get_shows(&self, page: u32) -> AppResult<PaginatedResponse<Show>>;

    async fn get_show_by_id(&self, id: u32) -> AppResult<Show>;

    /// Matching shows, most relevant first
    async fn search_shows(&self, query: &str) -> AppResult<Vec<Show>>;

    async fn get_show_episodes(&self, show_id: u32) -> AppResult<Vec<Episode>>;

    async fn get_episode_by_id(&self, episode_id: u32) -> AppResult<Episode>;
}
