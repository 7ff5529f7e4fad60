use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::{CatalogClient, Episode, Show};
use crate::modules::show::domain::ShowRepository;
use crate::shared::{
    application::{PaginatedResponse, DEFAULT_PAGE_SIZE},
    errors::AppResult,
    utils::LogContext,
};

pub struct ShowRepositoryImpl {
    catalog: Arc<dyn CatalogClient>,
    page_size: usize,
}

impl ShowRepositoryImpl {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self::with_page_size(catalog, DEFAULT_PAGE_SIZE)
    }

    /// `page_size` is the item count of a full catalog page
    pub fn with_page_size(catalog: Arc<dyn CatalogClient>, page_size: usize) -> Self {
        Self { catalog, page_size }
    }
}

#[async_trait]
impl ShowRepository for ShowRepositoryImpl {
    async fn get_shows(&self, page: u32) -> AppResult<PaginatedResponse<Show>> {
        let shows = self.catalog.get_shows(page).await?;
        Ok(PaginatedResponse::from_page(shows, page, self.page_size))
    }

    async fn get_show_by_id(&self, id: u32) -> AppResult<Show> {
        self.catalog.get_show_by_id(id).await
    }

    async fn search_shows(&self, query: &str) -> AppResult<Vec<Show>> {
        LogContext::search_operation(query, None);

        let shows: Vec<Show> = self
            .catalog
            .search_shows(query)
            .await?
            .into_iter()
            .map(|hit| hit.show)
            .collect();

        LogContext::search_operation(query, Some(shows.len()));
        Ok(shows)
    }

    async fn get_show_episodes(&self, show_id: u32) -> AppResult<Vec<Episode>> {
        self.catalog.get_show_episodes(show_id).await
    }

    async fn get_episode_by_id(&self, episode_id: u32) -> AppResult<Episode> {
        self.catalog.get_episode_by_id(episode_id).await
    }
}
