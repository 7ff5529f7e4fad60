use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::Show;
use crate::modules::show::domain::ShowRepository;
use crate::shared::{
    application::{PaginatedResponse, Query},
    errors::AppResult,
};

/// Lists one page of the show index
pub struct GetShowsUseCase {
    show_repository: Arc<dyn ShowRepository>,
}

impl GetShowsUseCase {
    pub fn new(show_repository: Arc<dyn ShowRepository>) -> Self {
        Self { show_repository }
    }
}

#[async_trait]
impl Query<u32, PaginatedResponse<Show>> for GetShowsUseCase {
    async fn execute(&self, page: u32) -> AppResult<PaginatedResponse<Show>> {
        self.show_repository.get_shows(page).await
    }
}
