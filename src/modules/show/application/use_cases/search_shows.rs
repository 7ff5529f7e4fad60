use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::Show;
use crate::modules::show::domain::ShowRepository;
use crate::shared::{application::Query, errors::AppResult};

/// Free-text show search; a blank query yields no results without a request
pub struct SearchShowsUseCase {
    show_repository: Arc<dyn ShowRepository>,
}

impl SearchShowsUseCase {
    pub fn new(show_repository: Arc<dyn ShowRepository>) -> Self {
        Self { show_repository }
    }
}

#[async_trait]
impl Query<String, Vec<Show>> for SearchShowsUseCase {
    async fn execute(&self, query: String) -> AppResult<Vec<Show>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.show_repository.search_shows(&query).await
    }
}
