use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::modules::catalog::{Episode, Show};
use crate::modules::show::domain::ShowRepository;
use crate::shared::{application::Query, errors::AppResult, utils::TimedOperation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowDetails {
    pub show: Show,
    pub episodes: Vec<Episode>,
}

/// Show plus its episode list, fetched concurrently
///
/// Either both requests succeed or the whole call fails.
pub struct GetShowDetailsUseCase {
    show_repository: Arc<dyn ShowRepository>,
}

impl GetShowDetailsUseCase {
    pub fn new(show_repository: Arc<dyn ShowRepository>) -> Self {
        Self { show_repository }
    }
}

#[async_trait]
impl Query<u32, ShowDetails> for GetShowDetailsUseCase {
    async fn execute(&self, show_id: u32) -> AppResult<ShowDetails> {
        let timer = TimedOperation::new(&format!("show details {}", show_id));
        let (show, episodes) = futures::try_join!(
            self.show_repository.get_show_by_id(show_id),
            self.show_repository.get_show_episodes(show_id),
        )?;

        timer.finish_with_info(&format!("{} episodes", episodes.len()));

        Ok(ShowDetails { show, episodes })
    }
}
