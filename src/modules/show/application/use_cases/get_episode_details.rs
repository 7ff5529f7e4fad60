use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::Episode;
use crate::modules::show::domain::ShowRepository;
use crate::shared::{application::Query, errors::AppResult};

pub struct GetEpisodeDetailsUseCase {
    show_repository: Arc<dyn ShowRepository>,
}

impl GetEpisodeDetailsUseCase {
    pub fn new(show_repository: Arc<dyn ShowRepository>) -> Self {
        Self { show_repository }
    }
}

#[async_trait]
impl Query<u32, Episode> for GetEpisodeDetailsUseCase {
    async fn execute(&self, episode_id: u32) -> AppResult<Episode> {
        self.show_repository.get_episode_by_id(episode_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::show::application::use_cases::test_support::episode;
    use crate::modules::show::domain::repository::MockShowRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_fetches_single_episode() {
        let mut repo = MockShowRepository::new();
        repo.expect_get_episode_by_id()
            .with(eq(42))
            .times(1)
            .returning(|id| Ok(episode(id, 2, 5)));

        let use_case = GetEpisodeDetailsUseCase::new(Arc::new(repo));
        let result = use_case.execute(42).await.unwrap();

        assert_eq!(result.id, 42);
        assert_eq!(result.code(), "S02E05");
    }
}
