use async_trait::async_trait;

use crate::modules::catalog::domain::{
    CastCredit, CrewCredit, Episode, Person, PersonSearchResult, Show, ShowSearchResult,
};
use crate::shared::errors::AppResult;

/// Port for the remote TV catalog
///
/// One method per catalog resource. Every failure (transport, timeout,
/// non-2xx, undecodable body) surfaces as `AppError::FetchError` naming the
/// operation; nothing is retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// One page of the full show index, pages start at 0
    async fn get_shows(&self, page: u32) -> AppResult<Vec<Show>>;

    async fn get_show_by_id(&self, id: u32) -> AppResult<Show>;

    /// Scored matches, most relevant first
    async fn search_shows(&self, query: &str) -> AppResult<Vec<ShowSearchResult>>;

    async fn get_show_episodes(&self, show_id: u32) -> AppResult<Vec<Episode>>;

    async fn get_episode_by_id(&self, episode_id: u32) -> AppResult<Episode>;

    async fn search_people(&self, query: &str) -> AppResult<Vec<PersonSearchResult>>;

    async fn get_person_by_id(&self, id: u32) -> AppResult<Person>;

    /// Acting credits with the show embedded
    async fn get_person_cast_credits(&self, person_id: u32) -> AppResult<Vec<CastCredit>>;

    /// Crew credits with the show embedded
    async fn get_person_crew_credits(&self, person_id: u32) -> AppResult<Vec<CrewCredit>>;
}
