use async_trait::async_trait;

use crate::modules::catalog::{CastCredit, CrewCredit, Person};
use crate::shared::errors::AppResult;

/// Domain-facing access to people and their credits
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Matching people, most relevant first
    async fn search_people(&self, query: &str) -> AppResult<Vec<Person>>;

    async fn get_person_by_id(&self, id: u32) -> AppResult<Person>;

    async fn get_person_cast_credits(&self, person_id: u32) -> AppResult<Vec<CastCredit>>;

    async fn get_person_crew_credits(&self, person_id: u32) -> AppResult<Vec<CrewCredit>>;
}
