use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::modules::catalog::{CastCredit, CrewCredit, Person};
use crate::modules::person::domain::PersonRepository;
use crate::shared::{application::Query, errors::AppResult, utils::TimedOperation};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    pub person: Person,
    pub cast_credits: Vec<CastCredit>,
    pub crew_credits: Vec<CrewCredit>,
}

/// Person with cast and crew credits, fetched concurrently; all or nothing
pub struct GetPersonDetailsUseCase {
    person_repository: Arc<dyn PersonRepository>,
}

impl GetPersonDetailsUseCase {
    pub fn new(person_repository: Arc<dyn PersonRepository>) -> Self {
        Self { person_repository }
    }
}

#[async_trait]
impl Query<u32, PersonDetails> for GetPersonDetailsUseCase {
    async fn execute(&self, person_id: u32) -> AppResult<PersonDetails> {
        let timer = TimedOperation::new(&format!("person details {}", person_id));
        let (person, cast_credits, crew_credits) = futures::try_join!(
            self.person_repository.get_person_by_id(person_id),
            self.person_repository.get_person_cast_credits(person_id),
            self.person_repository.get_person_crew_credits(person_id),
        )?;
        timer.finish();

        Ok(PersonDetails {
            person,
            cast_credits,
            crew_credits,
        })
    }
}
