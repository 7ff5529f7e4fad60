use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::Person;
use crate::modules::person::domain::PersonRepository;
use crate::shared::{application::Query, errors::AppResult};

/// Free-text people search; a blank query yields no results without a request
pub struct SearchPeopleUseCase {
    person_repository: Arc<dyn PersonRepository>,
}

impl SearchPeopleUseCase {
    pub fn new(person_repository: Arc<dyn PersonRepository>) -> Self {
        Self { person_repository }
    }
}

#[async_trait]
impl Query<String, Vec<Person>> for SearchPeopleUseCase {
    async fn execute(&self, query: String) -> AppResult<Vec<Person>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.person_repository.search_people(&query).await
    }
}
