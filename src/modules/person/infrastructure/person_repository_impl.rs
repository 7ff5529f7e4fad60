use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::{CastCredit, CatalogClient, CrewCredit, Person};
use crate::modules::person::domain::PersonRepository;
use crate::shared::{errors::AppResult, utils::LogContext};

pub struct PersonRepositoryImpl {
    catalog: Arc<dyn CatalogClient>,
}

impl PersonRepositoryImpl {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl PersonRepository for PersonRepositoryImpl {
    async fn search_people(&self, query: &str) -> AppResult<Vec<Person>> {
        LogContext::search_operation(query, None);

        let people: Vec<Person> = self
            .catalog
            .search_people(query)
            .await?
            .into_iter()
            .map(|hit| hit.person)
            .collect();

        LogContext::search_operation(query, Some(people.len()));
        Ok(people)
    }

    async fn get_person_by_id(&self, id: u32) -> AppResult<Person> {
        self.catalog.get_person_by_id(id).await
    }

    async fn get_person_cast_credits(&self, person_id: u32) -> AppResult<Vec<CastCredit>> {
        self.catalog.get_person_cast_credits(person_id).await
    }

    async fn get_person_crew_credits(&self, person_id: u32) -> AppResult<Vec<CrewCredit>> {
        self.catalog.get_person_crew_credits(person_id).await
    }
}
