use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use log::{debug, error};

use super::endpoints;
use crate::modules::catalog::domain::{
    CastCredit, CrewCredit, Episode, Person, PersonSearchResult, Show, ShowSearchResult,
};
use crate::modules::catalog::infrastructure::CommonHttpHandler;
use crate::modules::catalog::traits::CatalogClient;
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppError, AppResult};

const SERVICE_NAME: &str = "TVmaze";

/// Stateless HTTP client for the TVmaze catalog
pub struct TvMazeClient {
    client: Client,
    base_url: String,
}

impl TvMazeClient {
    pub fn new() -> AppResult<Self> {
        Self::with_config(&CatalogConfig::default())
    }

    pub fn with_config(config: &CatalogConfig) -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(config.timeout, &config.user_agent)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode it; any failure becomes `FetchError(failure_message)`
    async fn fetch<T: DeserializeOwned>(&self, path: &str, failure_message: &str) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} GET {}", SERVICE_NAME, path);

        CommonHttpHandler::get_json::<T>(&self.client, &url, SERVICE_NAME)
            .await
            .map_err(|e| {
                error!("{}: {}", failure_message, e);
                AppError::FetchError(failure_message.to_string())
            })
    }
}

#[async_trait]
impl CatalogClient for TvMazeClient {
    async fn get_shows(&self, page: u32) -> AppResult<Vec<Show>> {
        self.fetch(&endpoints::shows_page(page), "Failed to fetch shows")
            .await
    }

    async fn get_show_by_id(&self, id: u32) -> AppResult<Show> {
        self.fetch(&endpoints::show(id), "Failed to fetch show details")
            .await
    }

    async fn search_shows(&self, query: &str) -> AppResult<Vec<ShowSearchResult>> {
        self.fetch(&endpoints::search_shows(query), "Failed to search shows")
            .await
    }

    async fn get_show_episodes(&self, show_id: u32) -> AppResult<Vec<Episode>> {
        self.fetch(
            &endpoints::show_episodes(show_id),
            "Failed to fetch show episodes",
        )
        .await
    }

    async fn get_episode_by_id(&self, episode_id: u32) -> AppResult<Episode> {
        self.fetch(
            &endpoints::episode(episode_id),
            "Failed to fetch episode details",
        )
        .await
    }

    async fn search_people(&self, query: &str) -> AppResult<Vec<PersonSearchResult>> {
        self.fetch(&endpoints::search_people(query), "Failed to search people")
            .await
    }

    async fn get_person_by_id(&self, id: u32) -> AppResult<Person> {
        self.fetch(&endpoints::person(id), "Failed to fetch person details")
            .await
    }

    async fn get_person_cast_credits(&self, person_id: u32) -> AppResult<Vec<CastCredit>> {
        self.fetch(
            &endpoints::person_cast_credits(person_id),
            "Failed to fetch person cast credits",
        )
        .await
    }

    async fn get_person_crew_credits(&self, person_id: u32) -> AppResult<Vec<CrewCredit>> {
        self.fetch(
            &endpoints::person_crew_credits(person_id),
            "Failed to fetch person crew credits",
        )
        .await
    }
}
