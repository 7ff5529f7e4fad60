use std::sync::Arc;

use crate::modules::{
    catalog::{CatalogClient, TvMazeClient},
    favorites::{
        AddToFavoritesUseCase, FavoritesRepository, FavoritesRepositoryImpl, GetFavoritesUseCase,
        IsFavoriteUseCase, LocalFavoritesStore, RemoveFromFavoritesUseCase, ToggleFavoriteUseCase,
    },
    person::{GetPersonDetailsUseCase, PersonRepository, PersonRepositoryImpl, SearchPeopleUseCase},
    show::{
        GetEpisodeDetailsUseCase, GetShowDetailsUseCase, GetShowsUseCase, SearchShowsUseCase,
        ShowRepository, ShowRepositoryImpl,
    },
};
use crate::shared::{
    config::AppConfig,
    errors::AppResult,
    infrastructure::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore},
};

/// Composition root
///
/// Builds one instance of every collaborator at startup and hands them out
/// by `Arc`. Consumers receive the use cases they need from here instead of
/// constructing their own.
pub struct AppContainer {
    pub config: AppConfig,

    pub catalog: Arc<dyn CatalogClient>,
    pub storage: Arc<dyn KeyValueStore>,

    pub show_repository: Arc<dyn ShowRepository>,
    pub person_repository: Arc<dyn PersonRepository>,
    pub favorites_repository: Arc<dyn FavoritesRepository>,

    pub get_shows: Arc<GetShowsUseCase>,
    pub search_shows: Arc<SearchShowsUseCase>,
    pub get_show_details: Arc<GetShowDetailsUseCase>,
    pub get_episode_details: Arc<GetEpisodeDetailsUseCase>,
    pub search_people: Arc<SearchPeopleUseCase>,
    pub get_person_details: Arc<GetPersonDetailsUseCase>,
    pub get_favorites: Arc<GetFavoritesUseCase>,
    pub add_to_favorites: Arc<AddToFavoritesUseCase>,
    pub remove_from_favorites: Arc<RemoveFromFavoritesUseCase>,
    pub is_favorite: Arc<IsFavoriteUseCase>,
    pub toggle_favorite: Arc<ToggleFavoriteUseCase>,
}

impl AppContainer {
    /// Wire the TVmaze client and the store selected by `config.storage`
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let catalog: Arc<dyn CatalogClient> = Arc::new(TvMazeClient::with_config(&config.catalog)?);

        let storage: Arc<dyn KeyValueStore> = match &config.storage.data_dir {
            Some(dir) => {
                log::info!("Persisting favorites under {}", dir.display());
                Arc::new(FileKeyValueStore::new(dir.clone()))
            }
            None => {
                log::warn!("No data directory configured, favorites will not survive restart");
                Arc::new(InMemoryKeyValueStore::new())
            }
        };

        Ok(Self::with_parts(catalog, storage, config))
    }

    /// Load configuration from the environment and wire everything
    pub fn from_env() -> AppResult<Self> {
        Self::new(AppConfig::from_env()?)
    }

    /// Wire the layers on top of caller-supplied data sources
    pub fn with_parts(
        catalog: Arc<dyn CatalogClient>,
        storage: Arc<dyn KeyValueStore>,
        config: AppConfig,
    ) -> Self {
        let show_repository: Arc<dyn ShowRepository> = Arc::new(ShowRepositoryImpl::with_page_size(
            catalog.clone(),
            config.catalog.page_size,
        ));
        let person_repository: Arc<dyn PersonRepository> =
            Arc::new(PersonRepositoryImpl::new(catalog.clone()));
        let favorites_store = Arc::new(LocalFavoritesStore::new(storage.clone()));
        let favorites_repository: Arc<dyn FavoritesRepository> =
            Arc::new(FavoritesRepositoryImpl::new(favorites_store));

        Self {
            get_shows: Arc::new(GetShowsUseCase::new(show_repository.clone())),
            search_shows: Arc::new(SearchShowsUseCase::new(show_repository.clone())),
            get_show_details: Arc::new(GetShowDetailsUseCase::new(show_repository.clone())),
            get_episode_details: Arc::new(GetEpisodeDetailsUseCase::new(show_repository.clone())),
            search_people: Arc::new(SearchPeopleUseCase::new(person_repository.clone())),
            get_person_details: Arc::new(GetPersonDetailsUseCase::new(person_repository.clone())),
            get_favorites: Arc::new(GetFavoritesUseCase::new(favorites_repository.clone())),
            add_to_favorites: Arc::new(AddToFavoritesUseCase::new(favorites_repository.clone())),
            remove_from_favorites: Arc::new(RemoveFromFavoritesUseCase::new(
                favorites_repository.clone(),
            )),
            is_favorite: Arc::new(IsFavoriteUseCase::new(favorites_repository.clone())),
            toggle_favorite: Arc::new(ToggleFavoriteUseCase::new(favorites_repository.clone())),
            config,
            catalog,
            storage,
            show_repository,
            person_repository,
            favorites_repository,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::traits::MockCatalogClient;
    use crate::modules::favorites::FavoriteShow;
    use crate::shared::application::{Query, UseCase};

    #[tokio::test]
    async fn test_use_cases_share_one_store() {
        let container = AppContainer::with_parts(
            Arc::new(MockCatalogClient::new()),
            Arc::new(InMemoryKeyValueStore::new()),
            AppConfig::default(),
        );

        container
            .add_to_favorites
            .execute(FavoriteShow::new(1, "Lost", None))
            .await
            .unwrap();

        assert!(container.is_favorite.execute(1).await.unwrap());
        assert_eq!(container.get_favorites.execute(()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_page_size_flows_from_config() {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_get_shows().returning(|_| Ok(Vec::new()));

        let mut config = AppConfig::default();
        config.catalog.page_size = 0;

        let container = AppContainer::with_parts(
            Arc::new(catalog),
            Arc::new(InMemoryKeyValueStore::new()),
            config,
        );

        // An empty page equals a zero-sized full page
        assert!(container.get_shows.execute(0).await.unwrap().has_next_page);
    }

    #[test]
    fn test_new_with_default_config() {
        let container = AppContainer::new(AppConfig::default()).unwrap();
        assert_eq!(container.config.catalog.page_size, 250);
    }
}
