pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    AddToFavoritesUseCase, GetFavoritesUseCase, IsFavoriteUseCase, RemoveFromFavoritesUseCase,
    ToggleFavoriteUseCase,
};
pub use domain::{FavoriteShow, FavoritesRepository};
pub use infrastructure::{FavoritesRepositoryImpl, LocalFavoritesStore, FAVORITES_KEY};
