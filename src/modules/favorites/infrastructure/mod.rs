pub mod favorites_repository_impl;
pub mod local_favorites_store;

pub use favorites_repository_impl::FavoritesRepositoryImpl;
pub use local_favorites_store::{LocalFavoritesStore, FAVORITES_KEY};
