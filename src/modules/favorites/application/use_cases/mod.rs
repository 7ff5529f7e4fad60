pub mod favorites;

pub use favorites::{
    AddToFavoritesUseCase, GetFavoritesUseCase, IsFavoriteUseCase, RemoveFromFavoritesUseCase,
    ToggleFavoriteUseCase,
};
