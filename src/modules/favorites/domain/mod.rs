pub mod entities;
pub mod repository;

pub use entities::FavoriteShow;
pub use repository::FavoritesRepository;
