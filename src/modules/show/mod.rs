pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    GetEpisodeDetailsUseCase, GetShowDetailsUseCase, GetShowsUseCase, SearchShowsUseCase,
    ShowDetails,
};
pub use domain::ShowRepository;
pub use infrastructure::ShowRepositoryImpl;
