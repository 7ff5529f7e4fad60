pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{GetPersonDetailsUseCase, PersonDetails, SearchPeopleUseCase};
pub use domain::PersonRepository;
pub use infrastructure::PersonRepositoryImpl;
