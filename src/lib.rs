pub mod container;
pub mod modules;
pub mod shared;

pub use container::AppContainer;
pub use shared::application::{PaginatedResponse, Query, UseCase};
pub use shared::errors::{AppError, AppResult};
