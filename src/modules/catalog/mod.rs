pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use domain::*;
pub use infrastructure::TvMazeClient;
pub use traits::CatalogClient;
