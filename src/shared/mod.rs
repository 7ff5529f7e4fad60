// Shared Kernel
// Cross-cutting pieces used by every bounded context under `modules`

pub mod application; // Use case traits, pagination
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Key-value persistence
pub mod utils; // Logging and display formatting

pub use config::{AppConfig, CatalogConfig, StorageConfig};
pub use infrastructure::key_value_store::{
    FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore,
};
