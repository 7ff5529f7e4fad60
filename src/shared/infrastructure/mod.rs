// Shared infrastructure
// Key-value persistence backing the local favorites store

pub mod key_value_store;

pub use key_value_store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
