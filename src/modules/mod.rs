// Bounded contexts
// catalog: remote TV catalog client and its record types
// show / person: catalog-backed repositories and use cases
// favorites: locally persisted favorite shows

pub mod catalog;
pub mod favorites;
pub mod person;
pub mod show;
