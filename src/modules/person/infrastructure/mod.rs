pub mod person_repository_impl;

pub use person_repository_impl::PersonRepositoryImpl;
