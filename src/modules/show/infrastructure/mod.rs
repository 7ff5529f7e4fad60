pub mod show_repository_impl;

pub use show_repository_impl::ShowRepositoryImpl;
