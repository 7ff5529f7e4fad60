pub mod repository;

pub use repository::ShowRepository;
