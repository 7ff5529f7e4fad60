pub mod http_handler;
pub mod tvmaze;

pub use http_handler::CommonHttpHandler;
pub use tvmaze::TvMazeClient;
