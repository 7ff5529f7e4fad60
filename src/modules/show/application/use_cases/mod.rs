pub mod get_episode_details;
pub mod get_show_details;
pub mod get_shows;
pub mod search_shows;

pub use get_episode_details::GetEpisodeDetailsUseCase;
pub use get_show_details::{GetShowDetailsUseCase, ShowDetails};
pub use get_shows::GetShowsUseCase;
pub use search_shows::SearchShowsUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::modules::catalog::{Episode, Show};

    pub fn show(id: u32, name: &str) -> Show {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    pub fn episode(id: u32, season: u32, number: u32) -> Episode {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Episode {}", number),
            "season": season,
            "number": number
        }))
        .unwrap()
    }
}
