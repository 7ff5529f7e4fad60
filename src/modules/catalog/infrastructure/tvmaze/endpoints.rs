//! Request paths for the TVmaze REST API, relative to the base URL.
//! Free-text query values are percent-encoded.

pub fn shows_page(page: u32) -> String {
    format!("/shows?page={}", page)
}

pub fn show(id: u32) -> String {
    format!("/shows/{}", id)
}

pub fn search_shows(query: &str) -> String {
    format!("/search/shows?q={}", urlencoding::encode(query))
}

pub fn show_episodes(show_id: u32) -> String {
    format!("/shows/{}/episodes", show_id)
}

pub fn episode(episode_id: u32) -> String {
    format!("/episodes/{}", episode_id)
}

pub fn search_people(query: &str) -> String {
    format!("/search/people?q={}", urlencoding::encode(query))
}

pub fn person(id: u32) -> String {
    format!("/people/{}", id)
}

pub fn person_cast_credits(person_id: u32) -> String {
    format!("/people/{}/castcredits?embed=show", person_id)
}

pub fn person_crew_credits(person_id: u32) -> String {
    format!("/people/{}/crewcredits?embed=show", person_id)
}
