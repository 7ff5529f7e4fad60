pub mod common;
pub mod episode;
pub mod person;
pub mod search_result;
pub mod show;

pub use common::{Country, Image, Link, Rating};
pub use episode::{Episode, EpisodeLinks};
pub use person::{
    CastCredit, CastCreditLinks, CrewCredit, CrewCreditLinks, EmbeddedShow, Person, PersonLinks,
};
pub use search_result::{PersonSearchResult, ShowSearchResult};
pub use show::{Externals, Network, Schedule, Show, ShowLinks};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn show_json() -> serde_json::Value {
        json!({
            "id": 1,
            "url": "https://www.tvmaze.com/shows/1/under-the-dome",
            "name": "Under the Dome",
            "type": "Scripted",
            "language": "English",
            "genres": ["Drama", "Science-Fiction", "Thriller"],
            "status": "Ended",
            "runtime": 60,
            "premiered": "2013-06-24",
            "officialSite": "http://www.cbs.com/shows/under-the-dome/",
            "schedule": { "time": "22:00", "days": ["Thursday"] },
            "rating": { "average": 6.5 },
            "weight": 98,
            "network": {
                "id": 2,
                "name": "CBS",
                "country": { "name": "United States", "code": "US", "timezone": "America/New_York" },
                "officialSite": "https://www.cbs.com/"
            },
            "webChannel": null,
            "dvdCountry": null,
            "externals": { "tvrage": 25988, "thetvdb": 264492, "imdb": "tt1553656" },
            "image": {
                "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/81/202627.jpg",
                "original": "https://static.tvmaze.com/uploads/images/original_untouched/81/202627.jpg"
            },
            "summary": "<p><b>Under the Dome</b> is the story of a small town.</p>",
            "updated": 1704794065,
            "_links": {
                "self": { "href": "https://api.tvmaze.com/shows/1" },
                "previousepisode": { "href": "https://api.tvmaze.com/episodes/185054", "name": "The Enemy Within" }
            }
        })
    }

    #[test]
    fn test_show_deserializes_catalog_shape() {
        let show: Show = serde_json::from_value(show_json()).unwrap();

        assert_eq!(show.id, 1);
        assert_eq!(show.show_type.as_deref(), Some("Scripted"));
        assert_eq!(show.rating.average, Some(6.5));
        assert_eq!(show.externals.imdb.as_deref(), Some("tt1553656"));
        assert_eq!(show.broadcaster(), Some("CBS"));
        assert!(show.links.nextepisode.is_none());
        assert_eq!(
            show.plain_summary().as_deref(),
            Some("Under the Dome is the story of a small town.")
        );
        assert_eq!(show.genres_label(), "Drama • Science-Fiction • Thriller");
        assert_eq!(show.schedule_label().as_deref(), Some("Thursday at 10:00 PM"));
        assert!(show.poster_url().unwrap().contains("medium_portrait"));
    }

    #[test]
    fn test_show_tolerates_sparse_records() {
        let show: Show = serde_json::from_value(json!({ "id": 7, "name": "Sparse" })).unwrap();

        assert!(show.genres.is_empty());
        assert_eq!(show.rating.average, None);
        assert_eq!(show.poster_url(), None);
        assert_eq!(show.schedule_label(), None);
        assert_eq!(show.broadcaster(), None);
    }

    #[test]
    fn test_episode_code() {
        let episode: Episode = serde_json::from_value(json!({
            "id": 1,
            "name": "Pilot",
            "season": 1,
            "number": 1,
            "type": "regular",
            "airdate": "2013-06-24",
            "airtime": "22:00",
            "runtime": 60,
            "rating": { "average": 6.9 },
            "image": null,
            "summary": "<p>The pilot.</p>"
        }))
        .unwrap();

        assert_eq!(episode.code(), "S01E01");
        assert_eq!(episode.plain_summary().as_deref(), Some("The pilot."));

        let special = Episode { number: None, ..episode };
        assert_eq!(special.code(), "S01 Special");
    }

    #[test]
    fn test_cast_credit_prefers_embedded_show_name() {
        let mut show = show_json();
        show["name"] = json!("Embedded Name");
        let credit: CastCredit = serde_json::from_value(json!({
            "self": false,
            "voice": true,
            "_links": {
                "show": { "href": "https://api.tvmaze.com/shows/1", "name": "Link Name" },
                "character": { "href": "https://api.tvmaze.com/characters/1", "name": "Big Jim" }
            },
            "_embedded": { "show": show }
        }))
        .unwrap();

        assert!(credit.voice);
        assert!(!credit.as_self);
        assert_eq!(credit.show_name(), "Embedded Name");
        assert_eq!(credit.character_name(), "Big Jim");
    }

    #[test]
    fn test_crew_credit_falls_back_to_link_name() {
        let credit: CrewCredit = serde_json::from_value(json!({
            "type": "Creator",
            "_links": { "show": { "href": "https://api.tvmaze.com/shows/1", "name": "Link Name" } }
        }))
        .unwrap();

        assert_eq!(credit.job, "Creator");
        assert_eq!(credit.show_name(), "Link Name");
    }

    #[test]
    fn test_search_envelope() {
        let hit: ShowSearchResult =
            serde_json::from_value(json!({ "score": 0.91, "show": show_json() })).unwrap();
        assert_eq!(hit.show.name, "Under the Dome");
    }
}
