use serde_json::{json, Value};

pub fn show(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "url": format!("https://www.tvmaze.com/shows/{}", id),
        "name": name,
        "type": "Scripted",
        "language": "English",
        "genres": ["Drama"],
        "status": "Ended",
        "runtime": 60,
        "premiered": "2004-09-22",
        "officialSite": null,
        "schedule": { "time": "21:00", "days": ["Wednesday"] },
        "rating": { "average": 8.3 },
        "weight": 99,
        "network": {
            "id": 3,
            "name": "ABC",
            "country": { "name": "United States", "code": "US", "timezone": "America/New_York" }
        },
        "webChannel": null,
        "dvdCountry": null,
        "externals": { "tvrage": 4284, "thetvdb": 73739, "imdb": "tt0411008" },
        "image": {
            "medium": format!("https://static.tvmaze.com/medium/{}.jpg", id),
            "original": format!("https://static.tvmaze.com/original/{}.jpg", id)
        },
        "summary": format!("<p><b>{}</b> summary.</p>", name),
        "updated": 1704794065,
        "_links": { "self": { "href": format!("https://api.tvmaze.com/shows/{}", id) } }
    })
}

pub fn episode(id: u32, season: u32, number: u32) -> Value {
    json!({
        "id": id,
        "url": format!("https://www.tvmaze.com/episodes/{}", id),
        "name": format!("Episode {}", number),
        "season": season,
        "number": number,
        "type": "regular",
        "airdate": "2004-09-22",
        "airtime": "21:00",
        "airstamp": "2004-09-23T01:00:00+00:00",
        "runtime": 60,
        "rating": { "average": 8.0 },
        "image": null,
        "summary": "<p>Plane crash.</p>",
        "_links": { "self": { "href": format!("https://api.tvmaze.com/episodes/{}", id) } }
    })
}

pub fn person(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "url": format!("https://www.tvmaze.com/people/{}", id),
        "name": name,
        "country": null,
        "birthday": "1952-07-15",
        "deathday": null,
        "gender": "Male",
        "image": null,
        "updated": 1700000000,
        "_links": { "self": { "href": format!("https://api.tvmaze.com/people/{}", id) } }
    })
}

pub fn cast_credit(show_id: u32, show_name: &str, character: &str) -> Value {
    json!({
        "self": false,
        "voice": false,
        "_links": {
            "show": { "href": format!("https://api.tvmaze.com/shows/{}", show_id), "name": show_name },
            "character": { "href": "https://api.tvmaze.com/characters/1", "name": character }
        },
        "_embedded": { "show": show(show_id, show_name) }
    })
}

pub fn crew_credit(show_id: u32, show_name: &str, job: &str) -> Value {
    json!({
        "type": job,
        "_links": {
            "show": { "href": format!("https://api.tvmaze.com/shows/{}", show_id), "name": show_name }
        },
        "_embedded": { "show": show(show_id, show_name) }
    })
}
