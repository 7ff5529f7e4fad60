use serde::{Deserialize, Serialize};

use super::common::{Country, Image, Link, Rating};
use crate::shared::utils::{date, text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub show_type: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub status: Option<String>,
    pub runtime: Option<u32>,
    pub premiered: Option<String>,
    pub official_site: Option<String>,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub weight: u32,
    pub network: Option<Network>,
    pub web_channel: Option<Network>,
    pub dvd_country: Option<Country>,
    #[serde(default)]
    pub externals: Externals,
    pub image: Option<Image>,
    pub summary: Option<String>,
    #[serde(default)]
    pub updated: i64,
    #[serde(rename = "_links", default)]
    pub links: ShowLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub days: Vec<String>,
}

/// Broadcast network or streaming channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: u32,
    pub name: String,
    pub country: Option<Country>,
    pub official_site: Option<String>,
}

/// Identifiers of the same show in other databases
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Externals {
    pub tvrage: Option<u32>,
    pub thetvdb: Option<u32>,
    pub imdb: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowLinks {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
    pub previousepisode: Option<Link>,
    pub nextepisode: Option<Link>,
}

impl Show {
    /// Medium-size poster, if the catalog has one
    pub fn poster_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .map(|image| image.medium.as_str())
            .filter(|url| !url.is_empty())
    }

    /// Summary with markup removed
    pub fn plain_summary(&self) -> Option<String> {
        self.summary.as_deref().map(text::remove_html_tags)
    }

    pub fn genres_label(&self) -> String {
        text::format_genres(&self.genres)
    }

    /// e.g. `Thursday at 10:00 PM`; `None` for shows without a fixed slot
    pub fn schedule_label(&self) -> Option<String> {
        if self.schedule.time.is_empty() && self.schedule.days.is_empty() {
            return None;
        }
        Some(date::format_schedule(&self.schedule.time, &self.schedule.days))
    }

    /// Network name, falling back to the web channel
    pub fn broadcaster(&self) -> Option<&str> {
        self.network
            .as_ref()
            .or(self.web_channel.as_ref())
            .map(|n| n.name.as_str())
    }
}
