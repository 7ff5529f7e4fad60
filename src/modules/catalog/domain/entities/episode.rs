use serde::{Deserialize, Serialize};

use super::common::{Image, Link, Rating};
use crate::shared::utils::text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    #[serde(default)]
    pub url: String,
    pub name: String,
    pub season: u32,
    /// `None` for specials
    pub number: Option<u32>,
    #[serde(rename = "type")]
    pub episode_type: Option<String>,
    pub airdate: Option<String>,
    pub airtime: Option<String>,
    pub airstamp: Option<String>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub rating: Rating,
    pub image: Option<Image>,
    pub summary: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: EpisodeLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeLinks {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
    pub show: Option<Link>,
}

impl Episode {
    /// `S02E05` style code; specials render as `S02 Special`
    pub fn code(&self) -> String {
        match self.number {
            Some(number) => format!("S{:02}E{:02}", self.season, number),
            None => format!("S{:02} Special", self.season),
        }
    }

    pub fn plain_summary(&self) -> Option<String> {
        self.summary.as_deref().map(text::remove_html_tags)
    }
}
