use serde::{Deserialize, Serialize};

use super::common::{Country, Image, Link};
use super::show::Show;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    #[serde(default)]
    pub url: String,
    pub name: String,
    pub country: Option<Country>,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub gender: Option<String>,
    pub image: Option<Image>,
    #[serde(default)]
    pub updated: i64,
    #[serde(rename = "_links", default)]
    pub links: PersonLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonLinks {
    #[serde(rename = "self")]
    pub self_link: Option<Link>,
}

/// A role the person played in a show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastCredit {
    /// Person appears as themselves
    #[serde(rename = "self", default)]
    pub as_self: bool,
    #[serde(default)]
    pub voice: bool,
    #[serde(rename = "_links")]
    pub links: CastCreditLinks,
    #[serde(rename = "_embedded")]
    pub embedded: Option<EmbeddedShow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastCreditLinks {
    pub show: Link,
    pub character: Link,
}

/// A behind-the-camera job the person held on a show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewCredit {
    #[serde(rename = "type")]
    pub job: String,
    #[serde(rename = "_links")]
    pub links: CrewCreditLinks,
    #[serde(rename = "_embedded")]
    pub embedded: Option<EmbeddedShow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewCreditLinks {
    pub show: Link,
}

/// Show body included by `embed=show`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedShow {
    pub show: Show,
}

impl CastCredit {
    pub fn show_name(&self) -> &str {
        self.embedded
            .as_ref()
            .map(|e| e.show.name.as_str())
            .or(self.links.show.name.as_deref())
            .unwrap_or_default()
    }

    pub fn character_name(&self) -> &str {
        self.links.character.name.as_deref().unwrap_or_default()
    }
}

impl CrewCredit {
    pub fn show_name(&self) -> &str {
        self.embedded
            .as_ref()
            .map(|e| e.show.name.as_str())
            .or(self.links.show.name.as_deref())
            .unwrap_or_default()
    }
}
