use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::Show;

/// A show the user bookmarked
///
/// Name and image are captured when the show is favorited and never
/// refreshed from the catalog. `id` is the catalog show id and identifies
/// the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteShow {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
    /// Milliseconds since the Unix epoch
    pub added_at: i64,
}

impl FavoriteShow {
    pub fn new(id: u32, name: impl Into<String>, image: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image,
            added_at: Utc::now().timestamp_millis(),
        }
    }

    /// Snapshot a catalog show as it looks right now
    pub fn from_show(show: &Show) -> Self {
        Self::new(show.id, show.name.clone(), show.poster_url().map(str::to_string))
    }
}
