use serde::{Deserialize, Serialize};

use super::{person::Person, show::Show};

/// Search hit wrapping a show with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowSearchResult {
    pub score: f64,
    pub show: Show,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSearchResult {
    pub score: f64,
    pub person: Person,
}
