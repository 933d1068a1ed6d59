use serde::{Deserialize, Serialize};

/// The underlying core model for a published video.
///
/// `views` carries the display string from the source feed ("1.2M",
/// "72K"), so sorting on it follows the store's text collation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub thumbnail: String,
    pub embed_id: String,
    pub duration: String,
    pub views: String,
    pub category: String,
    pub tags: Vec<String>,
    pub description: String,
    pub publish_date: i64,
    pub featured: bool,
}

/// Newtype for `Vec<Video>`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Videos(Vec<Video>);

mod impls;
pub mod traits;
