use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ArticleAuthor {
    pub name: String,
    pub avatar: String,
    pub bio: Option<String>,
}

/// The underlying core model for a blog article.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time: String,
    pub author: ArticleAuthor,
    pub publish_date: i64,
    pub updated_date: i64,
    pub featured: bool,
    pub views: i64,
}

/// Newtype for `Vec<Article>`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Articles(Vec<Article>);

mod impls;
pub mod traits;
