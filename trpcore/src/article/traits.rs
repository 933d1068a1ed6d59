use async_trait::async_trait;
use crate::{
    article::{
        Article,
        Articles,
    },
    error::BackendError,
    listing::{
        ListFilter,
        ListQuery,
    },
};

#[async_trait]
pub trait ArticleBackend {
    async fn add_article(
        &self,
        article: &Article,
    ) -> Result<i64, BackendError>;
    async fn list_articles(
        &self,
        query: &ListQuery,
    ) -> Result<Articles, BackendError>;
    async fn count_articles(
        &self,
        filter: &ListFilter,
    ) -> Result<i64, BackendError>;
    async fn get_article_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Article>, BackendError>;
    /// Most recently published articles, for the home page strip.
    async fn latest_articles(
        &self,
        limit: i64,
    ) -> Result<Articles, BackendError>;
}
