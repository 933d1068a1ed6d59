use async_trait::async_trait;
use crate::{
    error::BackendError,
    listing::{
        ListFilter,
        ListQuery,
    },
    review::{
        Review,
        Reviews,
    },
};

#[async_trait]
pub trait ReviewBackend {
    async fn add_review(
        &self,
        review: &Review,
    ) -> Result<i64, BackendError>;
    async fn list_reviews(
        &self,
        query: &ListQuery,
    ) -> Result<Reviews, BackendError>;
    async fn count_reviews(
        &self,
        filter: &ListFilter,
    ) -> Result<i64, BackendError>;
    async fn get_review_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Review>, BackendError>;
    async fn featured_reviews(
        &self,
        limit: i64,
    ) -> Result<Reviews, BackendError>;
    async fn trending_reviews(
        &self,
        limit: i64,
    ) -> Result<Reviews, BackendError>;
    async fn related_reviews(
        &self,
        category: &str,
        exclude_slug: &str,
        limit: i64,
    ) -> Result<Reviews, BackendError>;
}
