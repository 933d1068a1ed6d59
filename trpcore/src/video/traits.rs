use async_trait::async_trait;
use crate::{
    error::BackendError,
    listing::{
        ListFilter,
        ListQuery,
    },
    video::{
        Video,
        Videos,
    },
};

#[async_trait]
pub trait VideoBackend {
    async fn add_video(
        &self,
        video: &Video,
    ) -> Result<i64, BackendError>;
    async fn list_videos(
        &self,
        query: &ListQuery,
    ) -> Result<Videos, BackendError>;
    async fn count_videos(
        &self,
        filter: &ListFilter,
    ) -> Result<i64, BackendError>;
    /// Distinct category values across all videos, ignoring any active
    /// filter; used to build the filter facet list.
    async fn video_categories(
        &self,
    ) -> Result<Vec<String>, BackendError>;
    async fn get_video_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Video>, BackendError>;
}
