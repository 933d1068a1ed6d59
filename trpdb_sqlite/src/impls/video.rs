use async_trait::async_trait;
use sqlx::{
    QueryBuilder,
    Row,
    Sqlite,
    sqlite::SqliteRow,
};
use trpcore::{
    error::BackendError,
    listing::{
        ListFilter,
        ListQuery,
    },
    video::{
        Video,
        Videos,
        traits::VideoBackend,
    },
};

use crate::{
    SqliteBackend,
    chrono::Utc,
    impls::{
        count_filtered,
        json_column,
        push_filter,
        push_window,
        to_json,
    },
};

const COLUMNS: &str = "\
    id, title, slug, thumbnail, embed_id, duration, views, category, tags, \
    description, publish_date, featured";

fn video_from_row(row: SqliteRow) -> Result<Video, sqlx::Error> {
    Ok(Video {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        slug: row.try_get("slug")?,
        thumbnail: row.try_get("thumbnail")?,
        embed_id: row.try_get("embed_id")?,
        duration: row.try_get("duration")?,
        views: row.try_get("views")?,
        category: row.try_get("category")?,
        tags: json_column(row.try_get("tags")?, "tags")?,
        description: row.try_get("description")?,
        publish_date: row.try_get("publish_date")?,
        featured: row.try_get("featured")?,
    })
}

async fn add_video_sqlite(
    backend: &SqliteBackend,
    video: &Video,
) -> Result<i64, BackendError> {
    let publish_date = if video.publish_date > 0 {
        video.publish_date
    } else {
        Utc::now().timestamp()
    };
    let id = sqlx::query(
        r#"
INSERT INTO video (
    title, slug, thumbnail, embed_id, duration, views, category, tags,
    description, publish_date, featured
)
VALUES ( ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11 )
        "#,
    )
        .bind(&video.title)
        .bind(&video.slug)
        .bind(&video.thumbnail)
        .bind(&video.embed_id)
        .bind(&video.duration)
        .bind(&video.views)
        .bind(&video.category)
        .bind(to_json(&video.tags)?)
        .bind(&video.description)
        .bind(publish_date)
        .bind(video.featured)
        .execute(&*backend.pool)
        .await?
        .last_insert_rowid();
    Ok(id)
}

async fn list_videos_sqlite(
    backend: &SqliteBackend,
    query: &ListQuery,
) -> Result<Videos, BackendError> {
    let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        format!("SELECT {COLUMNS} FROM video")
    );
    push_filter(&mut query_builder, &query.filter);
    push_window(&mut query_builder, query);
    let recs = query_builder
        .build()
        .try_map(video_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn video_categories_sqlite(
    backend: &SqliteBackend,
) -> Result<Vec<String>, BackendError> {
    let categories = sqlx::query(
        "SELECT DISTINCT category FROM video ORDER BY category"
    )
        .try_map(|row: SqliteRow| row.try_get::<String, _>("category"))
        .fetch_all(&*backend.pool)
        .await?;
    Ok(categories)
}

async fn get_video_by_slug_sqlite(
    backend: &SqliteBackend,
    slug: &str,
) -> Result<Option<Video>, BackendError> {
    let sql = format!("SELECT {COLUMNS} FROM video WHERE slug = ?1");
    let rec = sqlx::query(&sql)
        .bind(slug)
        .try_map(video_from_row)
        .fetch_optional(&*backend.pool)
        .await?;
    Ok(rec)
}

#[async_trait]
impl VideoBackend for SqliteBackend {
    async fn add_video(
        &self,
        video: &Video,
    ) -> Result<i64, BackendError> {
        add_video_sqlite(self, video).await
    }

    async fn list_videos(
        &self,
        query: &ListQuery,
    ) -> Result<Videos, BackendError> {
        list_videos_sqlite(self, query).await
    }

    async fn count_videos(
        &self,
        filter: &ListFilter,
    ) -> Result<i64, BackendError> {
        count_filtered(&self.pool, "video", filter).await
    }

    async fn video_categories(
        &self,
    ) -> Result<Vec<String>, BackendError> {
        video_categories_sqlite(self).await
    }

    async fn get_video_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Video>, BackendError> {
        get_video_by_slug_sqlite(self, slug).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use test_trp::core::example_video;
    use trpcore::{
        listing::{
            ListParams,
            ResourceKind,
        },
        video::traits::VideoBackend,
    };
    use crate::impls::testing::sqlite_backend;

    #[async_std::test]
    async fn test_add_get_roundtrip() -> anyhow::Result<()> {
        let backend = sqlite_backend().await?;
        let vb: &dyn VideoBackend = &backend;
        let mut video = example_video("phone-x-hands-on");
        let id = vb.add_video(&video).await?;
        video.id = id;
        assert_eq!(vb.get_video_by_slug("phone-x-hands-on").await?, Some(video));
        Ok(())
    }

    #[async_std::test]
    async fn test_category_and_tag_filter() -> anyhow::Result<()> {
        let backend = sqlite_backend().await?;
        let vb: &dyn VideoBackend = &backend;
        for (slug, category, tags) in [
            ("a", "Review", vec!["smartphone", "5G"]),
            ("b", "Review", vec!["laptop"]),
            ("c", "Unboxing", vec!["smartphone"]),
        ] {
            let mut video = example_video(slug);
            video.category = category.to_string();
            video.tags = tags.iter().map(|tag| tag.to_string()).collect();
            vb.add_video(&video).await?;
        }

        let mut params = ListParams::default();
        params.category = Some("Review".to_string());
        params.tag = Some("smartphone".to_string());
        let query = params.resolve(ResourceKind::Video);
        let videos = vb.list_videos(&query).await?;
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].slug, "a");
        assert_eq!(vb.count_videos(&query.filter).await?, 1);

        // a tag matching zero records is an empty result, not an error
        let mut params = ListParams::default();
        params.tag = Some("tablet".to_string());
        let query = params.resolve(ResourceKind::Video);
        assert!(vb.list_videos(&query).await?.is_empty());
        assert_eq!(vb.count_videos(&query.filter).await?, 0);
        Ok(())
    }

    #[async_std::test]
    async fn test_sort_views_text_order() -> anyhow::Result<()> {
        let backend = sqlite_backend().await?;
        let vb: &dyn VideoBackend = &backend;
        for (slug, views) in [("a", "889K"), ("b", "1.2M"), ("c", "72K")] {
            let mut video = example_video(slug);
            video.views = views.to_string();
            video.category = "Review".to_string();
            vb.add_video(&video).await?;
        }

        let mut params = ListParams::default();
        params.category = Some("Review".to_string());
        params.sort = Some("views".to_string());
        params.order = Some("asc".to_string());
        let query = params.resolve(ResourceKind::Video);
        let videos = vb.list_videos(&query).await?;
        // views is a display string; ascending here is text collation
        let views = videos.iter()
            .map(|video| video.views.as_str())
            .collect::<Vec<_>>();
        assert_eq!(views, ["1.2M", "72K", "889K"]);
        assert!(videos.iter().all(|video| video.category == "Review"));
        Ok(())
    }

    #[async_std::test]
    async fn test_categories_facet_ignores_filter() -> anyhow::Result<()> {
        let backend = sqlite_backend().await?;
        let vb: &dyn VideoBackend = &backend;
        for (slug, category) in [
            ("a", "Review"),
            ("b", "Unboxing"),
            ("c", "Review"),
            ("d", "Comparison"),
        ] {
            let mut video = example_video(slug);
            video.category = category.to_string();
            vb.add_video(&video).await?;
        }
        // the facet list is global and deduplicated
        assert_eq!(
            vb.video_categories().await?,
            ["Comparison", "Review", "Unboxing"],
        );
        Ok(())
    }
}
