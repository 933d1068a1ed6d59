use async_trait::async_trait;
use sqlx::{
    QueryBuilder,
    Row,
    Sqlite,
    sqlite::SqliteRow,
};
use trpcore::{
    article::{
        Article,
        ArticleAuthor,
        Articles,
        traits::ArticleBackend,
    },
    error::BackendError,
    listing::{
        ListFilter,
        ListQuery,
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
    id, title, slug, excerpt, content, image, category, tags, read_time, \
    author_name, author_avatar, author_bio, publish_date, updated_date, \
    featured, views";

fn article_from_row(row: SqliteRow) -> Result<Article, sqlx::Error> {
    Ok(Article {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        slug: row.try_get("slug")?,
        excerpt: row.try_get("excerpt")?,
        content: row.try_get("content")?,
        image: row.try_get("image")?,
        category: row.try_get("category")?,
        tags: json_column(row.try_get("tags")?, "tags")?,
        read_time: row.try_get("read_time")?,
        author: ArticleAuthor {
            name: row.try_get("author_name")?,
            avatar: row.try_get("author_avatar")?,
            bio: row.try_get("author_bio")?,
        },
        publish_date: row.try_get("publish_date")?,
        updated_date: row.try_get("updated_date")?,
        featured: row.try_get("featured")?,
        views: row.try_get("views")?,
    })
}

async fn add_article_sqlite(
    backend: &SqliteBackend,
    article: &Article,
) -> Result<i64, BackendError> {
    let ts = Utc::now().timestamp();
    let publish_date = if article.publish_date > 0 { article.publish_date } else { ts };
    let updated_date = if article.updated_date > 0 { article.updated_date } else { ts };
    let id = sqlx::query(
        r#"
INSERT INTO article (
    title, slug, excerpt, content, image, category, tags, read_time,
    author_name, author_avatar, author_bio, publish_date, updated_date,
    featured, views
)
VALUES (
    ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15
)
        "#,
    )
        .bind(&article.title)
        .bind(&article.slug)
        .bind(&article.excerpt)
        .bind(&article.content)
        .bind(&article.image)
        .bind(&article.category)
        .bind(to_json(&article.tags)?)
        .bind(&article.read_time)
        .bind(&article.author.name)
        .bind(&article.author.avatar)
        .bind(&article.author.bio)
        .bind(publish_date)
        .bind(updated_date)
        .bind(article.featured)
        .bind(article.views)
        .execute(&*backend.pool)
        .await?
        .last_insert_rowid();
    Ok(id)
}

async fn list_articles_sqlite(
    backend: &SqliteBackend,
    query: &ListQuery,
) -> Result<Articles, BackendError> {
    let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        format!("SELECT {COLUMNS} FROM article")
    );
    push_filter(&mut query_builder, &query.filter);
    push_window(&mut query_builder, query);
    let recs = query_builder
        .build()
        .try_map(article_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn get_article_by_slug_sqlite(
    backend: &SqliteBackend,
    slug: &str,
) -> Result<Option<Article>, BackendError> {
    let sql = format!("SELECT {COLUMNS} FROM article WHERE slug = ?1");
    let rec = sqlx::query(&sql)
        .bind(slug)
        .try_map(article_from_row)
        .fetch_optional(&*backend.pool)
        .await?;
    Ok(rec)
}

async fn latest_articles_sqlite(
    backend: &SqliteBackend,
    limit: i64,
) -> Result<Articles, BackendError> {
    let sql = format!(
        "SELECT {COLUMNS} FROM article ORDER BY publish_date DESC LIMIT ?1"
    );
    let recs = sqlx::query(&sql)
        .bind(limit)
        .try_map(article_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

#[async_trait]
impl ArticleBackend for SqliteBackend {
    async fn add_article(
        &self,
        article: &Article,
    ) -> Result<i64, BackendError> {
        add_article_sqlite(self, article).await
    }

    async fn list_articles(
        &self,
        query: &ListQuery,
    ) -> Result<Articles, BackendError> {
        list_articles_sqlite(self, query).await
    }

    async fn count_articles(
        &self,
        filter: &ListFilter,
    ) -> Result<i64, BackendError> {
        count_filtered(&self.pool, "article", filter).await
    }

    async fn get_article_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Article>, BackendError> {
        get_article_by_slug_sqlite(self, slug).await
    }

    async fn latest_articles(
        &self,
        limit: i64,
    ) -> Result<Articles, BackendError> {
        latest_articles_sqlite(self, limit).await
    }
}
