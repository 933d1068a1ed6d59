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
    review::{
        Review,
        Reviews,
        traits::ReviewBackend,
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
    id, title, slug, brand, category, image, gallery, rating, price, \
    affiliate_links, excerpt, content, specs, pros, cons, verdict, author, \
    publish_date, updated_date, featured, trending";

fn review_from_row(row: SqliteRow) -> Result<Review, sqlx::Error> {
    Ok(Review {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        slug: row.try_get("slug")?,
        brand: row.try_get("brand")?,
        category: row.try_get("category")?,
        image: row.try_get("image")?,
        gallery: json_column(row.try_get("gallery")?, "gallery")?,
        rating: row.try_get("rating")?,
        price: row.try_get("price")?,
        affiliate_links: json_column(
            row.try_get("affiliate_links")?,
            "affiliate_links",
        )?,
        excerpt: row.try_get("excerpt")?,
        content: row.try_get("content")?,
        specs: json_column(row.try_get("specs")?, "specs")?,
        pros: json_column(row.try_get("pros")?, "pros")?,
        cons: json_column(row.try_get("cons")?, "cons")?,
        verdict: row.try_get("verdict")?,
        author: row.try_get("author")?,
        publish_date: row.try_get("publish_date")?,
        updated_date: row.try_get("updated_date")?,
        featured: row.try_get("featured")?,
        trending: row.try_get("trending")?,
    })
}

async fn add_review_sqlite(
    backend: &SqliteBackend,
    review: &Review,
) -> Result<i64, BackendError> {
    let ts = Utc::now().timestamp();
    let publish_date = if review.publish_date > 0 { review.publish_date } else { ts };
    let updated_date = if review.updated_date > 0 { review.updated_date } else { ts };
    let id = sqlx::query(
        r#"
INSERT INTO review (
    title, slug, brand, category, image, gallery, rating, price,
    affiliate_links, excerpt, content, specs, pros, cons, verdict, author,
    publish_date, updated_date, featured, trending
)
VALUES (
    ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
    ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20
)
        "#,
    )
        .bind(&review.title)
        .bind(&review.slug)
        .bind(&review.brand)
        .bind(&review.category)
        .bind(&review.image)
        .bind(to_json(&review.gallery)?)
        .bind(review.rating)
        .bind(&review.price)
        .bind(to_json(&review.affiliate_links)?)
        .bind(&review.excerpt)
        .bind(&review.content)
        .bind(to_json(&review.specs)?)
        .bind(to_json(&review.pros)?)
        .bind(to_json(&review.cons)?)
        .bind(&review.verdict)
        .bind(&review.author)
        .bind(publish_date)
        .bind(updated_date)
        .bind(review.featured)
        .bind(review.trending)
        .execute(&*backend.pool)
        .await?
        .last_insert_rowid();
    Ok(id)
}

async fn list_reviews_sqlite(
    backend: &SqliteBackend,
    query: &ListQuery,
) -> Result<Reviews, BackendError> {
    let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        format!("SELECT {COLUMNS} FROM review")
    );
    push_filter(&mut query_builder, &query.filter);
    push_window(&mut query_builder, query);
    let recs = query_builder
        .build()
        .try_map(review_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn get_review_by_slug_sqlite(
    backend: &SqliteBackend,
    slug: &str,
) -> Result<Option<Review>, BackendError> {
    let sql = format!("SELECT {COLUMNS} FROM review WHERE slug = ?1");
    let rec = sqlx::query(&sql)
        .bind(slug)
        .try_map(review_from_row)
        .fetch_optional(&*backend.pool)
        .await?;
    Ok(rec)
}

async fn flagged_reviews_sqlite(
    backend: &SqliteBackend,
    flag: &str,
    limit: i64,
) -> Result<Reviews, BackendError> {
    // flag is one of the two internal flag column names, never input
    let sql = format!(
        "SELECT {COLUMNS} FROM review \
        WHERE {flag} = 1 ORDER BY publish_date DESC LIMIT ?1"
    );
    let recs = sqlx::query(&sql)
        .bind(limit)
        .try_map(review_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

async fn related_reviews_sqlite(
    backend: &SqliteBackend,
    category: &str,
    exclude_slug: &str,
    limit: i64,
) -> Result<Reviews, BackendError> {
    let sql = format!(
        "SELECT {COLUMNS} FROM review \
        WHERE category = ?1 AND slug <> ?2 \
        ORDER BY publish_date DESC LIMIT ?3"
    );
    let recs = sqlx::query(&sql)
        .bind(category)
        .bind(exclude_slug)
        .bind(limit)
        .try_map(review_from_row)
        .fetch_all(&*backend.pool)
        .await?;
    Ok(recs.into())
}

#[async_trait]
impl ReviewBackend for SqliteBackend {
    async fn add_review(
        &self,
        review: &Review,
    ) -> Result<i64, BackendError> {
        add_review_sqlite(self, review).await
    }

    async fn list_reviews(
        &self,
        query: &ListQuery,
    ) -> Result<Reviews, BackendError> {
        list_reviews_sqlite(self, query).await
    }

    async fn count_reviews(
        &self,
        filter: &ListFilter,
    ) -> Result<i64, BackendError> {
        count_filtered(&self.pool, "review", filter).await
    }

    async fn get_review_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Review>, BackendError> {
        get_review_by_slug_sqlite(self, slug).await
    }

    async fn featured_reviews(
        &self,
        limit: i64,
    ) -> Result<Reviews, BackendError> {
        flagged_reviews_sqlite(self, "featured", limit).await
    }

    async fn trending_reviews(
        &self,
        limit: i64,
    ) -> Result<Reviews, BackendError> {
        flagged_reviews_sqlite(self, "trending", limit).await
    }

    async fn related_reviews(
        &self,
        category: &str,
        exclude_slug: &str,
        limit: i64,
    ) -> Result<Reviews, BackendError> {
        related_reviews_sqlite(self, category, exclude_slug, limit).await
    }
}
