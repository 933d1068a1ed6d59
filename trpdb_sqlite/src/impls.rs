use serde::Serialize;
use sqlx::{
    QueryBuilder,
    Row,
    Sqlite,
};
use trpcore::{
    error::BackendError,
    listing::{
        FilterClause,
        ListFilter,
        ListQuery,
    },
};

mod article;
mod review;
mod video;

/// Append the filter conjunction to a statement; no-op for an empty
/// filter.  Clause values are always bound, never spliced.
pub(crate) fn push_filter(
    query_builder: &mut QueryBuilder<'_, Sqlite>,
    filter: &ListFilter,
) {
    for (i, clause) in filter.iter().enumerate() {
        query_builder.push(if i == 0 { " WHERE " } else { " AND " });
        match clause {
            FilterClause::Brand(value) => {
                query_builder
                    .push("brand = ")
                    .push_bind(value.clone());
            }
            FilterClause::Category(value) => {
                query_builder
                    .push("category = ")
                    .push_bind(value.clone());
            }
            FilterClause::Tag(value) => {
                query_builder
                    .push("EXISTS (\
                        SELECT 1 FROM json_each(tags) \
                        WHERE json_each.value = ")
                    .push_bind(value.clone())
                    .push(")");
            }
            FilterClause::MinRating(value) => {
                query_builder
                    .push("rating >= ")
                    .push_bind(*value);
            }
        }
    }
}

/// Append the page window; `sort_column` comes from the resolver's
/// allow-list so pushing it directly is safe.
pub(crate) fn push_window(
    query_builder: &mut QueryBuilder<'_, Sqlite>,
    query: &ListQuery,
) {
    query_builder
        .push(" ORDER BY ")
        .push(query.sort_column)
        .push(" ")
        .push(query.direction.keyword())
        .push(" LIMIT ")
        .push_bind(query.limit)
        .push(" OFFSET ")
        .push_bind(query.skip);
}

/// Run `SELECT COUNT(*)` over a table with the filter applied.
pub(crate) async fn count_filtered(
    pool: &sqlx::SqlitePool,
    table: &str,
    filter: &ListFilter,
) -> Result<i64, BackendError> {
    let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        format!("SELECT COUNT(*) AS count FROM {table}")
    );
    push_filter(&mut query_builder, filter);
    let total = query_builder
        .build()
        .try_map(|row| row.try_get::<i64, _>("count"))
        .fetch_one(pool)
        .await?;
    Ok(total)
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, BackendError> {
    serde_json::to_string(value)
        .map_err(|e| BackendError::AppInvariantViolation(
            format!("unencodable column value: {e}")
        ))
}

pub(crate) fn json_column<T: serde::de::DeserializeOwned>(
    raw: String,
    index: &str,
) -> Result<T, sqlx::Error> {
    serde_json::from_str(&raw).map_err(|e| sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(e),
    })
}
