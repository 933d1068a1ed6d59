//! Read-only JSON endpoints over the content backend.
//!
//! Input normalization never fails a request; storage failures of any
//! kind, timeouts included, collapse into one generic failure envelope
//! with a server-error status.  One attempt per request, no retry.

use axum::{
    Json,
    Router,
    extract::{
        Path,
        Query,
        State,
    },
    http::StatusCode,
    response::{
        IntoResponse,
        Response,
    },
    routing::get,
};
use serde::Serialize;
use std::{
    future::Future,
    sync::Arc,
    time::Duration,
};
use thiserror::Error;
use trpcore::{
    article::{
        Articles,
        traits::ArticleBackend,
    },
    error::BackendError,
    listing::{
        ListParams,
        Pagination,
        ResourceKind,
    },
    review::{
        Reviews,
        traits::ReviewBackend,
    },
    video::{
        Videos,
        traits::VideoBackend,
    },
};
use trpdb_sqlite::SqliteBackend;

/// Blog page size; articles carry no default in the list contract so
/// the handler supplies one.
const ARTICLE_PAGE_SIZE: i64 = 9;
const FEATURED_LIMIT: i64 = 4;
const TRENDING_LIMIT: i64 = 8;
const RELATED_LIMIT: i64 = 3;
const LATEST_LIMIT: i64 = 3;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<SqliteBackend>,
    pub query_timeout: Duration,
}

#[derive(Debug, Error)]
enum ApiError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("storage call timed out")]
    Timeout,
}

#[derive(Serialize)]
struct ListEnvelope<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<String>>,
    pagination: Pagination,
}

#[derive(Serialize)]
struct ItemEnvelope<T> {
    success: bool,
    data: T,
}

#[derive(Serialize)]
struct FailureEnvelope {
    success: bool,
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/reviews", get(reviews))
        .route("/api/reviews/featured", get(featured_reviews))
        .route("/api/reviews/trending", get(trending_reviews))
        .route("/api/reviews/{slug}", get(review_by_slug))
        .route("/api/reviews/{slug}/related", get(related_reviews))
        .route("/api/videos", get(videos))
        .route("/api/videos/{slug}", get(video_by_slug))
        .route("/api/articles", get(articles))
        .route("/api/articles/latest", get(latest_articles))
        .route("/api/articles/{slug}", get(article_by_slug))
        .with_state(state)
}

async fn bounded<T>(
    state: &AppState,
    call: impl Future<Output = Result<T, BackendError>>,
) -> Result<T, ApiError> {
    tokio::time::timeout(state.query_timeout, call)
        .await
        .map_err(|_| ApiError::Timeout)?
        .map_err(ApiError::from)
}

fn failure(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(FailureEnvelope {
            success: false,
            error: message.to_string(),
        }),
    ).into_response()
}

fn fetch_failure(resource: &str, error: ApiError) -> Response {
    log::error!("{resource} retrieval failed: {error}");
    failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        &format!("Failed to fetch {resource}"),
    )
}

async fn reviews(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    match list_reviews(&state, &params).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(error) => fetch_failure("reviews", error),
    }
}

async fn list_reviews(
    state: &AppState,
    params: &ListParams,
) -> Result<ListEnvelope<Reviews>, ApiError> {
    let query = params.resolve(ResourceKind::Review);
    let backend: &SqliteBackend = &state.backend;
    let data = bounded(state, backend.list_reviews(&query)).await?;
    let total = bounded(state, backend.count_reviews(&query.filter)).await?;
    Ok(ListEnvelope {
        success: true,
        data,
        categories: None,
        pagination: Pagination::new(total, query.page, query.limit),
    })
}

async fn videos(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    match list_videos(&state, &params).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(error) => fetch_failure("videos", error),
    }
}

async fn list_videos(
    state: &AppState,
    params: &ListParams,
) -> Result<ListEnvelope<Videos>, ApiError> {
    let query = params.resolve(ResourceKind::Video);
    let backend: &SqliteBackend = &state.backend;
    let data = bounded(state, backend.list_videos(&query)).await?;
    let total = bounded(state, backend.count_videos(&query.filter)).await?;
    let categories = bounded(state, backend.video_categories()).await?;
    Ok(ListEnvelope {
        success: true,
        data,
        categories: Some(categories),
        pagination: Pagination::new(total, query.page, query.limit),
    })
}

async fn articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    match list_articles(&state, &params).await {
        Ok(envelope) => Json(envelope).into_response(),
        Err(error) => fetch_failure("articles", error),
    }
}

async fn list_articles(
    state: &AppState,
    params: &ListParams,
) -> Result<ListEnvelope<Articles>, ApiError> {
    let query = params.resolve_with_default_limit(
        ResourceKind::Article,
        ARTICLE_PAGE_SIZE,
    );
    let backend: &SqliteBackend = &state.backend;
    let data = bounded(state, backend.list_articles(&query)).await?;
    let total = bounded(state, backend.count_articles(&query.filter)).await?;
    Ok(ListEnvelope {
        success: true,
        data,
        categories: None,
        pagination: Pagination::new(total, query.page, query.limit),
    })
}

async fn review_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let backend: &SqliteBackend = &state.backend;
    match bounded(&state, backend.get_review_by_slug(&slug)).await {
        Ok(Some(review)) => item(review),
        Ok(None) => failure(StatusCode::NOT_FOUND, "Review not found"),
        Err(error) => fetch_failure("reviews", error),
    }
}

async fn related_reviews(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    match related_for(&state, &slug).await {
        Ok(Some(reviews)) => item(reviews),
        Ok(None) => failure(StatusCode::NOT_FOUND, "Review not found"),
        Err(error) => fetch_failure("reviews", error),
    }
}

async fn related_for(
    state: &AppState,
    slug: &str,
) -> Result<Option<Reviews>, ApiError> {
    let backend: &SqliteBackend = &state.backend;
    let review = match bounded(state, backend.get_review_by_slug(slug)).await? {
        Some(review) => review,
        None => return Ok(None),
    };
    let related = bounded(
        state,
        backend.related_reviews(&review.category, &review.slug, RELATED_LIMIT),
    ).await?;
    Ok(Some(related))
}

async fn featured_reviews(State(state): State<AppState>) -> Response {
    let backend: &SqliteBackend = &state.backend;
    match bounded(&state, backend.featured_reviews(FEATURED_LIMIT)).await {
        Ok(reviews) => item(reviews),
        Err(error) => fetch_failure("reviews", error),
    }
}

async fn trending_reviews(State(state): State<AppState>) -> Response {
    let backend: &SqliteBackend = &state.backend;
    match bounded(&state, backend.trending_reviews(TRENDING_LIMIT)).await {
        Ok(reviews) => item(reviews),
        Err(error) => fetch_failure("reviews", error),
    }
}

async fn video_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let backend: &SqliteBackend = &state.backend;
    match bounded(&state, backend.get_video_by_slug(&slug)).await {
        Ok(Some(video)) => item(video),
        Ok(None) => failure(StatusCode::NOT_FOUND, "Video not found"),
        Err(error) => fetch_failure("videos", error),
    }
}

async fn article_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let backend: &SqliteBackend = &state.backend;
    match bounded(&state, backend.get_article_by_slug(&slug)).await {
        Ok(Some(article)) => item(article),
        Ok(None) => failure(StatusCode::NOT_FOUND, "Article not found"),
        Err(error) => fetch_failure("articles", error),
    }
}

async fn latest_articles(State(state): State<AppState>) -> Response {
    let backend: &SqliteBackend = &state.backend;
    match bounded(&state, backend.latest_articles(LATEST_LIMIT)).await {
        Ok(articles) => item(articles),
        Err(error) => fetch_failure("articles", error),
    }
}

fn item<T: Serialize>(data: T) -> Response {
    Json(ItemEnvelope {
        success: true,
        data,
    }).into_response()
}
