use sqlx::{
    SqlitePool,
    sqlite::SqliteConnectOptions,
};
use std::{
    str::FromStr,
    sync::Arc,
};
use trpcore::error::BackendError;

pub struct SqliteBackend {
    pub(crate) pool: Arc<SqlitePool>,
    pub(crate) url: String,
}

mod impls;

pub(crate) mod chrono {
    #[cfg(not(test))]
    pub use ::chrono::Utc;
    #[cfg(test)]
    pub use test_trp::chrono::Utc;
}

impl SqliteBackend {
    pub async fn from_url(url: &str) -> Result<Self, BackendError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(BackendError::from)?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await
            .map_err(BackendError::from)?;
        Ok(Self {
            pool: Arc::new(pool),
            url: url.to_string(),
        })
    }

    pub async fn run_migration(self) -> Result<Self, BackendError> {
        log::info!("running content schema migrations on {}", self.url);
        sqlx::migrate!()
            .run(&*self.pool)
            .await
            .map_err(sqlx::Error::from)?;
        Ok(self)
    }

    pub fn url(&self) -> &str {
        self.url.as_ref()
    }
}
