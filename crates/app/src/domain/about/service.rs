//! About service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::about::{
        errors::AboutServiceError, records::AboutRecord, repository::PgAboutRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAboutService {
    db: Db,
    repository: PgAboutRepository,
}

impl PgAboutService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAboutRepository::new(),
        }
    }
}

#[async_trait]
impl AboutService for PgAboutService {
    async fn get_about(&self) -> Result<AboutRecord, AboutServiceError> {
        let mut tx = self.db.begin().await?;

        if let Some(about) = self.repository.get_about(&mut tx).await? {
            tx.commit().await?;

            return Ok(about);
        }

        // A concurrent first read may have inserted already; whichever row
        // landed first is the one returned.
        self.repository
            .insert_about(&mut tx, &AboutRecord::default())
            .await?;

        let about = self
            .repository
            .get_about(&mut tx)
            .await?
            .unwrap_or_default();

        tx.commit().await?;

        info!("stored default about content");

        Ok(about)
    }

    #[tracing::instrument(
        name = "about.service.update_about",
        skip(self, about),
        fields(features = about.features.len()),
        err
    )]
    async fn update_about(&self, about: AboutRecord) -> Result<AboutRecord, AboutServiceError> {
        let mut tx = self.db.begin().await?;

        let stored = self.repository.upsert_about(&mut tx, &about).await?;

        tx.commit().await?;

        Ok(stored)
    }
}

#[automock]
#[async_trait]
pub trait AboutService: Send + Sync {
    /// Retrieves the About Us content, storing the default on first read.
    async fn get_about(&self) -> Result<AboutRecord, AboutServiceError>;

    /// Replaces the About Us content, creating it when absent.
    async fn update_about(&self, about: AboutRecord) -> Result<AboutRecord, AboutServiceError>;
}
