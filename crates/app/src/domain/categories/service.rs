//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::categories::{
        data::{CategoryUpdate, NewCategory},
        errors::CategoriesServiceError,
        records::{CategoryId, CategoryRecord},
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

/// Pair each id with its zero-based position in the supplied sequence.
///
/// A repeated id appears once per occurrence; applied in order, its last
/// position wins.
pub(crate) fn positions(ordered: &[CategoryId]) -> impl Iterator<Item = (&CategoryId, i32)> {
    ordered.iter().zip(0..)
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(
        &self,
        category: CategoryId,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self
            .repository
            .get_category(&mut tx, &category)
            .await?
            .ok_or(CategoriesServiceError::NotFound)?;

        tx.commit().await?;

        Ok(category)
    }

    #[tracing::instrument(
        name = "categories.service.create_category",
        skip(self, category),
        fields(category_id = tracing::field::Empty, order = tracing::field::Empty),
        err
    )]
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let id = CategoryId::new();

        let created = self
            .repository
            .create_category(&mut tx, &id, &category.name, &category.slug)
            .await?;

        tx.commit().await?;

        let span = Span::current();

        span.record("category_id", tracing::field::display(&created.id));
        span.record("order", created.order);

        info!("created category");

        Ok(created)
    }

    #[tracing::instrument(
        name = "categories.service.update_category",
        skip(self, update),
        fields(category_id = %category),
        err
    )]
    async fn update_category(
        &self,
        category: CategoryId,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_category(&mut tx, &category, &update)
            .await?
            .ok_or(CategoriesServiceError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "categories.service.delete_category",
        skip(self),
        fields(category_id = %category),
        err
    )]
    async fn delete_category(&self, category: CategoryId) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_category(&mut tx, &category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    #[tracing::instrument(
        name = "categories.service.reorder_categories",
        skip(self, ordered),
        fields(requested = ordered.len(), updated = tracing::field::Empty),
        err
    )]
    async fn reorder_categories(
        &self,
        ordered: Vec<CategoryId>,
    ) -> Result<u64, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let mut updated = 0;

        for (category, order) in positions(&ordered) {
            updated += self
                .repository
                .set_category_order(&mut tx, category, order)
                .await?;
        }

        tx.commit().await?;

        Span::current().record("updated", updated);

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves all categories, ascending by display order.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(
        &self,
        category: CategoryId,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Creates a category after the current highest display order.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Replaces a category's name and slug, and its order when supplied.
    async fn update_category(
        &self,
        category: CategoryId,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Deletes a category. Products referencing it are left alone.
    async fn delete_category(&self, category: CategoryId) -> Result<(), CategoriesServiceError>;

    /// Sets each listed category's order to its position in `ordered`.
    ///
    /// Returns how many rows were updated; unknown ids are skipped.
    async fn reorder_categories(
        &self,
        ordered: Vec<CategoryId>,
    ) -> Result<u64, CategoriesServiceError>;
}
