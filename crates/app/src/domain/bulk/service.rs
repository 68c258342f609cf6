//! Bulk data service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::{Postgres, Transaction, query};
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        about::repository::PgAboutRepository,
        bulk::{
            collections::{Collection, PurgeReport, PurgeScope},
            errors::BulkServiceError,
            fixtures::{CATEGORIES, PRODUCTS},
        },
        categories::repository::PgCategoriesRepository,
        orders::repository::PgOrdersRepository,
        products::repository::PgProductsRepository,
        promocodes::repository::PgPromocodesRepository,
    },
};

const LOCK_CATALOG_SQL: &str = include_str!("sql/lock_catalog.sql");

/// Advisory lock key serializing whole-catalog writes.
const CATALOG_LOCK_KEY: i64 = 0x006d_6564_6f76_696b;

/// Result of a seed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Categories already existed, so nothing was written.
    AlreadySeeded,

    /// The canonical catalog was written.
    Seeded { categories: u64, products: u64 },
}

/// Result of resetting the canonical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoriesReset {
    pub deleted: u64,
    pub inserted: u64,
}

#[derive(Debug, Clone)]
pub struct PgBulkService {
    db: Db,
    categories: PgCategoriesRepository,
    products: PgProductsRepository,
    promocodes: PgPromocodesRepository,
    orders: PgOrdersRepository,
    about: PgAboutRepository,
}

impl PgBulkService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            categories: PgCategoriesRepository::new(),
            products: PgProductsRepository::new(),
            promocodes: PgPromocodesRepository::new(),
            orders: PgOrdersRepository::new(),
            about: PgAboutRepository::new(),
        }
    }

    /// Block until no other seed or category reset holds the catalog.
    async fn lock_catalog(&self, tx: &mut Transaction<'_, Postgres>) -> Result<(), sqlx::Error> {
        query(LOCK_CATALOG_SQL)
            .bind(CATALOG_LOCK_KEY)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    async fn insert_canonical_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for fixture in &CATEGORIES {
            self.categories
                .insert_category(tx, &fixture.to_record())
                .await?;

            inserted += 1;
        }

        Ok(inserted)
    }

    async fn purge_collection(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        collection: Collection,
    ) -> Result<u64, sqlx::Error> {
        match collection {
            Collection::Orders => self.orders.delete_all_orders(tx).await,
            Collection::Products => self.products.delete_all_products(tx).await,
            Collection::Categories => self.categories.delete_all_categories(tx).await,
            Collection::Promocodes => self.promocodes.delete_all_promocodes(tx).await,
            Collection::About => self.about.delete_all_about(tx).await,
        }
    }
}

#[async_trait]
impl BulkService for PgBulkService {
    #[tracing::instrument(name = "bulk.service.seed", skip(self), err)]
    async fn seed(&self) -> Result<SeedOutcome, BulkServiceError> {
        let mut tx = self.db.begin().await?;

        self.lock_catalog(&mut tx).await?;

        if self.categories.count_categories(&mut tx).await? > 0 {
            tx.commit().await?;

            return Ok(SeedOutcome::AlreadySeeded);
        }

        let categories = self.insert_canonical_categories(&mut tx).await?;

        let created_at = Timestamp::now();
        let mut products = 0;

        for fixture in PRODUCTS {
            self.products
                .create_product(&mut tx, &fixture.to_record(created_at))
                .await?;

            products += 1;
        }

        tx.commit().await?;

        info!(categories, products, "seeded catalog");

        Ok(SeedOutcome::Seeded {
            categories,
            products,
        })
    }

    #[tracing::instrument(
        name = "bulk.service.fix_categories",
        skip(self),
        fields(deleted = tracing::field::Empty),
        err
    )]
    async fn fix_categories(&self) -> Result<CategoriesReset, BulkServiceError> {
        let mut tx = self.db.begin().await?;

        self.lock_catalog(&mut tx).await?;

        let deleted = self.categories.delete_all_categories(&mut tx).await?;
        let inserted = self.insert_canonical_categories(&mut tx).await?;

        tx.commit().await?;

        Span::current().record("deleted", deleted);

        Ok(CategoriesReset { deleted, inserted })
    }

    #[tracing::instrument(
        name = "bulk.service.purge",
        skip(self),
        fields(total = tracing::field::Empty),
        err
    )]
    async fn purge(&self, scope: PurgeScope) -> Result<PurgeReport, BulkServiceError> {
        let mut tx = self.db.begin().await?;

        let mut report = PurgeReport::default();

        for collection in scope.collections() {
            let deleted = self.purge_collection(&mut tx, collection).await?;

            report.deleted.push((collection, deleted));
        }

        tx.commit().await?;

        Span::current().record("total", report.total());

        info!("purged collections");

        Ok(report)
    }
}

#[automock]
#[async_trait]
pub trait BulkService: Send + Sync {
    /// Writes the canonical categories and products unless any category exists.
    async fn seed(&self) -> Result<SeedOutcome, BulkServiceError>;

    /// Deletes every category and re-inserts the canonical set.
    async fn fix_categories(&self) -> Result<CategoriesReset, BulkServiceError>;

    /// Deletes every row in the collections covered by `scope`.
    async fn purge(&self, scope: PurgeScope) -> Result<PurgeReport, BulkServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            about::AboutService, categories::CategoriesService, products::ProductsService,
        },
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn seed_twice_writes_the_catalog_once() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx.bulk.seed().await?;
        let second = ctx.bulk.seed().await?;

        assert_eq!(
            first,
            SeedOutcome::Seeded {
                categories: 6,
                products: 21
            }
        );
        assert_eq!(second, SeedOutcome::AlreadySeeded);
        assert_eq!(ctx.categories.list_categories().await?.len(), 6);
        assert_eq!(ctx.products.list_products(None).await?.len(), 21);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_seeds_write_the_catalog_once() -> TestResult {
        let ctx = TestContext::new().await;

        let (left, right) = tokio::join!(ctx.bulk.seed(), ctx.bulk.seed());

        let mut outcomes = [left?, right?];
        outcomes.sort_by_key(|outcome| matches!(outcome, SeedOutcome::AlreadySeeded));

        assert!(
            matches!(outcomes[0], SeedOutcome::Seeded { .. }),
            "one caller should seed, got {outcomes:?}"
        );
        assert_eq!(outcomes[1], SeedOutcome::AlreadySeeded);
        assert_eq!(ctx.categories.list_categories().await?.len(), 6);

        Ok(())
    }

    #[tokio::test]
    async fn fix_categories_replaces_whatever_was_there() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.bulk.seed().await?;
        ctx.bulk.fix_categories().await?;

        let reset = ctx.bulk.fix_categories().await?;

        let slugs: Vec<String> = ctx
            .categories
            .list_categories()
            .await?
            .into_iter()
            .map(|c| c.slug)
            .collect();

        assert_eq!(
            reset,
            CategoriesReset {
                deleted: 6,
                inserted: 6
            }
        );
        assert_eq!(
            slugs,
            [
                "honey",
                "bee-products",
                "tinctures",
                "creams",
                "candles",
                "accessories"
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn purge_all_reports_counts_per_collection() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.bulk.seed().await?;
        ctx.about.get_about().await?;

        let report = ctx.bulk.purge(PurgeScope::All).await?;

        assert_eq!(
            report.deleted.as_slice(),
            [
                (Collection::Orders, 0),
                (Collection::Products, 21),
                (Collection::Categories, 6),
                (Collection::Promocodes, 0),
                (Collection::About, 1),
            ]
        );
        assert!(ctx.categories.list_categories().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn purge_one_collection_leaves_the_rest() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.bulk.seed().await?;

        let report = ctx
            .bulk
            .purge(PurgeScope::One(Collection::Products))
            .await?;

        assert_eq!(report.total(), 21);
        assert_eq!(ctx.categories.list_categories().await?.len(), 6);

        Ok(())
    }
}
