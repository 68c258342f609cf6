//! Promo codes service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::promocodes::{
        data::{NewPromocode, PromocodeValidation},
        discount::{compute_discount, ensure_redeemable},
        errors::PromocodesServiceError,
        records::{PromocodeId, PromocodeRecord},
        repository::PgPromocodesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgPromocodesService {
    db: Db,
    repository: PgPromocodesRepository,
}

impl PgPromocodesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPromocodesRepository::new(),
        }
    }
}

#[async_trait]
impl PromocodesService for PgPromocodesService {
    async fn list_promocodes(&self) -> Result<Vec<PromocodeRecord>, PromocodesServiceError> {
        let mut tx = self.db.begin().await?;

        let promocodes = self.repository.list_promocodes(&mut tx).await?;

        tx.commit().await?;

        Ok(promocodes)
    }

    #[tracing::instrument(
        name = "promocodes.service.create_promocode",
        skip(self, promocode),
        fields(
            promocode_id = tracing::field::Empty,
            discount_type = %promocode.discount_type,
        ),
        err
    )]
    async fn create_promocode(
        &self,
        promocode: NewPromocode,
    ) -> Result<PromocodeRecord, PromocodesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_promocode(&mut tx, &PromocodeId::new(), &promocode)
            .await?;

        tx.commit().await?;

        Span::current().record("promocode_id", tracing::field::display(&created.id));

        info!("created promo code");

        Ok(created)
    }

    #[tracing::instrument(
        name = "promocodes.service.delete_promocode",
        skip(self),
        fields(promocode_id = %promocode),
        err
    )]
    async fn delete_promocode(&self, promocode: PromocodeId) -> Result<(), PromocodesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_promocode(&mut tx, &promocode)
            .await?;

        if rows_affected == 0 {
            return Err(PromocodesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn validate_promocode(
        &self,
        code: String,
        subtotal: f64,
    ) -> Result<PromocodeValidation, PromocodesServiceError> {
        let mut tx = self.db.begin().await?;

        let promocode = self
            .repository
            .find_promocode(&mut tx, &code)
            .await?
            .ok_or(PromocodesServiceError::NotFound)?;

        tx.commit().await?;

        ensure_redeemable(&promocode)?;

        Ok(PromocodeValidation {
            discount: compute_discount(
                promocode.discount_type,
                promocode.discount_value,
                subtotal,
            ),
            code: promocode.code,
            discount_type: promocode.discount_type,
            discount_value: promocode.discount_value,
        })
    }
}

#[automock]
#[async_trait]
pub trait PromocodesService: Send + Sync {
    /// Retrieves all promo codes in creation order.
    async fn list_promocodes(&self) -> Result<Vec<PromocodeRecord>, PromocodesServiceError>;

    /// Creates an active promo code with no recorded uses.
    async fn create_promocode(
        &self,
        promocode: NewPromocode,
    ) -> Result<PromocodeRecord, PromocodesServiceError>;

    /// Deletes a promo code.
    async fn delete_promocode(&self, promocode: PromocodeId) -> Result<(), PromocodesServiceError>;

    /// Checks that `code` can be redeemed and computes its discount on `subtotal`.
    ///
    /// Never changes the code's usage counter.
    async fn validate_promocode(
        &self,
        code: String,
        subtotal: f64,
    ) -> Result<PromocodeValidation, PromocodesServiceError>;
}
