//! Promo Codes Repository

use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar,
};

use crate::domain::promocodes::{
    data::NewPromocode,
    discount::lookup_variants,
    records::{DiscountType, PromocodeId, PromocodeRecord},
};

const LIST_PROMOCODES_SQL: &str = include_str!("sql/list_promocodes.sql");
const FIND_PROMOCODE_BY_CODE_SQL: &str = include_str!("sql/find_promocode_by_code.sql");
const CREATE_PROMOCODE_SQL: &str = include_str!("sql/create_promocode.sql");
const INCREMENT_PROMOCODE_USAGE_SQL: &str = include_str!("sql/increment_promocode_usage.sql");
const DELETE_PROMOCODE_SQL: &str = include_str!("sql/delete_promocode.sql");
const DELETE_ALL_PROMOCODES_SQL: &str = include_str!("sql/delete_all_promocodes.sql");

/// Safety cap on a single promo code listing.
pub(crate) const LIST_PROMOCODES_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPromocodesRepository;

impl PgPromocodesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_promocodes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PromocodeRecord>, sqlx::Error> {
        query_as::<Postgres, PromocodeRecord>(LIST_PROMOCODES_SQL)
            .bind(LIST_PROMOCODES_LIMIT)
            .fetch_all(&mut **tx)
            .await
    }

    /// First stored promo code matching any lookup variant of `code`.
    pub(crate) async fn find_promocode(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<PromocodeRecord>, sqlx::Error> {
        for variant in lookup_variants(code) {
            let found = query_as::<Postgres, PromocodeRecord>(FIND_PROMOCODE_BY_CODE_SQL)
                .bind(variant.as_str())
                .fetch_optional(&mut **tx)
                .await?;

            if found.is_some() {
                return Ok(found);
            }
        }

        Ok(None)
    }

    pub(crate) async fn create_promocode(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promocode: &PromocodeId,
        data: &NewPromocode,
    ) -> Result<PromocodeRecord, sqlx::Error> {
        query_as::<Postgres, PromocodeRecord>(CREATE_PROMOCODE_SQL)
            .bind(promocode.as_str())
            .bind(data.code.as_str())
            .bind(data.discount_type.as_str())
            .bind(data.discount_value)
            .bind(data.max_uses)
            .fetch_one(&mut **tx)
            .await
    }

    /// Bump usage on the first promo code matching any lookup variant of `code`.
    ///
    /// Returns the id of the incremented code, or `None` when nothing matched.
    pub(crate) async fn increment_usage(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Option<PromocodeId>, sqlx::Error> {
        for variant in lookup_variants(code) {
            let incremented = query_scalar::<Postgres, String>(INCREMENT_PROMOCODE_USAGE_SQL)
                .bind(variant.as_str())
                .fetch_optional(&mut **tx)
                .await?;

            if let Some(id) = incremented {
                return Ok(Some(PromocodeId::from_string(id)));
            }
        }

        Ok(None)
    }

    pub(crate) async fn delete_promocode(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promocode: &PromocodeId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PROMOCODE_SQL)
            .bind(promocode.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_all_promocodes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ALL_PROMOCODES_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for PromocodeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let discount_type = row
            .try_get::<String, _>("discount_type")?
            .parse::<DiscountType>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "discount_type".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: PromocodeId::from_string(row.try_get::<String, _>("id")?),
            code: row.try_get("code")?,
            discount_type,
            discount_value: row.try_get("discount_value")?,
            max_uses: row.try_get("max_uses")?,
            current_uses: row.try_get("current_uses")?,
            is_active: row.try_get("is_active")?,
        })
    }
}
