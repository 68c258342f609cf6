//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};

use crate::domain::orders::records::{OrderId, OrderItem, OrderRecord};

const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");
const DELETE_ALL_ORDERS_SQL: &str = include_str!("sql/delete_all_orders.sql");

/// Safety cap on a single order listing.
pub(crate) const LIST_ORDERS_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(LIST_ORDERS_LIMIT)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &OrderRecord,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.id.as_str())
            .bind(order.customer_name.as_str())
            .bind(order.customer_phone.as_str())
            .bind(Json(&order.items))
            .bind(order.subtotal)
            .bind(order.discount)
            .bind(order.total)
            .bind(order.promocode.as_deref())
            .bind(SqlxTimestamp::from(order.created_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &OrderId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_all_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ALL_ORDERS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderId::from_string(row.try_get::<String, _>("id")?),
            customer_name: row.try_get("customer_name")?,
            customer_phone: row.try_get("customer_phone")?,
            items: row.try_get::<Json<Vec<OrderItem>>, _>("items")?.0,
            subtotal: row.try_get("subtotal")?,
            discount: row.try_get("discount")?,
            total: row.try_get("total")?,
            promocode: row.try_get("promocode")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
