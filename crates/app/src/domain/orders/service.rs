//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{Span, info, warn};

use crate::{
    database::Db,
    domain::{
        orders::{
            data::NewOrder,
            errors::OrdersServiceError,
            records::{OrderId, OrderRecord},
            repository::PgOrdersRepository,
        },
        promocodes::repository::PgPromocodesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    promocodes: PgPromocodesRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            promocodes: PgPromocodesRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, order),
        fields(
            order_id = tracing::field::Empty,
            items = order.items.len(),
            total = order.total,
            promocode_id = tracing::field::Empty,
        ),
        err
    )]
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        if order.totals_disagree() {
            warn!(
                subtotal = order.subtotal,
                discount = order.discount,
                "submitted order totals do not add up"
            );
        }

        let mut tx = self.db.begin().await?;

        if let Some(code) = order.redeemed_code() {
            match self.promocodes.increment_usage(&mut tx, code).await? {
                Some(promocode) => {
                    Span::current().record("promocode_id", tracing::field::display(&promocode));
                }
                None => warn!(code, "order references an unknown promo code"),
            }
        }

        let record = OrderRecord {
            id: OrderId::new(),
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            items: order.items,
            subtotal: order.subtotal,
            discount: order.discount,
            total: order.total,
            promocode: order.promocode,
            created_at: Timestamp::now(),
        };

        let created = self.repository.create_order(&mut tx, &record).await?;

        tx.commit().await?;

        Span::current().record("order_id", tracing::field::display(&created.id));

        info!("created order");

        Ok(created)
    }

    #[tracing::instrument(
        name = "orders.service.delete_order",
        skip(self),
        fields(order_id = %order),
        err
    )]
    async fn delete_order(&self, order: OrderId) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_order(&mut tx, &order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves orders, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Stores a submitted order as-is.
    ///
    /// When the order names a promo code, that code's usage is incremented in
    /// the same transaction without re-checking whether it is still redeemable.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Deletes an order.
    async fn delete_order(&self, order: OrderId) -> Result<(), OrdersServiceError>;
}
