//! Create Order Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use medovik_app::domain::orders::data::NewOrder;

use crate::{
    extensions::*,
    observability::record_order_created,
    orders::{
        errors::into_status_error,
        models::{OrderItemBody, OrderResponse},
    },
    responses::ErrorResponse,
};

/// Create Order Request
///
/// Totals are taken as computed by the client.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<OrderItemBody>,
    pub subtotal: f64,
    #[serde(default)]
    pub discount: f64,
    pub total: f64,
    #[serde(default)]
    pub promocode: Option<String>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            customer_name: request.customer_name,
            customer_phone: request.customer_phone,
            items: request.items.into_iter().map(Into::into).collect(),
            subtotal: request.subtotal,
            discount: request.discount,
            total: request.total,
            promocode: request.promocode,
        }
    }
}

/// Create Order Handler
///
/// A submitted promo code has one use recorded against it.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request", body = ErrorResponse),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip(json, depot, res),
    fields(items = tracing::field::Empty, order_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let app = depot.app_context()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("items", request.items.len());

    let order = app
        .orders
        .create_order(request.into())
        .await
        .map_err(into_status_error)?;

    span.record("order_id", tracing::field::display(&order.id));

    record_order_created(order.promocode.is_some());

    res.status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
