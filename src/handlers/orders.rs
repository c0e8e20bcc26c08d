use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::AppState;
use crate::domain::order::Order;
use crate::errors::{AppError, ErrorBody};

// ── Response envelopes ───────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderEnvelope {
    pub data: Order,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListEnvelope {
    pub data: Vec<Order>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
///
/// Every stored order, in creation order.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = OrderListEnvelope),
    ),
    tag = "orders"
)]
pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let orders = state.orders.list_orders()?;
    Ok(HttpResponse::Ok().json(OrderListEnvelope { data: orders }))
}

/// POST /orders
///
/// Validates `data` and stores the order under a freshly generated id. Any
/// `id` in the body is ignored. The initial status is taken as submitted.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderEnvelope,
    responses(
        (status = 201, description = "Order created", body = OrderEnvelope),
        (status = 400, description = "Missing field, empty dishes or bad quantity", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let order = state.orders.create_order(&body)?;
    Ok(HttpResponse::Created().json(OrderEnvelope { data: order }))
}

/// GET /orders/{orderId}
#[utoipa::path(
    get,
    path = "/orders/{orderId}",
    params(
        ("orderId" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderEnvelope),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order = state.orders.get_order(&path)?;
    Ok(HttpResponse::Ok().json(OrderEnvelope { data: order }))
}

/// PUT /orders/{orderId}
///
/// Replaces every business field of the order. A delivered order cannot be
/// changed, and `delivered` cannot be set through an update.
#[utoipa::path(
    put,
    path = "/orders/{orderId}",
    params(
        ("orderId" = String, Path, description = "Order id"),
    ),
    request_body = OrderEnvelope,
    responses(
        (status = 200, description = "Order updated", body = OrderEnvelope),
        (status = 400, description = "Id mismatch, invalid field or illegal status", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn update_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let order = state.orders.update_order(&path, &body)?;
    Ok(HttpResponse::Ok().json(OrderEnvelope { data: order }))
}

/// DELETE /orders/{orderId}
///
/// Only pending orders can be deleted.
#[utoipa::path(
    delete,
    path = "/orders/{orderId}",
    params(
        ("orderId" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Order is not pending", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.orders.delete_order(&path)?;
    Ok(HttpResponse::NoContent().finish())
}
