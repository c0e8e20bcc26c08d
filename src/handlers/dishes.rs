use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::AppState;
use crate::domain::dish::Dish;
use crate::errors::{AppError, ErrorBody};

#[derive(Debug, Serialize, ToSchema)]
pub struct DishEnvelope {
    pub data: Dish,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DishListEnvelope {
    pub data: Vec<Dish>,
}

/// GET /dishes
#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "All dishes", body = DishListEnvelope),
    ),
    tag = "dishes"
)]
pub async fn list_dishes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let dishes = state.dishes.list_dishes()?;
    Ok(HttpResponse::Ok().json(DishListEnvelope { data: dishes }))
}

/// POST /dishes
#[utoipa::path(
    post,
    path = "/dishes",
    request_body = DishEnvelope,
    responses(
        (status = 201, description = "Dish created", body = DishEnvelope),
        (status = 400, description = "Missing field or bad price", body = ErrorBody),
    ),
    tag = "dishes"
)]
pub async fn create_dish(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let dish = state.dishes.create_dish(&body)?;
    Ok(HttpResponse::Created().json(DishEnvelope { data: dish }))
}

/// GET /dishes/{dishId}
#[utoipa::path(
    get,
    path = "/dishes/{dishId}",
    params(
        ("dishId" = String, Path, description = "Dish id"),
    ),
    responses(
        (status = 200, description = "Dish found", body = DishEnvelope),
        (status = 404, description = "Dish not found", body = ErrorBody),
    ),
    tag = "dishes"
)]
pub async fn get_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let dish = state.dishes.get_dish(&path)?;
    Ok(HttpResponse::Ok().json(DishEnvelope { data: dish }))
}

/// PUT /dishes/{dishId}
#[utoipa::path(
    put,
    path = "/dishes/{dishId}",
    params(
        ("dishId" = String, Path, description = "Dish id"),
    ),
    request_body = DishEnvelope,
    responses(
        (status = 200, description = "Dish updated", body = DishEnvelope),
        (status = 400, description = "Id mismatch, missing field or bad price", body = ErrorBody),
        (status = 404, description = "Dish not found", body = ErrorBody),
    ),
    tag = "dishes"
)]
pub async fn update_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let dish = state.dishes.update_dish(&path, &body)?;
    Ok(HttpResponse::Ok().json(DishEnvelope { data: dish }))
}
