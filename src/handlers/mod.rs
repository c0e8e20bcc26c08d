pub mod dishes;
pub mod orders;

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use utoipa::OpenApi;

use crate::domain::dish::Dish;
use crate::domain::order::{Order, OrderStatus};
use crate::errors::{AppError, ErrorBody};

#[derive(OpenApi)]
#[openapi(
    paths(
        dishes::list_dishes,
        dishes::create_dish,
        dishes::get_dish,
        dishes::update_dish,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
    ),
    components(schemas(
        Dish,
        Order,
        OrderStatus,
        ErrorBody,
        dishes::DishEnvelope,
        dishes::DishListEnvelope,
        orders::OrderEnvelope,
        orders::OrderListEnvelope,
    )),
    tags(
        (name = "dishes", description = "Menu dishes"),
        (name = "orders", description = "Customer orders")
    )
)]
pub struct ApiDoc;

/// Register every resource route plus the 404/405 fallbacks.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource("/dishes")
                .route(web::get().to(dishes::list_dishes))
                .route(web::post().to(dishes::create_dish))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/dishes/{dishId}")
                .route(web::get().to(dishes::get_dish))
                .route(web::put().to(dishes::update_dish))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/orders")
                .route(web::get().to(orders::list_orders))
                .route(web::post().to(orders::create_order))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/orders/{orderId}")
                .route(web::get().to(orders::get_order))
                .route(web::put().to(orders::update_order))
                .route(web::delete().to(orders::delete_order))
                .default_service(web::route().to(method_not_allowed)),
        )
        .default_service(web::route().to(path_not_found));
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}

async fn path_not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::PathNotFound(req.path().to_string()))
}
