//! Order queue endpoints.
//!
//! Pass-through reads and writes over the order repository; all of them
//! sit behind the JWT gate.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use pt_core::domain::entities::order::{Order, OrderPriority};
use pt_core::repositories::{OrderRepository, UserRepository, VideoRepository};

use crate::dto::order_dto::{
    CreateOrderRequest, ListOrdersQuery, OrderListResponse, UpdateOrderStatusRequest,
};
use crate::handlers::error::{handle_domain_error, handle_validation_error};
use crate::routes::AppState;

/// GET /api/orders: list orders, newest first, with an optional status
/// filter and limit/offset paging
pub async fn list_orders<U, O, V>(
    state: web::Data<AppState<U, O, V>>,
    query: web::Query<ListOrdersQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    V: VideoRepository + 'static,
{
    let orders = match state
        .order_repository
        .list(query.status, query.limit, query.offset)
        .await
    {
        Ok(orders) => orders,
        Err(error) => return handle_domain_error(error),
    };

    let total = match state.order_repository.count(query.status).await {
        Ok(total) => total,
        Err(error) => return handle_domain_error(error),
    };

    HttpResponse::Ok().json(OrderListResponse { orders, total })
}

/// POST /api/orders: enqueue a new order in the waiting state
pub async fn create_order<U, O, V>(
    state: web::Data<AppState<U, O, V>>,
    request: web::Json<CreateOrderRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    V: VideoRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    let order = Order::new(
        request.customer_name.clone(),
        request.customer_email.clone(),
        request.items_count,
        request.priority.unwrap_or(OrderPriority::Medium),
    );

    match state.order_repository.create(order).await {
        Ok(order) => HttpResponse::Created().json(order),
        Err(error) => handle_domain_error(error),
    }
}

/// PUT /api/orders/{id}/status: move an order through the packing flow
pub async fn update_order_status<U, O, V>(
    state: web::Data<AppState<U, O, V>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateOrderStatusRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OrderRepository + 'static,
    V: VideoRepository + 'static,
{
    match state
        .order_repository
        .update_status(path.into_inner(), request.status)
        .await
    {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(error) => handle_domain_error(error),
    }
}
