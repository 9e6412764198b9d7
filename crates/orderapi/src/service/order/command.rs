use crate::{
    abstract_trait::order::{
        repository::{CreateOrderOutcome, DynOrderCommandRepository},
        service::OrderCommandServiceTrait,
    },
    domain::{
        requests::order::{CreateOrderRequest, UpdateOrderStatusRequest},
        response::{api::ApiResponse, order::OrderResponse},
    },
};
use shared::errors::{RepositoryError, ServiceError};

use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandService {
    repository: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(repository: DynOrderCommandRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<Option<OrderResponse>>, ServiceError> {
        info!(
            "🏗️ Creating new order for product ID {} (quantity {})",
            req.product_id, req.ordered_quantity
        );

        match self.repository.create_order(req).await {
            Ok(CreateOrderOutcome::Created(order)) => Ok(ApiResponse {
                status: "success".to_string(),
                message: "Order created successfully".to_string(),
                data: Some(OrderResponse::from(order)),
            }),
            Ok(CreateOrderOutcome::InsufficientStock { product, requested }) => Ok(ApiResponse {
                status: "refused".to_string(),
                message: format!(
                    "Insufficient stock for product {}: requested={}, available={}",
                    product.name, requested, product.available_quantity
                ),
                data: None,
            }),
            Err(RepositoryError::NotFound) => {
                error!("❌ Product with id {} not found", req.product_id);
                Err(ServiceError::NotFound(format!(
                    "Product with id {} not found",
                    req.product_id
                )))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn update_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order_id = req.id.unwrap_or_default();
        info!("✏️ Updating order ID {} status to {}", order_id, req.order_status);

        match self.repository.update_order_status(req).await {
            Ok(order) => Ok(ApiResponse {
                status: "success".to_string(),
                message: "Order status updated successfully".to_string(),
                data: OrderResponse::from(order),
            }),
            Err(RepositoryError::NotFound) => {
                error!("❌ Order with id {} not found", order_id);
                Err(ServiceError::NotFound(format!("Order with id {order_id} not found")))
            }
            Err(err) => Err(err.into()),
        }
    }
}
