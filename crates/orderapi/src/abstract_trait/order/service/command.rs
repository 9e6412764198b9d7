use crate::domain::{
    requests::order::{CreateOrderRequest, UpdateOrderStatusRequest},
    response::{api::ApiResponse, order::OrderResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    /// Creation carries `data: None` when the order is refused for lack of
    /// stock; the refusal is reported in `status`/`message`.
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<Option<OrderResponse>>, ServiceError>;
    async fn update_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
