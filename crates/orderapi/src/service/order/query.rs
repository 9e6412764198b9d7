use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::response::{api::ApiResponse, order::OrderResponse},
};
use shared::errors::ServiceError;

use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct OrderQueryService {
    repository: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(repository: DynOrderQueryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.repository.find_all().await?;
        let responses = orders.into_iter().map(OrderResponse::from).collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders retrieved successfully".to_string(),
            data: responses,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        match self.repository.find_by_id(id).await {
            Ok(Some(order)) => Ok(ApiResponse {
                status: "success".to_string(),
                message: "Order retrieved successfully".to_string(),
                data: OrderResponse::from(order),
            }),
            Ok(None) => {
                error!("❌ Order with id {} not found", id);
                Err(ServiceError::NotFound(format!("Order with id {id} not found")))
            }
            Err(err) => Err(err.into()),
        }
    }
}
