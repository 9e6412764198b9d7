use crate::{
    domain::requests::order::{CreateOrderRequest, UpdateOrderStatusRequest},
    model::{order::Order as OrderModel, product::Product as ProductModel},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

/// Result of an order creation attempt. A stock shortfall is a normal
/// outcome, not a repository error.
#[derive(Debug)]
pub enum CreateOrderOutcome {
    Created(OrderModel),
    InsufficientStock {
        product: ProductModel,
        requested: i32,
    },
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<CreateOrderOutcome, RepositoryError>;
    async fn update_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<OrderModel, RepositoryError>;
}
