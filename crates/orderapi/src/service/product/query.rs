use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::{api::ApiResponse, product::ProductResponse},
};
use shared::errors::ServiceError;

use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct ProductQueryService {
    repository: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(repository: DynProductQueryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.repository.find_all().await?;
        let responses = products.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data: responses,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        match self.repository.find_by_id(id).await {
            Ok(Some(product)) => Ok(ApiResponse {
                status: "success".to_string(),
                message: "Product retrieved successfully".to_string(),
                data: ProductResponse::from(product),
            }),
            Ok(None) => {
                error!("❌ Product with id {} not found", id);
                Err(ServiceError::NotFound(format!("Product with id {id} not found")))
            }
            Err(err) => Err(err.into()),
        }
    }
}
