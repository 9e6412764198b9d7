use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{api::ApiResponse, product::ProductResponse},
    },
};
use shared::errors::{RepositoryError, ServiceError};

use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    repository: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(repository: DynProductCommandRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating new product: {}", req.name);

        let product = self.repository.create_product(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product_id = req.id.unwrap_or_default();
        info!("✏️ Updating product ID {}", product_id);

        match self.repository.update_product(req).await {
            Ok(product) => Ok(ApiResponse {
                status: "success".to_string(),
                message: "Product updated successfully".to_string(),
                data: ProductResponse::from(product),
            }),
            Err(RepositoryError::NotFound) => {
                error!("❌ Product with id {} not found", product_id);
                Err(ServiceError::NotFound(format!(
                    "Product with id {product_id} not found"
                )))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product ID {}", id);

        match self.repository.delete_product(id).await {
            Ok(()) => Ok(ApiResponse {
                status: "success".to_string(),
                message: format!("Product with id {id} deleted successfully"),
                data: (),
            }),
            Err(RepositoryError::NotFound) => {
                error!("❌ Product with id {} not found", id);
                Err(ServiceError::NotFound(format!("Product with id {id} not found")))
            }
            Err(err) => Err(err.into()),
        }
    }
}
