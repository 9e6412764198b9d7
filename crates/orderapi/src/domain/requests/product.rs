use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Smartphone")]
    pub name: String,

    #[schema(example = "6.1 inch display, 128GB storage")]
    pub description: String,

    #[schema(example = 99999)]
    pub price: i64,

    #[schema(example = 100)]
    pub available_quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Smartphone")]
    pub name: String,

    #[schema(example = "6.1 inch display, 256GB storage")]
    pub description: String,

    #[schema(example = 89999)]
    pub price: i64,

    #[schema(example = 75)]
    pub available_quantity: i32,
}
