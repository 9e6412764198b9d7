use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = 1)]
    pub product_id: i32,

    #[schema(example = 3)]
    pub ordered_quantity: i32,

    #[serde(default = "default_status")]
    #[schema(example = "in progress")]
    pub status: String,
}

fn default_status() -> String {
    "in progress".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub id: Option<i32>,

    #[schema(example = "shipped")]
    pub order_status: String,
}
