use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use orderapi::{
    domain::response::{api::ApiResponse, order::OrderResponse, product::ProductResponse},
    handler::AppRouter,
    migrations::run_migrations,
    model::order_item::OrderItem,
    state::AppState,
};
use serde_json::{Value, json};
use shared::config::{ConnectionManager, ConnectionPool};
use tempfile::TempDir;
use tower::ServiceExt;

async fn setup() -> (Router, ConnectionPool, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("application.sqlite");
    let url = format!("sqlite://{}", db_path.display());

    let pool = ConnectionManager::new_pool(&url).await.expect("create pool");
    run_migrations(&pool).await.expect("create schema");

    let app = AppRouter::build(AppState::new(pool.clone()));
    (app, pool, dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

async fn create_product(app: &Router, name: &str, price: i64, quantity: i32) -> ProductResponse {
    let (status, body) = send(
        app,
        "POST",
        "/products",
        Some(json!({
            "name": name,
            "description": "test item",
            "price": price,
            "available_quantity": quantity,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let envelope: ApiResponse<ProductResponse> =
        serde_json::from_value(body).expect("product envelope");
    assert_eq!(envelope.status, "success");
    envelope.data
}

async fn create_order(app: &Router, product_id: i32, quantity: i32) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/orders",
        Some(json!({
            "product_id": product_id,
            "ordered_quantity": quantity,
        })),
    )
    .await
}

async fn stock_of(pool: &ConnectionPool, product_id: i32) -> i32 {
    sqlx::query_scalar::<_, i32>("SELECT available_quantity FROM product WHERE id = ?")
        .bind(product_id)
        .fetch_one(pool)
        .await
        .expect("fetch stock")
}

async fn order_count(pool: &ConnectionPool) -> i64 {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "order""#)
        .fetch_one(pool)
        .await
        .expect("count orders")
}

#[tokio::test]
async fn create_then_fetch_product_returns_same_fields() {
    let (app, _pool, _dir) = setup().await;

    let created = create_product(&app, "Smartphone", 45000, 12).await;

    let (status, body) = send(&app, "GET", &format!("/products/{}", created.id), None).await;
    assert_eq!(status, StatusCode::OK);

    let envelope: ApiResponse<ProductResponse> =
        serde_json::from_value(body).expect("product envelope");
    assert_eq!(envelope.message, "Product retrieved successfully");
    assert_eq!(envelope.data.id, created.id);
    assert_eq!(envelope.data.name, "Smartphone");
    assert_eq!(envelope.data.description, "test item");
    assert_eq!(envelope.data.price, 45000);
    assert_eq!(envelope.data.available_quantity, 12);
}

#[tokio::test]
async fn product_list_starts_empty_then_grows() {
    let (app, _pool, _dir) = setup().await;

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let envelope: ApiResponse<Vec<ProductResponse>> =
        serde_json::from_value(body).expect("list envelope");
    assert!(envelope.data.is_empty());

    create_product(&app, "Keyboard", 2500, 3).await;
    create_product(&app, "Monitor", 15000, 7).await;

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let envelope: ApiResponse<Vec<ProductResponse>> =
        serde_json::from_value(body).expect("list envelope");
    assert_eq!(envelope.data.len(), 2);
    assert_eq!(envelope.data[0].name, "Keyboard");
    assert_eq!(envelope.data[1].name, "Monitor");
}

#[tokio::test]
async fn fetching_missing_product_returns_404() {
    let (app, _pool, _dir) = setup().await;

    let (status, body) = send(&app, "GET", "/products/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Product with id 42 not found");
}

#[tokio::test]
async fn update_product_replaces_all_fields() {
    let (app, _pool, _dir) = setup().await;

    let created = create_product(&app, "Smartphone", 45000, 12).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/products/{}", created.id),
        Some(json!({
            "name": "Smartphone Pro",
            "description": "updated item",
            "price": 52000,
            "available_quantity": 5,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let envelope: ApiResponse<ProductResponse> =
        serde_json::from_value(body).expect("product envelope");
    assert_eq!(envelope.message, "Product updated successfully");
    assert_eq!(envelope.data.name, "Smartphone Pro");
    assert_eq!(envelope.data.price, 52000);

    let (status, body) = send(&app, "GET", &format!("/products/{}", created.id), None).await;
    assert_eq!(status, StatusCode::OK);
    let envelope: ApiResponse<ProductResponse> =
        serde_json::from_value(body).expect("product envelope");
    assert_eq!(envelope.data.description, "updated item");
    assert_eq!(envelope.data.available_quantity, 5);
}

#[tokio::test]
async fn updating_missing_product_returns_404() {
    let (app, _pool, _dir) = setup().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/products/42",
        Some(json!({
            "name": "Ghost",
            "description": "missing",
            "price": 1,
            "available_quantity": 1,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product with id 42 not found");
}

#[tokio::test]
async fn delete_product_then_fetch_returns_404() {
    let (app, _pool, _dir) = setup().await;

    let created = create_product(&app, "Keyboard", 2500, 3).await;

    let (status, body) = send(&app, "DELETE", &format!("/products/{}", created.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["message"],
        format!("Product with id {} deleted successfully", created.id)
    );

    let (status, _body) = send(&app, "GET", &format!("/products/{}", created.id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_missing_product_returns_404() {
    let (app, _pool, _dir) = setup().await;

    let (status, body) = send(&app, "DELETE", "/products/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product with id 42 not found");
}

#[tokio::test]
async fn create_product_with_empty_name_is_rejected() {
    let (app, pool, _dir) = setup().await;

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "name": "",
            "description": "nameless",
            "price": 100,
            "available_quantity": 1,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["message"], "name: Name is required");

    let products = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM product")
        .fetch_one(&pool)
        .await
        .expect("count products");
    assert_eq!(products, 0);
}

#[tokio::test]
async fn malformed_json_body_is_rejected() {
    let (app, _pool, _dir) = setup().await;

    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["error"], "Invalid JSON");
}

#[tokio::test]
async fn order_within_stock_decrements_and_creates_rows() {
    let (app, pool, _dir) = setup().await;

    let product = create_product(&app, "Keyboard", 2500, 10).await;

    let (status, body) = create_order(&app, product.id, 3).await;
    assert_eq!(status, StatusCode::CREATED);

    let envelope: ApiResponse<OrderResponse> =
        serde_json::from_value(body).expect("order envelope");
    assert_eq!(envelope.status, "success");
    assert_eq!(envelope.message, "Order created successfully");
    assert!(!envelope.data.date.is_empty());

    assert_eq!(stock_of(&pool, product.id).await, 7);
    assert_eq!(order_count(&pool).await, 1);

    let item = sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, product_id, ordered_quantity FROM orderitem WHERE order_id = ?",
    )
    .bind(envelope.data.id)
    .fetch_one(&pool)
    .await
    .expect("fetch order item");
    assert_eq!(item.product_id, product.id);
    assert_eq!(item.ordered_quantity, 3);
}

#[tokio::test]
async fn order_uses_default_status_in_progress() {
    let (app, _pool, _dir) = setup().await;

    let product = create_product(&app, "Monitor", 15000, 5).await;

    let (status, body) = create_order(&app, product.id, 1).await;
    assert_eq!(status, StatusCode::CREATED);

    let envelope: ApiResponse<OrderResponse> =
        serde_json::from_value(body).expect("order envelope");
    assert_eq!(envelope.data.status, "in progress");
}

#[tokio::test]
async fn order_accepts_an_explicit_status() {
    let (app, _pool, _dir) = setup().await;

    let product = create_product(&app, "Monitor", 15000, 5).await;

    let (status, body) = send(
        &app,
        "POST",
        "/orders",
        Some(json!({
            "product_id": product.id,
            "ordered_quantity": 2,
            "status": "paid",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let envelope: ApiResponse<OrderResponse> =
        serde_json::from_value(body).expect("order envelope");
    assert_eq!(envelope.data.status, "paid");
}

#[tokio::test]
async fn order_exceeding_stock_is_refused() {
    let (app, pool, _dir) = setup().await;

    let product = create_product(&app, "Monitor", 15000, 2).await;

    let (status, body) = create_order(&app, product.id, 5).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "refused");
    assert_eq!(
        body["message"],
        "Insufficient stock for product Monitor: requested=5, available=2"
    );
    assert!(body["data"].is_null());

    assert_eq!(stock_of(&pool, product.id).await, 2);
    assert_eq!(order_count(&pool).await, 0);
}

#[tokio::test]
async fn order_for_missing_product_returns_404() {
    let (app, _pool, _dir) = setup().await;

    let (status, body) = create_order(&app, 42, 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Product with id 42 not found");
}

#[tokio::test]
async fn order_for_exact_stock_empties_the_shelf() {
    let (app, pool, _dir) = setup().await;

    let product = create_product(&app, "Keyboard", 2500, 4).await;

    let (status, body) = create_order(&app, product.id, 4).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");

    assert_eq!(stock_of(&pool, product.id).await, 0);
}

#[tokio::test]
async fn get_orders_lists_created_orders() {
    let (app, _pool, _dir) = setup().await;

    let product = create_product(&app, "Keyboard", 2500, 10).await;
    create_order(&app, product.id, 1).await;
    create_order(&app, product.id, 2).await;

    let (status, body) = send(&app, "GET", "/orders", None).await;
    assert_eq!(status, StatusCode::OK);

    let envelope: ApiResponse<Vec<OrderResponse>> =
        serde_json::from_value(body).expect("list envelope");
    assert_eq!(envelope.message, "Orders retrieved successfully");
    assert_eq!(envelope.data.len(), 2);
}

#[tokio::test]
async fn fetching_missing_order_returns_404() {
    let (app, _pool, _dir) = setup().await;

    let (status, body) = send(&app, "GET", "/orders/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order with id 42 not found");
}

#[tokio::test]
async fn patch_order_status_overwrites_status() {
    let (app, _pool, _dir) = setup().await;

    let product = create_product(&app, "Keyboard", 2500, 10).await;
    let (_, body) = create_order(&app, product.id, 1).await;
    let envelope: ApiResponse<OrderResponse> =
        serde_json::from_value(body).expect("order envelope");
    let order_id = envelope.data.id;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/orders/{order_id}"),
        Some(json!({ "order_status": "shipped" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let envelope: ApiResponse<OrderResponse> =
        serde_json::from_value(body).expect("order envelope");
    assert_eq!(envelope.message, "Order status updated successfully");
    assert_eq!(envelope.data.status, "shipped");

    let (status, body) = send(&app, "GET", &format!("/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let envelope: ApiResponse<OrderResponse> =
        serde_json::from_value(body).expect("order envelope");
    assert_eq!(envelope.data.status, "shipped");
}

#[tokio::test]
async fn patching_missing_order_returns_404() {
    let (app, _pool, _dir) = setup().await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/orders/42",
        Some(json!({ "order_status": "shipped" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order with id 42 not found");
}

#[tokio::test]
async fn deleting_an_ordered_product_keeps_the_order() {
    let (app, pool, _dir) = setup().await;

    let product = create_product(&app, "Keyboard", 2500, 10).await;
    let (_, body) = create_order(&app, product.id, 2).await;
    let envelope: ApiResponse<OrderResponse> =
        serde_json::from_value(body).expect("order envelope");
    let order_id = envelope.data.id;

    let (status, _body) = send(&app, "DELETE", &format!("/products/{}", product.id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _body) = send(&app, "GET", &format!("/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let items = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orderitem WHERE order_id = ?")
        .bind(order_id)
        .fetch_one(&pool)
        .await
        .expect("count order items");
    assert_eq!(items, 1);
}
