use crate::{
    abstract_trait::order::repository::{CreateOrderOutcome, OrderCommandRepositoryTrait},
    domain::requests::order::{CreateOrderRequest, UpdateOrderStatusRequest},
    model::{
        order::Order as OrderModel, order_item::OrderItem as OrderItemModel,
        product::Product as ProductModel,
    },
};
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use chrono::Local;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    /// Runs the whole check-then-write sequence inside one transaction so a
    /// concurrent order cannot oversell the same product. The decrement
    /// re-checks the stock level; losing a race downgrades to the refusal
    /// outcome instead of committing a negative quantity.
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<CreateOrderOutcome, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            "SELECT id, name, description, price, available_quantity FROM product WHERE id = ?",
        )
        .bind(req.product_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch product ID {}: {:?}", req.product_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        if product.available_quantity < req.ordered_quantity {
            info!(
                "📉 Refusing order for product ID {}: requested={}, available={}",
                product.id, req.ordered_quantity, product.available_quantity
            );
            return Ok(CreateOrderOutcome::InsufficientStock {
                product,
                requested: req.ordered_quantity,
            });
        }

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
        INSERT INTO "order" (date, status)
        VALUES (?, ?)
        RETURNING id, date, status
        "#,
        )
        .bind(Local::now().naive_local())
        .bind(&req.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for product ID {}: {:?}",
                req.product_id, err
            );
            RepositoryError::from(err)
        })?;

        let item = sqlx::query_as::<_, OrderItemModel>(
            r#"
        INSERT INTO orderitem (order_id, product_id, ordered_quantity)
        VALUES (?, ?, ?)
        RETURNING id, order_id, product_id, ordered_quantity
        "#,
        )
        .bind(order.id)
        .bind(req.product_id)
        .bind(req.ordered_quantity)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order item for order ID {}: {:?}",
                order.id, err
            );
            RepositoryError::from(err)
        })?;

        let updated = sqlx::query(
            "UPDATE product SET available_quantity = available_quantity - ? WHERE id = ? AND available_quantity >= ?",
        )
        .bind(req.ordered_quantity)
        .bind(req.product_id)
        .bind(req.ordered_quantity)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to decrement stock for product ID {}: {:?}",
                req.product_id, err
            );
            RepositoryError::from(err)
        })?;

        if updated.rows_affected() == 0 {
            tx.rollback().await.map_err(RepositoryError::from)?;
            info!(
                "📉 Refusing order for product ID {}: stock changed underneath, requested={}",
                req.product_id, req.ordered_quantity
            );
            return Ok(CreateOrderOutcome::InsufficientStock {
                product,
                requested: req.ordered_quantity,
            });
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} with item ID {} for product ID {}",
            order.id, item.id, req.product_id
        );
        Ok(CreateOrderOutcome::Created(order))
    }

    async fn update_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let id = req.id.ok_or(RepositoryError::NotFound)?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
        UPDATE "order"
        SET status = ?
        WHERE id = ?
        RETURNING id, date, status
        "#,
        )
        .bind(&req.order_status)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update status for order ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        match result {
            Some(order) => {
                info!("🔄 Updated order ID {} status to {}", order.id, order.status);
                Ok(order)
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}
