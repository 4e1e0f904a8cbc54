use crate::models::DbProduct;
use chrono::Utc;
use eyre::Result;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_product(
    pool: &Pool<Postgres>,
    name: &str,
    quantity: i32,
    price: Decimal,
    unit: &str,
) -> Result<DbProduct> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let product = sqlx::query_as::<_, DbProduct>(
        r#"
        INSERT INTO products (id, name, quantity, price, unit, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, quantity, price, unit, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(quantity)
    .bind(price)
    .bind(unit)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn get_product_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbProduct>> {
    let product = sqlx::query_as::<_, DbProduct>(
        r#"
        SELECT id, name, quantity, price, unit, created_at
        FROM products
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn list_products(pool: &Pool<Postgres>) -> Result<Vec<DbProduct>> {
    let products = sqlx::query_as::<_, DbProduct>(
        r#"
        SELECT id, name, quantity, price, unit, created_at
        FROM products
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Takes `amount` units from stock in a single statement.
///
/// Returns `None` when the product does not exist or holds fewer than
/// `amount` units; the stock is left untouched in both cases.
pub async fn consume_stock(
    pool: &Pool<Postgres>,
    id: Uuid,
    amount: i32,
) -> Result<Option<DbProduct>> {
    let product = sqlx::query_as::<_, DbProduct>(
        r#"
        UPDATE products
        SET quantity = quantity - $2
        WHERE id = $1 AND quantity >= $2
        RETURNING id, name, quantity, price, unit, created_at
        "#,
    )
    .bind(id)
    .bind(amount)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}
