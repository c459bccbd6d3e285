// ProductRepository: store client for the `products` table
//
// List and fetch-one reads filter on `available = TRUE`; batch lookups by id
// and updates do not.

use async_trait::async_trait;
use sqlx::{MySql, MySqlConnection, MySqlPool, QueryBuilder};

use crate::core::StoreError;
use crate::modules::products::models::{CreateProductRequest, Product, ProductChanges};

pub type StoreResult<T> = std::result::Result<T, StoreError>;

const PRODUCT_COLUMNS: &str = "id, name, price, available, created_at, updated_at";

/// Data access for products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new row and return it as stored
    async fn create(&self, request: &CreateProductRequest) -> StoreResult<Product>;

    /// Number of available rows
    async fn count_available(&self) -> StoreResult<i64>;

    /// Available rows in store order
    async fn list_available(&self, limit: i64, offset: i64) -> StoreResult<Vec<Product>>;

    async fn find_available_by_id(&self, id: i64) -> StoreResult<Option<Product>>;

    /// Apply `changes` to row `id`
    ///
    /// Returns `StoreError::RecordNotFound` when no row has that id.
    async fn update(&self, id: i64, changes: &ProductChanges) -> StoreResult<Product>;

    /// Set the availability flag on row `id`, whatever its current value
    async fn set_available(&self, id: i64, available: bool) -> StoreResult<Product>;

    /// All rows whose id is in `ids`, regardless of availability
    async fn find_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<Product>>;
}

/// MySQL-backed repository
#[derive(Clone)]
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(conn: &mut MySqlConnection, id: i64) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = ?",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(product)
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn create(&self, request: &CreateProductRequest) -> StoreResult<Product> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, price)
            VALUES (?, ?)
            "#,
        )
        .bind(&request.name)
        .bind(request.price)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_id() as i64;
        let product = Self::fetch_by_id(&mut *tx, id)
            .await?
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?;

        tx.commit().await?;

        Ok(product)
    }

    async fn count_available(&self) -> StoreResult<i64> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE available = TRUE")
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }

    async fn list_available(&self, limit: i64, offset: i64) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE available = TRUE LIMIT ? OFFSET ?",
            PRODUCT_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn find_available_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = ? AND available = TRUE",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, id: i64, changes: &ProductChanges) -> StoreResult<Product> {
        let mut tx = self.pool.begin().await?;

        if !changes.is_empty() {
            let mut query: QueryBuilder<MySql> =
                QueryBuilder::new("UPDATE products SET updated_at = CURRENT_TIMESTAMP(3)");
            if let Some(name) = &changes.name {
                query.push(", name = ").push_bind(name.clone());
            }
            if let Some(price) = changes.price {
                query.push(", price = ").push_bind(price);
            }
            query.push(" WHERE id = ").push_bind(id);

            query.build().execute(&mut *tx).await?;
        }

        // MySQL reports changed rather than matched rows, so existence is
        // decided by re-reading the row.
        let product = Self::fetch_by_id(&mut *tx, id)
            .await?
            .ok_or(StoreError::RecordNotFound { id })?;

        tx.commit().await?;

        Ok(product)
    }

    async fn set_available(&self, id: i64, available: bool) -> StoreResult<Product> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE products
            SET available = ?, updated_at = CURRENT_TIMESTAMP(3)
            WHERE id = ?
            "#,
        )
        .bind(available)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let product = Self::fetch_by_id(&mut *tx, id)
            .await?
            .ok_or(StoreError::RecordNotFound { id })?;

        tx.commit().await?;

        Ok(product)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let mut query: QueryBuilder<MySql> = QueryBuilder::new(format!(
            "SELECT {} FROM products WHERE id IN (",
            PRODUCT_COLUMNS
        ));
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let products = query
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }
}
