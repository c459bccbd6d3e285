use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::core::StoreError;
use crate::modules::products::models::{CreateProductRequest, Product, ProductChanges};

use super::product_repository::{ProductRepository, StoreResult};

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// In-memory product store.
///
/// Intended for tests and local development. Rows are kept in id order.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    state: RwLock<State>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, request: &CreateProductRequest) -> StoreResult<Product> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let now = Utc::now();
        let product = Product {
            id: state.last_id,
            name: request.name.clone(),
            price: request.price,
            available: true,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(product.id, product.clone());

        Ok(product)
    }

    async fn count_available(&self) -> StoreResult<i64> {
        let state = self.state.read().await;
        Ok(state.rows.values().filter(|p| p.available).count() as i64)
    }

    async fn list_available(&self, limit: i64, offset: i64) -> StoreResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .values()
            .filter(|p| p.available)
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn find_available_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).filter(|p| p.available).cloned())
    }

    async fn update(&self, id: i64, changes: &ProductChanges) -> StoreResult<Product> {
        let mut state = self.state.write().await;
        let product = state
            .rows
            .get_mut(&id)
            .ok_or(StoreError::RecordNotFound { id })?;

        if !changes.is_empty() {
            changes.apply_to(product);
            product.updated_at = Utc::now();
        }

        Ok(product.clone())
    }

    async fn set_available(&self, id: i64, available: bool) -> StoreResult<Product> {
        let mut state = self.state.write().await;
        let product = state
            .rows
            .get_mut(&id)
            .ok_or(StoreError::RecordNotFound { id })?;

        product.available = available;
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| state.rows.get(id).cloned())
            .collect())
    }
}
