use std::collections::HashSet;
use std::sync::Arc;

use crate::core::error::{AppError, StoreError};
use crate::modules::products::models::{
    CreateProductRequest, PageMeta, Paginated, PaginationQuery, Product, UpdateProductRequest,
};
use crate::modules::products::repositories::ProductRepository;

/// Service for product catalog operations
///
/// Inputs are assumed to have passed request validation already; the service
/// only enforces catalog semantics (availability filtering, soft delete and
/// batch existence checks).
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// Insert a product with the given fields
    pub async fn create(&self, request: CreateProductRequest) -> Result<Product, AppError> {
        let product = self.product_repo.create(&request).await?;

        tracing::debug!(product_id = product.id, "Product created");

        Ok(product)
    }

    /// One page of available products
    ///
    /// The count and the page are read by separate queries, so a concurrent
    /// write between them can make `meta` disagree with `data`. Row order is
    /// whatever the store returns.
    pub async fn find_all(
        &self,
        pagination: PaginationQuery,
    ) -> Result<Paginated<Product>, AppError> {
        let total = self.product_repo.count_available().await?;
        let meta = PageMeta::new(total, pagination);

        let data = self
            .product_repo
            .list_available(i64::from(pagination.limit), pagination.offset())
            .await?;

        Ok(Paginated { data, meta })
    }

    /// Fetch an available product by id
    pub async fn find_one(&self, id: i64) -> Result<Product, AppError> {
        self.product_repo
            .find_available_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product with id #{} not found", id)))
    }

    /// Apply a partial update
    ///
    /// Only a payload with no keys at all is rejected. A payload carrying
    /// nothing but `id` passes, has its `id` stripped, and changes nothing.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateProductRequest,
    ) -> Result<Product, AppError> {
        if request.is_empty() {
            return Err(AppError::bad_input("No data to update"));
        }

        let changes = request.into_changes();

        match self.product_repo.update(id, &changes).await {
            Ok(product) => Ok(product),
            Err(StoreError::RecordNotFound { .. }) => {
                tracing::warn!(product_id = id, "Update target not found");
                Err(AppError::not_found(format!(
                    "Product with id #{} not found, update failed",
                    id
                )))
            }
            Err(err) => Err(AppError::Store(err)),
        }
    }

    /// Soft delete: mark the product unavailable
    ///
    /// No precondition on the current flag, so repeated calls succeed. Every
    /// store failure is reported as not found with the store message
    /// appended; the original error is discarded.
    // FIXME: transient store failures (pool exhaustion, lost connection) are
    // reported as "not found" here; narrow the match to RecordNotFound once
    // callers no longer depend on the current message.
    pub async fn remove(&self, id: i64) -> Result<Product, AppError> {
        self.product_repo
            .set_available(id, false)
            .await
            .map_err(|err| {
                tracing::warn!(product_id = id, error = %err, "Soft delete failed");
                AppError::not_found(format!(
                    "Product with id #{} not found, delete failed, {}",
                    id, err
                ))
            })
    }

    /// Check that every id exists, regardless of availability
    ///
    /// Duplicate ids are collapsed first. Returned rows are in store order.
    pub async fn validate_products(&self, ids: Vec<i64>) -> Result<Vec<Product>, AppError> {
        let distinct: Vec<i64> = ids
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let products = self.product_repo.find_by_ids(&distinct).await?;

        if products.len() != distinct.len() {
            tracing::debug!(
                requested = distinct.len(),
                found = products.len(),
                "Batch validation mismatch"
            );
            return Err(AppError::BatchMismatch(
                "some products not found".to_string(),
            ));
        }

        Ok(products)
    }
}
