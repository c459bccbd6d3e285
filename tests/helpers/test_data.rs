// Test Data Factory
//
// Builds product payloads and seeded services for tests.

use std::sync::Arc;

use catalog::products::models::CreateProductRequest;
use catalog::products::{InMemoryProductRepository, ProductRepository, ProductService};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use uuid::Uuid;

pub struct TestDataFactory;

impl TestDataFactory {
    /// Unique product name with a TEST prefix
    pub fn random_name() -> String {
        format!("TEST-{}", Uuid::new_v4())
    }

    pub fn create_request(price: i64) -> CreateProductRequest {
        CreateProductRequest::new(Self::random_name(), Decimal::from(price))
    }

    /// JSON body for POST /products
    pub fn create_product_payload() -> Value {
        json!({
            "name": Self::random_name(),
            "price": "19.99"
        })
    }
}

/// In-memory repository preloaded with `count` available products (ids 1..=count)
pub async fn seeded_repository(count: usize) -> Arc<InMemoryProductRepository> {
    let repo = Arc::new(InMemoryProductRepository::new());
    for i in 0..count {
        repo.create(&TestDataFactory::create_request(i as i64 + 1))
            .await
            .expect("seed product");
    }
    repo
}

/// Service over an in-memory repository with `count` products
pub async fn seeded_service(count: usize) -> (Arc<InMemoryProductRepository>, ProductService) {
    let repo = seeded_repository(count).await;
    let service = ProductService::new(repo.clone());
    (repo, service)
}
