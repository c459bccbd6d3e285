// MySQL repository tests
//
// Require a reachable MySQL instance (TEST_DATABASE_URL). Run with
// `cargo test --test mysql_repository_test -- --ignored`.

#[path = "../helpers/mod.rs"]
mod helpers;

use catalog::core::StoreError;
use catalog::products::models::ProductChanges;
use catalog::products::{MySqlProductRepository, ProductRepository};
use helpers::*;
use rust_decimal_macros::dec;

#[tokio::test]
#[ignore = "requires MySQL"]
async fn test_create_and_soft_delete_roundtrip() {
    let repo = MySqlProductRepository::new(create_test_pool().await);

    let created = repo
        .create(&TestDataFactory::create_request(25))
        .await
        .unwrap();
    assert!(created.available);
    assert_eq!(created.price, dec!(25));

    let removed = repo.set_available(created.id, false).await.unwrap();
    assert!(!removed.available);
    assert!(repo
        .find_available_by_id(created.id)
        .await
        .unwrap()
        .is_none());

    let batch = repo.find_by_ids(&[created.id]).await.unwrap();
    assert_eq!(batch.len(), 1);
}

#[tokio::test]
#[ignore = "requires MySQL"]
async fn test_update_applies_changes_and_signals_missing_rows() {
    let repo = MySqlProductRepository::new(create_test_pool().await);
    let created = repo
        .create(&TestDataFactory::create_request(10))
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            &ProductChanges {
                name: None,
                price: Some(dec!(12.75)),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, dec!(12.75));
    assert_eq!(updated.name, created.name);

    let unchanged = repo
        .update(created.id, &ProductChanges::default())
        .await
        .unwrap();
    assert_eq!(unchanged.price, dec!(12.75));

    let err = repo
        .update(i64::MAX, &ProductChanges::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::RecordNotFound { .. }));
}

#[tokio::test]
#[ignore = "requires MySQL"]
async fn test_listing_respects_limit() {
    let repo = MySqlProductRepository::new(create_test_pool().await);
    for price in 1..=3 {
        repo.create(&TestDataFactory::create_request(price))
            .await
            .unwrap();
    }

    let total = repo.count_available().await.unwrap();
    assert!(total >= 3);

    let page = repo.list_available(2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.iter().all(|p| p.available));
}
