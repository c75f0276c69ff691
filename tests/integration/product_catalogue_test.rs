// Catalogue and user registration against in-memory repositories

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use onlinestore::core::{AppError, SuccessMessage};
use onlinestore::users::CreateUserRequest;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_add_update_delete_product() {
    let store = InMemoryStore::new();
    let products = store.app_state(TEST_PAGE_SIZE).products;

    let added = products
        .add_product(TestDataFactory::product_request("Kettle", dec!(30.00)))
        .await
        .unwrap();
    assert_eq!(added.message, SuccessMessage::PRODUCT_ADDED);

    let updated = products
        .update_product(added.id, TestDataFactory::product_request("Kettle XL", dec!(35.99)))
        .await
        .unwrap();
    assert_eq!(updated.message, SuccessMessage::PRODUCT_UPDATED);

    let product = products.get_product(added.id).await.unwrap();
    assert_eq!(product.name, "Kettle XL");
    assert_eq!(product.price, dec!(35.99));

    let deleted = products.delete_product(added.id).await.unwrap();
    assert_eq!(deleted.message, SuccessMessage::PRODUCT_DELETED);
    assert!(matches!(
        products.get_product(added.id).await,
        Err(AppError::ProductNotFound)
    ));
}

#[tokio::test]
async fn test_missing_product_mutations_fail() {
    let store = InMemoryStore::new();
    let products = store.app_state(TEST_PAGE_SIZE).products;

    assert!(matches!(
        products
            .update_product(7, TestDataFactory::product_request("Ghost", dec!(1.00)))
            .await,
        Err(AppError::ProductNotFound)
    ));
    assert!(matches!(
        products.delete_product(7).await,
        Err(AppError::ProductNotFound)
    ));
}

#[tokio::test]
async fn test_invalid_product_is_not_stored() {
    let store = InMemoryStore::new();
    let products = store.app_state(TEST_PAGE_SIZE).products;

    let result = products
        .add_product(TestDataFactory::product_request("Kettle", dec!(-1.00)))
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(products.get_page_of_products(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_catalogue_pages_past_the_end_are_empty_lists() {
    let store = InMemoryStore::new();
    for i in 0..4 {
        store.seed_product(&format!("Item {}", i), dec!(2.00));
    }
    let products = store.app_state(TEST_PAGE_SIZE).products;

    assert_eq!(products.get_page_of_products(0).await.unwrap().len(), 3);
    assert_eq!(products.get_page_of_products(1).await.unwrap().len(), 1);
    assert!(products.get_page_of_products(2).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_register_user() {
    let store = InMemoryStore::new();
    let users = store.app_state(TEST_PAGE_SIZE).users;
    let email = TestDataFactory::unique_email();

    let created = users
        .register(CreateUserRequest {
            name: "Alice".to_string(),
            email: email.clone(),
        })
        .await
        .unwrap();
    assert_eq!(created.message, SuccessMessage::USER_ADDED);

    let user = users.get_user(created.id).await.unwrap();
    assert_eq!(user.email, email);

    let duplicate = users
        .register(CreateUserRequest {
            name: "Alice again".to_string(),
            email,
        })
        .await;
    assert!(matches!(duplicate, Err(AppError::EmailAlreadyRegistered)));

    assert!(matches!(users.get_user(created.id + 1).await, Err(AppError::UserNotFound)));
}
