// MySQL repository tests
//
// Exercise the real SQL, including the composite primary key that guards
// against duplicate basket entries. Requires a reachable MySQL database:
//   TEST_DATABASE_URL=mysql://... cargo test --test mysql_repository_test -- --ignored

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use onlinestore::basket::{BasketKey, BasketRepository, MySqlBasketRepository};
use onlinestore::core::{AppError, InsertOutcome, PageRequest};
use onlinestore::favourites::{FavouriteKey, FavouritesRepository, MySqlFavouritesRepository};
use onlinestore::products::{MySqlProductRepository, ProductRepository};
use onlinestore::users::{MySqlUserRepository, UserRepository};
use rust_decimal_macros::dec;

async fn seed_user(users: &MySqlUserRepository) -> i64 {
    users
        .create("Repository Test", &TestDataFactory::unique_email())
        .await
        .expect("Failed to seed user")
}

async fn seed_product(products: &MySqlProductRepository) -> i64 {
    products
        .create(&TestDataFactory::product_request("Repository Product", dec!(9.99)))
        .await
        .expect("Failed to seed product")
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_basket_insert_is_unique_per_key() {
    let pool = create_test_pool().await;
    let users = MySqlUserRepository::new(pool.clone());
    let products = MySqlProductRepository::new(pool.clone());
    let baskets = MySqlBasketRepository::new(pool.clone());

    let user = seed_user(&users).await;
    let product = seed_product(&products).await;
    let key = BasketKey::new(user, product);

    assert_eq!(baskets.insert(key).await.unwrap(), InsertOutcome::Inserted);
    assert_eq!(baskets.insert(key).await.unwrap(), InsertOutcome::Duplicate);
    assert_eq!(baskets.count_by_user_id(user).await.unwrap(), 1);
    assert!(baskets.find_by_key(key).await.unwrap().is_some());

    assert!(baskets.delete(key).await.unwrap());
    assert!(!baskets.delete(key).await.unwrap());
    assert_eq!(baskets.count_by_user_id(user).await.unwrap(), 0);
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_basket_paging_and_clear() {
    let pool = create_test_pool().await;
    let users = MySqlUserRepository::new(pool.clone());
    let products = MySqlProductRepository::new(pool.clone());
    let baskets = MySqlBasketRepository::new(pool.clone());

    let user = seed_user(&users).await;
    let mut ids = Vec::new();
    for _ in 0..5 {
        let product = seed_product(&products).await;
        baskets.insert(BasketKey::new(user, product)).await.unwrap();
        ids.push(product);
    }

    let first = baskets
        .find_page_by_user_id(user, PageRequest::new(0, 2))
        .await
        .unwrap();
    let last = baskets
        .find_page_by_user_id(user, PageRequest::new(2, 2))
        .await
        .unwrap();
    let beyond = baskets
        .find_page_by_user_id(user, PageRequest::new(3, 2))
        .await
        .unwrap();

    assert_eq!(first.iter().map(|e| e.product_id).collect::<Vec<_>>(), ids[..2].to_vec());
    assert_eq!(last.len(), 1);
    assert!(beyond.is_empty());

    assert_eq!(baskets.delete_all_by_user_id(user).await.unwrap(), 5);
    assert_eq!(baskets.delete_all_by_user_id(user).await.unwrap(), 0);
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_product_delete_cascades_to_basket_and_favourites() {
    let pool = create_test_pool().await;
    let users = MySqlUserRepository::new(pool.clone());
    let products = MySqlProductRepository::new(pool.clone());
    let baskets = MySqlBasketRepository::new(pool.clone());
    let favourites = MySqlFavouritesRepository::new(pool.clone());

    let user = seed_user(&users).await;
    let product = seed_product(&products).await;
    baskets.insert(BasketKey::new(user, product)).await.unwrap();
    favourites
        .insert(FavouriteKey::new(user, product))
        .await
        .unwrap();

    assert!(products.delete(product).await.unwrap());
    assert_eq!(baskets.count_by_user_id(user).await.unwrap(), 0);
    assert_eq!(favourites.count_by_user_id(user).await.unwrap(), 0);
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_insert_with_deleted_product_reports_missing_reference() {
    let pool = create_test_pool().await;
    let users = MySqlUserRepository::new(pool.clone());
    let products = MySqlProductRepository::new(pool.clone());
    let baskets = MySqlBasketRepository::new(pool.clone());
    let favourites = MySqlFavouritesRepository::new(pool.clone());

    let user = seed_user(&users).await;
    let product = seed_product(&products).await;
    assert!(products.delete(product).await.unwrap());

    let basket_outcome = baskets.insert(BasketKey::new(user, product)).await.unwrap();
    assert_eq!(basket_outcome, InsertOutcome::MissingReference);

    let favourite_outcome = favourites
        .insert(FavouriteKey::new(user, product))
        .await
        .unwrap();
    assert_eq!(favourite_outcome, InsertOutcome::MissingReference);
    assert_eq!(baskets.count_by_user_id(user).await.unwrap(), 0);
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_duplicate_email_is_rejected() {
    let pool = create_test_pool().await;
    let users = MySqlUserRepository::new(pool);
    let email = TestDataFactory::unique_email();

    let id = users.create("First", &email).await.unwrap();
    assert!(users.exists_by_id(id).await.unwrap());

    let duplicate = users.create("Second", &email).await;
    assert!(matches!(duplicate, Err(AppError::EmailAlreadyRegistered)));
}
