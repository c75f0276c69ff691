// Contract tests for the basket and favourites HTTP endpoints
//
// Runs the real controllers over in-memory repositories and checks status
// codes and JSON shapes.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use helpers::*;
use onlinestore::core::{ErrorMessage, SuccessMessage};
use onlinestore::modules;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

macro_rules! init_app {
    ($store:expr) => {{
        let state = $store.app_state(TEST_PAGE_SIZE);
        test::init_service(
            App::new()
                .configure(|cfg| state.register(cfg))
                .configure(modules::configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_add_to_basket_returns_count() {
    let store = InMemoryStore::new();
    let user = store.seed_user("Alice");
    let product = store.seed_product("Teapot", dec!(24.50));
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/basket")
        .set_json(json!({ "user_id": user, "product_id": product }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "count": 1 }));
}

#[actix_web::test]
async fn test_duplicate_add_is_conflict() {
    let store = InMemoryStore::new();
    let user = store.seed_user("Alice");
    let product = store.seed_product("Teapot", dec!(24.50));
    let app = init_app!(store);

    for expected in [200, 409] {
        let req = test::TestRequest::post()
            .uri("/basket")
            .set_json(json!({ "user_id": user, "product_id": product }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);

        if expected == 409 {
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["kind"], "PRODUCT_ALREADY_IN_BASKET");
            assert_eq!(body["error"]["message"], ErrorMessage::PRODUCT_ALREADY_IN_BASKET);
            assert_eq!(body["error"]["code"], 409);
        }
    }
}

#[actix_web::test]
async fn test_unknown_user_is_404() {
    let store = InMemoryStore::new();
    let product = store.seed_product("Teapot", dec!(24.50));
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/basket")
        .set_json(json!({ "user_id": 404, "product_id": product }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "USER_NOT_FOUND");
}

#[actix_web::test]
async fn test_basket_page_shape() {
    let store = InMemoryStore::new();
    let user = store.seed_user("Alice");
    let product = store.seed_product("Teapot", dec!(24.50));
    store
        .app_state(TEST_PAGE_SIZE)
        .basket
        .add_product_to_basket(user, product)
        .await
        .unwrap();
    let app = init_app!(store);

    let req = test::TestRequest::get()
        .uri(&format!("/basket/{}?page=0", user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let items = body.as_array().expect("basket page must be an array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], product);
    assert_eq!(items[0]["name"], "Teapot");
    assert!(items[0].get("price").is_some());
    assert!(items[0]["image_url"].is_string());
}

#[actix_web::test]
async fn test_page_beyond_range_is_basket_is_empty() {
    let store = InMemoryStore::new();
    let user = store.seed_user("Alice");
    let app = init_app!(store);

    let req = test::TestRequest::get()
        .uri(&format!("/basket/{}?page=5", user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "BASKET_IS_EMPTY");
}

#[actix_web::test]
async fn test_negative_page_is_rejected() {
    let store = InMemoryStore::new();
    let user = store.seed_user("Alice");
    let app = init_app!(store);

    let req = test::TestRequest::get()
        .uri(&format!("/basket/{}?page=-1", user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_delete_and_clear() {
    let store = InMemoryStore::new();
    let user = store.seed_user("Alice");
    let teapot = store.seed_product("Teapot", dec!(24.50));
    let cups = store.seed_product("Cups", dec!(12.00));
    let basket = store.app_state(TEST_PAGE_SIZE).basket;
    basket.add_product_to_basket(user, teapot).await.unwrap();
    basket.add_product_to_basket(user, cups).await.unwrap();
    let app = init_app!(store);

    let req = test::TestRequest::delete()
        .uri(&format!("/basket/{}/products/{}", user, teapot))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "count": 1 }));

    let req = test::TestRequest::delete()
        .uri(&format!("/basket/{}/products/{}", user, teapot))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::delete()
        .uri(&format!("/basket/{}", user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], SuccessMessage::BASKET_IS_EMPTIED);

    let req = test::TestRequest::delete()
        .uri(&format!("/basket/{}", user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_membership_lookup() {
    let store = InMemoryStore::new();
    let user = store.seed_user("Alice");
    let product = store.seed_product("Teapot", dec!(24.50));
    let app = init_app!(store);

    let req = test::TestRequest::get()
        .uri(&format!("/basket/{}/products/{}", user, product))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "in_basket": false }));
}

#[actix_web::test]
async fn test_clear_favourites_message() {
    let store = InMemoryStore::new();
    let user = store.seed_user("Alice");
    let product = store.seed_product("Lamp", dec!(40.00));
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/favourites")
        .set_json(json!({ "user_id": user, "product_id": product }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "count": 1 }));

    let req = test::TestRequest::delete()
        .uri(&format!("/favourites/{}", user))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], SuccessMessage::FAVOURITES_IS_EMPTIED);
}
