//! Reading reservations as the creator, the store registrant and an
//! unrelated user.

mod common;

use common::{TestApp, TestUser, days_from_now};
use http::StatusCode;
use serde_json::json;
use shared::models::StoreInfoResponse;

struct Fixture {
    app: TestApp,
    registrant: TestUser,
    customer: TestUser,
    stranger: TestUser,
    store: StoreInfoResponse,
    reservation_id: i64,
}

/// One reservation with three menu lines at a store
async fn setup() -> Fixture {
    let app = TestApp::new().await;
    let registrant = app.create_user("registrant").await;
    let customer = app.create_user("customer").await;
    let stranger = app.create_user("stranger").await;

    let store = app.create_store(&registrant, "Pasta House").await;
    let aglio = app
        .create_menu(store.store_id, "Aglio e Olio", 10000, "Spaghetti with garlic and olive oil")
        .await;
    let carbonara = app
        .create_menu(store.store_id, "Carbonara", 12000, "Spaghetti with bacon, eggs, and cheese")
        .await;
    let bolognese = app
        .create_menu(store.store_id, "Bolognese", 12000, "Spaghetti with meat sauce")
        .await;

    let reservation_id = app
        .create_reservation(&customer, store.store_id, days_from_now(7), 12)
        .await;
    app.add_reservation_menu(reservation_id, &aglio, 1).await;
    app.add_reservation_menu(reservation_id, &carbonara, 2).await;
    app.add_reservation_menu(reservation_id, &bolognese, 3).await;

    Fixture {
        app,
        registrant,
        customer,
        stranger,
        store,
        reservation_id,
    }
}

#[tokio::test]
async fn test_creator_reads_reservation() {
    let f = setup().await;
    let uri = format!("/v1/reservations/{}", f.reservation_id);

    let resp = f.app.get(&uri, Some(&f.customer.token)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["reservationId"], f.reservation_id);
    assert_eq!(resp.body["storeId"], f.store.store_id);
    assert_eq!(resp.body["userId"], f.customer.id);
    assert_eq!(resp.body["date"], days_from_now(7).to_string());
    assert_eq!(resp.body["hour"], 12);
}

#[tokio::test]
async fn test_registrant_reads_reservation() {
    let f = setup().await;
    let uri = format!("/v1/reservations/{}", f.reservation_id);

    let resp = f.app.get(&uri, Some(&f.registrant.token)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["reservationId"], f.reservation_id);
    assert_eq!(resp.body["userId"], f.customer.id);
}

#[tokio::test]
async fn test_unrelated_user_gets_not_found() {
    let f = setup().await;
    let uri = format!("/v1/reservations/{}", f.reservation_id);

    let resp = f.app.get(&uri, Some(&f.stranger.token)).await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.error_code(), 6001);
    assert_eq!(resp.body["message"], "Reservation not found");
}

#[tokio::test]
async fn test_missing_reservation_is_not_found() {
    let f = setup().await;

    let resp = f.app.get("/v1/reservations/9999", Some(&f.customer.token)).await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.error_code(), 6001);
}

#[tokio::test]
async fn test_reading_requires_authentication() {
    let f = setup().await;
    let uri = format!("/v1/reservations/{}", f.reservation_id);

    let resp = f.app.get(&uri, None).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.error_code(), 1001);

    let resp = f.app.get(&uri, Some("not-a-jwt")).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.error_code(), 1004);
}

#[tokio::test]
async fn test_creator_lists_reservation_menus() {
    let f = setup().await;
    let uri = format!("/v1/reservations/{}/menus", f.reservation_id);

    let resp = f.app.get(&uri, Some(&f.customer.token)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["count"], 3);
    assert_eq!(
        resp.result_field("name"),
        vec![json!("Aglio e Olio"), json!("Carbonara"), json!("Bolognese")]
    );
    assert_eq!(
        resp.result_field("price"),
        vec![json!(10000), json!(12000), json!(12000)]
    );
    assert_eq!(
        resp.result_field("quantity"),
        vec![json!(1), json!(2), json!(3)]
    );
    assert!(resp.result_field("reservationMenuId").iter().all(|id| id.is_i64()));
}

#[tokio::test]
async fn test_registrant_lists_reservation_menus() {
    let f = setup().await;
    let uri = format!("/v1/reservations/{}/menus", f.reservation_id);

    let resp = f.app.get(&uri, Some(&f.registrant.token)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["count"], 3);
}

#[tokio::test]
async fn test_unrelated_user_denied_reservation_menus() {
    let f = setup().await;
    let uri = format!("/v1/reservations/{}/menus", f.reservation_id);

    let resp = f.app.get(&uri, Some(&f.stranger.token)).await;

    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert_eq!(resp.error_code(), 2001);
    assert_eq!(resp.body["message"], "Access denied");
}

#[tokio::test]
async fn test_menus_of_missing_reservation() {
    let f = setup().await;

    let resp = f
        .app
        .get("/v1/reservations/9999/menus", Some(&f.stranger.token))
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.error_code(), 6001);
}

/// Customer search data: store "Pasta House" with hours inserted out of order,
/// plus reservations that each filter must exclude.
async fn setup_search() -> Fixture {
    let f = setup().await;
    let day = days_from_now(7);

    f.app.create_reservation(&f.customer, f.store.store_id, day, 20).await;
    f.app.create_reservation(&f.customer, f.store.store_id, day, 13).await;

    // Other date
    f.app
        .create_reservation(&f.customer, f.store.store_id, days_from_now(8), 11)
        .await;
    // Other store name
    let sushi = f.app.create_store(&f.registrant, "Sushi Bar").await;
    f.app.create_reservation(&f.customer, sushi.store_id, day, 18).await;
    // Other customer
    f.app.create_reservation(&f.stranger, f.store.store_id, day, 15).await;

    f
}

#[tokio::test]
async fn test_customer_search_filters_and_orders_by_hour() {
    let f = setup_search().await;
    let uri = format!(
        "/v1/reservations?type=CUSTOMER&query=pasta&date={}",
        days_from_now(7)
    );

    let resp = f.app.get(&uri, Some(&f.customer.token)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["count"], 3);
    assert_eq!(
        resp.result_field("storeId"),
        vec![json!(f.store.store_id); 3]
    );
    assert_eq!(
        resp.result_field("hour"),
        vec![json!(12), json!(13), json!(20)]
    );
    assert_eq!(
        resp.result_field("userId"),
        vec![json!(f.customer.id); 3]
    );
}

#[tokio::test]
async fn test_customer_search_without_filters_orders_by_date() {
    let f = setup_search().await;

    let resp = f
        .app
        .get("/v1/reservations?type=CUSTOMER", Some(&f.customer.token))
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["count"], 5);
    assert_eq!(
        resp.result_field("hour"),
        vec![json!(12), json!(13), json!(18), json!(20), json!(11)]
    );
}

#[tokio::test]
async fn test_registrant_search_sees_every_customer() {
    let f = setup_search().await;
    let uri = format!(
        "/v1/reservations?type=REGISTRANT&query=PASTA&date={}",
        days_from_now(7)
    );

    let resp = f.app.get(&uri, Some(&f.registrant.token)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.result_field("hour"),
        vec![json!(12), json!(13), json!(15), json!(20)]
    );

    // The customer registered no store
    let resp = f
        .app
        .get("/v1/reservations?type=REGISTRANT", Some(&f.customer.token))
        .await;
    assert_eq!(resp.body["count"], 0);
}

#[tokio::test]
async fn test_search_pagination() {
    let f = setup_search().await;
    let uri = format!(
        "/v1/reservations?type=CUSTOMER&query=pasta&date={}&pageSize=2&pageNumber=1",
        days_from_now(7)
    );

    let resp = f.app.get(&uri, Some(&f.customer.token)).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["count"], 1);
    assert_eq!(resp.result_field("hour"), vec![json!(20)]);
}

#[tokio::test]
async fn test_search_requires_type() {
    let f = setup_search().await;

    let resp = f
        .app
        .get("/v1/reservations?query=pasta", Some(&f.customer.token))
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.error_code(), 3);
    assert!(resp.body["message"].as_str().unwrap().contains("type"));

    let resp = f
        .app
        .get("/v1/reservations?type=EVERYONE", Some(&f.customer.token))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.error_code(), 3);
}
