//! Test harness: the full router over a private in-memory database,
//! driven in-process with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use reserve_server::api;
use reserve_server::auth::JwtConfig;
use reserve_server::db::DbService;
use reserve_server::db::repository::{menu, notification, reservation, reservation_menu, store, user};
use reserve_server::utils::time::today;
use reserve_server::{AppState, Config};
use shared::models::{MenuCreateRequest, MenuInfoResponse, StoreCreateRequest, StoreInfoResponse};

pub fn test_config() -> Config {
    Config {
        environment: "test".into(),
        database_url: "sqlite::memory:".into(),
        http_port: 0,
        timezone: Tz::UTC,
        jwt: JwtConfig {
            secret: "integration-test-secret-at-least-32-bytes".into(),
            expiration_minutes: 60,
            issuer: "reserve-server".into(),
            audience: "reserve-clients".into(),
        },
        refresh_expiration_days: 30,
        log_level: "debug".into(),
        log_dir: None,
    }
}

/// Date `days` from today in UTC
pub fn days_from_now(days: i64) -> NaiveDate {
    today(Tz::UTC) + Duration::days(days)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body, `Value::Null` when empty
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .expect("Location header")
    }

    /// Trailing id of the Location header
    pub fn created_id(&self) -> i64 {
        let location = self.location();
        location[location.rfind('/').unwrap() + 1..]
            .parse()
            .expect("numeric id in Location")
    }

    pub fn error_code(&self) -> i64 {
        self.body["errorCode"].as_i64().expect("errorCode")
    }

    /// Values of `field` across `results`
    pub fn result_field(&self, field: &str) -> Vec<Value> {
        self.body["results"]
            .as_array()
            .expect("results array")
            .iter()
            .map(|r| r[field].clone())
            .collect()
    }
}

/// A signed-up user with an access token
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub token: String,
}

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = DbService::in_memory().await.expect("in-memory database");
        let state = AppState::with_pool(db.pool, &test_config());
        let router = api::create_router(state.clone());
        Self { state, router }
    }

    /// Same router over an on-disk database with a real connection pool
    pub async fn with_database(url: &str) -> Self {
        let db = DbService::new(url).await.expect("file database");
        let state = AppState::with_pool(db.pool, &test_config());
        let router = api::create_router(state.clone());
        Self { state, router }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, token, None).await
    }

    // ========== Fixtures (written straight to the database) ==========

    /// User whose password hash is a placeholder; sign in is not possible
    pub async fn create_user(&self, username: &str) -> TestUser {
        let id = user::create(&self.state.pool, username, "fixture", username, "")
            .await
            .unwrap();
        let token = self.state.jwt.generate_token(id, username).unwrap();
        TestUser {
            id,
            username: username.to_string(),
            token,
        }
    }

    pub async fn create_store(&self, registrant: &TestUser, name: &str) -> StoreInfoResponse {
        let req = StoreCreateRequest {
            name: name.to_string(),
            address: "1 Main Street".to_string(),
            description: format!("{name} description"),
        };
        store::create(&self.state.pool, registrant.id, &req)
            .await
            .unwrap()
    }

    pub async fn create_menu(
        &self,
        store_id: i64,
        name: &str,
        price: i64,
        description: &str,
    ) -> MenuInfoResponse {
        let req = MenuCreateRequest {
            name: name.to_string(),
            price,
            description: description.to_string(),
        };
        menu::create(&self.state.pool, store_id, &req).await.unwrap()
    }

    /// Reservation without time validation, so fixtures may use any slot
    pub async fn create_reservation(
        &self,
        customer: &TestUser,
        store_id: i64,
        date: NaiveDate,
        hour: i32,
    ) -> i64 {
        reservation::create(&self.state.pool, customer.id, store_id, date, hour)
            .await
            .unwrap()
    }

    pub async fn add_reservation_menu(
        &self,
        reservation_id: i64,
        menu: &MenuInfoResponse,
        quantity: i32,
    ) -> i64 {
        reservation_menu::create(
            &self.state.pool,
            reservation_id,
            &menu.name,
            menu.price,
            quantity,
        )
        .await
        .unwrap()
    }

    pub async fn notify(&self, user: &TestUser, message: &str) -> i64 {
        notification::create(&self.state.pool, user.id, message)
            .await
            .unwrap()
    }
}
