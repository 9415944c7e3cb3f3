//! Application state and route table.
//!
//! `router` assembles every route the server exposes; `main` only binds a
//! listener and serves what this module returns.

use crate::api;
use crate::auth;
use crate::config::Config;
use crate::utils::jwt::JwtUtils;
use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt: Arc<JwtUtils>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            pool,
            jwt: Arc::new(JwtUtils::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

/// Builds the complete route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .merge(api::event::routes::event_router(state.clone()))
        .nest("/auth", auth::routes::auth_router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "Fest Events Backend",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use axum::{
        body::Body,
        http::{
            Request, StatusCode,
            header::{AUTHORIZATION, CONTENT_TYPE},
        },
    };
    use tower::ServiceExt;

    fn test_config(events_create_requires_auth: bool) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 3,
            jwt_secret: "test-secret".to_string(),
            jwt_expires_in_seconds: 3600,
            server_port: 0,
            events_create_requires_auth,
            bcrypt_cost: 4,
        }
    }

    async fn test_state(events_create_requires_auth: bool) -> AppState {
        AppState::new(test_pool().await, test_config(events_create_requires_auth))
    }

    fn bearer(state: &AppState) -> String {
        let token = state
            .jwt
            .generate_token("user-1".to_string(), "fan@fest.test".to_string())
            .unwrap();
        format!("Bearer {}", token)
    }

    fn dj_night() -> Value {
        json!({
            "title": "DJ Night",
            "imageUrl": "http://x/img.png",
            "description": "Music",
            "date": 26,
            "hot": true,
            "startTime": "20:00",
            "endTime": "22:00"
        })
    }

    fn get_events(auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/events");
        if let Some(auth) = auth {
            builder = builder.header(AUTHORIZATION, auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value, auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json");
        if let Some(auth) = auth {
            builder = builder.header(AUTHORIZATION, auth);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_root_banner() {
        let app = router(test_state(false).await);
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "Fest Events Backend");
    }

    #[tokio::test]
    async fn test_list_events_requires_token() {
        let state = test_state(false).await;
        let app = router(state);

        for auth in [None, Some("Token abc"), Some("Bearer not-a-jwt")] {
            let (status, body) = send(&app, get_events(auth)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "auth header {:?}", auth);
            assert_eq!(body["error_type"], "unauthorized");
        }
    }

    #[tokio::test]
    async fn test_rejected_token_never_reaches_store() {
        let state = test_state(false).await;
        // Any query against the store would now fail with a 500.
        sqlx::query("DROP TABLE events")
            .execute(&state.pool)
            .await
            .unwrap();
        let app = router(state);

        for auth in [None, Some("Bearer not-a-jwt")] {
            let (status, body) = send(&app, get_events(auth)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "auth header {:?}", auth);
            assert_eq!(body["error_type"], "unauthorized");
        }
    }

    #[tokio::test]
    async fn test_list_events_empty() {
        let state = test_state(false).await;
        let auth = bearer(&state);
        let app = router(state);

        let (status, body) = send(&app, get_events(Some(&auth))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "events": [] }));
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let state = test_state(false).await;
        let auth = bearer(&state);
        let app = router(state);

        let (status, body) = send(&app, post_json("/events", &dj_night(), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Event Added Successfully" }));

        let (status, body) = send(&app, get_events(Some(&auth))).await;
        assert_eq!(status, StatusCode::OK);
        let events = body["events"].as_array().unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        for (key, value) in dj_night().as_object().unwrap() {
            assert_eq!(&event[key], value, "field {}", key);
        }
        assert!(event["id"].is_string());
    }

    #[tokio::test]
    async fn test_extra_fields_are_not_persisted() {
        let state = test_state(false).await;
        let auth = bearer(&state);
        let app = router(state);

        let mut body = dj_night();
        body["isAdmin"] = json!(true);
        let (status, _) = send(&app, post_json("/events", &body, None)).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, get_events(Some(&auth))).await;
        assert!(body["events"][0].get("isAdmin").is_none());
    }

    #[tokio::test]
    async fn test_create_missing_field_is_bad_request() {
        let app = router(test_state(false).await);

        let mut body = dj_night();
        body.as_object_mut().unwrap().remove("endTime");
        let (status, body) = send(&app, post_json("/events", &body, None)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "validation_error");
        assert_eq!(
            body["details"],
            json!([{ "field": "endTime", "message": "endTime is required" }])
        );
    }

    #[tokio::test]
    async fn test_create_rejects_non_object_bodies() {
        let app = router(test_state(false).await);

        let (status, body) = send(&app, post_json("/events", &json!([1, 2]), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_payload");

        let request = Request::builder()
            .method("POST")
            .uri("/events")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{\"title\": "))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_payload");
    }

    #[tokio::test]
    async fn test_concurrent_identical_posts_create_two_records() {
        let state = test_state(false).await;
        let auth = bearer(&state);
        let app = router(state);

        let body = dj_night();
        let (first, second) = tokio::join!(
            send(&app, post_json("/events", &body, None)),
            send(&app, post_json("/events", &body, None)),
        );
        assert_eq!(first.0, StatusCode::OK);
        assert_eq!(second.0, StatusCode::OK);

        let (_, body) = send(&app, get_events(Some(&auth))).await;
        let events = body["events"].as_array().unwrap();
        assert_eq!(events.len(), 2);
        assert_ne!(events[0]["id"], events[1]["id"]);
    }

    #[tokio::test]
    async fn test_create_guard_is_configurable() {
        let state = test_state(true).await;
        let auth = bearer(&state);
        let app = router(state);

        let (status, _) = send(&app, post_json("/events", &dj_night(), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, post_json("/events", &dj_night(), Some(&auth))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_store_fault_is_generic_500() {
        let state = test_state(false).await;
        let auth = bearer(&state);
        sqlx::query("DROP TABLE events")
            .execute(&state.pool)
            .await
            .unwrap();
        let app = router(state);

        let (status, body) = send(&app, get_events(Some(&auth))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error");
        assert_eq!(body["error_type"], "database_error");

        let (status, body) = send(&app, post_json("/events", &dj_night(), None)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_register_login_and_list() {
        let app = router(test_state(false).await);

        let credentials = json!({
            "name": "Ada",
            "email": "Ada@Fest.test",
            "password": "correct horse"
        });
        let (status, body) = send(&app, post_json("/auth/register", &credentials, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["email"], "ada@fest.test");
        assert!(body["user"].get("password_hash").is_none());

        let (status, _) = send(&app, post_json("/auth/register", &credentials, None)).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let login = json!({ "email": "ada@fest.test", "password": "correct horse" });
        let (status, body) = send(&app, post_json("/auth/login", &login, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "Bearer");
        let auth = format!("Bearer {}", body["access_token"].as_str().unwrap());

        let (status, _) = send(&app, get_events(Some(&auth))).await;
        assert_eq!(status, StatusCode::OK);

        let request = Request::builder()
            .uri("/auth/me")
            .header(AUTHORIZATION, &auth)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ada");
    }

    #[tokio::test]
    async fn test_login_failures() {
        let app = router(test_state(false).await);

        let bad = json!({ "email": "nobody@fest.test", "password": "whatever1" });
        let (status, body) = send(&app, post_json("/auth/login", &bad, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid email or password");

        let short = json!({ "name": "Ada", "email": "not-an-email", "password": "short" });
        let (status, body) = send(&app, post_json("/auth/register", &short, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["details"]
                .as_array()
                .unwrap()
                .iter()
                .map(|d| d["field"].as_str().unwrap())
                .collect::<Vec<_>>(),
            vec!["email", "password"]
        );
    }
}
