use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use readinglist::api;
use readinglist::auth::{create_jwt, decode_jwt, hash_password, verify_password};
use readinglist::db;
use readinglist::google_books::GoogleBooksClient;
use readinglist::infrastructure::AppState;
use readinglist::models::user;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

// The catalog is never reached by these routes
fn app(db: DatabaseConnection) -> Router {
    let catalog = GoogleBooksClient::new("http://127.0.0.1:9/books/v1", None, Duration::from_secs(1))
        .expect("Failed to build client");
    api::api_router(AppState::new(db, Arc::new(catalog)))
}

fn json_post(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_password_hashing() {
    let password = "super_secret_password";
    let hash = hash_password(password).expect("Failed to hash password");

    assert_ne!(password, hash);
    assert!(verify_password(password, &hash).unwrap());
    assert!(!verify_password("wrong_password", &hash).unwrap());
}

#[tokio::test]
async fn test_jwt_creation_and_verification() {
    let token = create_jwt(7, "test_user").expect("Failed to create JWT");
    assert!(!token.is_empty());

    let claims = decode_jwt(&token).expect("Failed to verify JWT");
    assert_eq!(claims.sub, "test_user");
    assert_eq!(claims.user_id(), 7);
}

#[tokio::test]
async fn test_login_flow() {
    let db = setup_test_db().await;

    // 1. Create user manually
    let password = "reader_password";
    let hash = hash_password(password).unwrap();
    let now = chrono::Utc::now().to_rfc3339();
    let model = user::ActiveModel {
        username: Set("reader".to_string()),
        password_hash: Set(hash),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };
    user::Entity::insert(model)
        .exec(&db)
        .await
        .expect("Failed to create user");

    let app = app(db);

    // 2. Successful login
    let req = json_post(
        "/login",
        serde_json::json!({ "username": "reader", "password": "reader_password" }),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let token = body["token"].as_str().unwrap().to_string();

    // 3. The token identifies the user
    let req = Request::builder()
        .uri("/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let me: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(me["username"], "reader");

    // 4. Invalid password
    let req = json_post(
        "/login",
        serde_json::json!({ "username": "reader", "password": "wrong_password" }),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 5. Non-existent user
    let req = json_post(
        "/login",
        serde_json::json!({ "username": "nobody", "password": "password" }),
    );
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signup_rejects_duplicates_and_weak_input() {
    let app = app(setup_test_db().await);

    let req = json_post(
        "/signup",
        serde_json::json!({ "username": "reader", "password": "long enough pw" }),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let req = json_post(
        "/signup",
        serde_json::json!({ "username": " reader ", "password": "another long pw" }),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let req = json_post(
        "/signup",
        serde_json::json!({ "username": "other", "password": "short" }),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let req = json_post(
        "/signup",
        serde_json::json!({ "username": "ab", "password": "long enough pw" }),
    );
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_rejects_malformed_header() {
    let app = app(setup_test_db().await);

    let req = Request::builder()
        .uri("/me")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
