//! Integration tests for registration and login

mod common;

use axum::http::StatusCode;
use serde_json::json;
use staffdesk_backend::auth::PasswordService;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_new_employee() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let (status, response) = app
        .register_employee("Jane Doe", "jane@gmail.com", "secret1")
        .await;

    assert_eq!(status, StatusCode::OK);

    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(profile["fullName"], "Jane Doe");
    assert_eq!(profile["email"], "jane@gmail.com");
    assert_eq!(profile["phone"], "9876543210");
    assert_eq!(profile["dob"], "1998-04-12");
    assert_eq!(profile["status"], "Active");
    assert_eq!(profile["profilePic"], "https://placehold.co/600x400?text=J");
    assert!(uuid::Uuid::parse_str(profile["id"].as_str().unwrap()).is_ok());

    // Credential material never appears in a response
    assert!(!response.contains("password"));
    assert!(!response.contains("secret1"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email() {
    let app = common::TestApp::new().await;

    let email = format!("duplicate_{}@example.com", uuid::Uuid::new_v4());

    let (status, _) = app.register_employee("Ravi Kumar", &email, "secret1").await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = app.register_employee("Ravi Kumar", &email, "secret1").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let body: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_rejects_invalid_email() {
    let app = common::TestApp::new().await;

    let (status, _) = app
        .register_employee("Ravi Kumar", "not-an-email", "secret1")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_stored_hash_is_salted_and_verifiable() {
    let app = common::TestApp::new().await;

    let first = format!("hash_one_{}@example.com", uuid::Uuid::new_v4());
    let second = format!("hash_two_{}@example.com", uuid::Uuid::new_v4());
    app.register_employee("Asha Patel", &first, "secret1").await;
    app.register_employee("Noah Lee", &second, "secret1").await;

    let first_hash: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
            .bind(&first)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    let second_hash: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
            .bind(&second)
            .fetch_one(&app.pool)
            .await
            .unwrap();

    assert_ne!(first_hash, "secret1");
    assert!(first_hash.starts_with("$argon2"));
    assert!(PasswordService::verify("secret1", &first_hash).unwrap());

    // Random salts keep identical passwords from colliding
    assert_ne!(first_hash, second_hash);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_returns_profile_and_session_cookie() {
    let app = common::TestApp::new().await;

    let email = format!("login_{}@example.com", uuid::Uuid::new_v4());
    app.register_employee("Jane Doe", &email, "secret1").await;

    let body = json!({ "email": email, "password": "secret1" });
    let (status, set_cookie, response) =
        app.post_for_cookie("/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let set_cookie = set_cookie.expect("login must set the session cookie");
    assert!(set_cookie.starts_with("sd_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));

    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(profile["email"], email);
    assert!(!response.contains("password"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_unknown_email_returns_404() {
    let app = common::TestApp::new().await;

    let body = json!({
        "email": format!("nobody_{}@example.com", uuid::Uuid::new_v4()),
        "password": "secret1"
    });
    let (status, response) = app.post("/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    let body: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password_returns_401() {
    let app = common::TestApp::new().await;

    let email = format!("wrong_pass_{}@example.com", uuid::Uuid::new_v4());
    app.register_employee("Jane Doe", &email, "secret1").await;

    let body = json!({ "email": email, "password": "secret2" });
    let (status, response) = app.post("/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(body["message"], "Invalid password");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_session_cookie_grants_profile_access() {
    let app = common::TestApp::new().await;

    let email = format!("session_{}@example.com", uuid::Uuid::new_v4());
    app.register_employee("Jane Doe", &email, "secret1").await;
    let cookie = app.login_session(&email, "secret1").await;

    let (status, response) = app.get_with_cookie("/user/profile", &cookie).await;
    assert_eq!(status, StatusCode::OK);

    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(profile["email"], email);

    // The same request without the cookie is rejected
    let (status, _) = app.get("/user/profile").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
