//! End-to-end tests for the register / login / protected-access flow.
//!
//! The full application is assembled through `create_app` around the
//! in-memory repositories, so requests here travel the same route table,
//! middleware, and error mapping as production, minus MySQL.

use std::sync::Arc;

use actix_web::{test, web};
use serde_json::json;
use uuid::Uuid;

use pt_api::app::create_app;
use pt_api::dto::ErrorResponse;
use pt_api::routes::AppState;
use pt_core::repositories::order_repository::mock::MockOrderRepository;
use pt_core::repositories::user_repository::mock::MockUserRepository;
use pt_core::repositories::video_repository::mock::MockVideoRepository;
use pt_core::services::auth_service::AuthService;
use pt_core::services::token_service::{TokenConfig, TokenService};

type MockState = AppState<MockUserRepository, MockOrderRepository, MockVideoRepository>;

struct Harness {
    state: web::Data<MockState>,
    token_service: Arc<TokenService>,
}

fn harness(ttl: i64) -> Harness {
    let users = Arc::new(MockUserRepository::new());
    let token_service = Arc::new(TokenService::new(TokenConfig::new("test-secret", ttl)));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&users),
        Arc::clone(&token_service),
    ));

    let state = web::Data::new(AppState {
        auth_service,
        order_repository: Arc::new(MockOrderRepository::new()),
        video_repository: Arc::new(MockVideoRepository::new()),
    });

    Harness {
        state,
        token_service,
    }
}

fn register_body(username: &str, password: &str) -> serde_json::Value {
    json!({ "username": username, "password": password })
}

#[actix_web::test]
async fn test_register_then_access_protected_endpoint() {
    let harness = harness(3600);
    let app = test::init_service(create_app(
        harness.state.clone(),
        Arc::clone(&harness.token_service),
    ))
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("packer1", "pw123456"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let raw = test::read_body(resp).await;
    // The digest must never appear in a response, under any field name
    assert!(!String::from_utf8_lossy(&raw).contains("password_hash"));

    let body: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    let token = body["token"].as_str().unwrap();
    assert_eq!(body["user"]["username"], "packer1");
    assert_eq!(body["user"]["role"], "packer");
    assert!(body["user"]["id"].as_str().is_some());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/orders")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["orders"], json!([]));
}

#[actix_web::test]
async fn test_protected_endpoints_reject_missing_token() {
    let harness = harness(3600);
    let app = test::init_service(create_app(
        harness.state.clone(),
        Arc::clone(&harness.token_service),
    ))
    .await;

    for request in [
        test::TestRequest::get().uri("/api/orders").to_request(),
        test::TestRequest::get().uri("/api/videos").to_request(),
        test::TestRequest::post()
            .uri("/api/videos/upload")
            .set_json(json!({}))
            .to_request(),
    ] {
        let resp = test::call_service(&app, request).await;
        assert_eq!(resp.status(), 401);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "No token provided");
    }
}

#[actix_web::test]
async fn test_duplicate_registration_keeps_first_record() {
    let harness = harness(3600);
    let app = test::init_service(create_app(
        harness.state.clone(),
        Arc::clone(&harness.token_service),
    ))
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("alice", "pw123456"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let first: serde_json::Value = test::read_body_json(resp).await;

    // Second registration with a different password and an admin role
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "username": "alice",
                "password": "different-pw",
                "role": "admin",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Username already exists");

    // The original account is untouched: its password still works and the
    // role never became admin
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "alice", "password": "pw123456" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["id"], first["user"]["id"]);
    assert_eq!(body["user"]["role"], "packer");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "alice", "password": "different-pw" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_login_failures_are_byte_identical() {
    let harness = harness(3600);
    let app = test::init_service(create_app(
        harness.state.clone(),
        Arc::clone(&harness.token_service),
    ))
    .await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("alice", "pw123456"))
            .to_request(),
    )
    .await;

    let mut bodies = Vec::new();
    for (username, password) in [("alice", "wrong-pw"), ("nobody", "pw123456")] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({ "username": username, "password": password }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 401);
        bodies.push(test::read_body(resp).await);
    }

    // Wrong password and unknown username must be indistinguishable
    assert_eq!(bodies[0], bodies[1]);
    let body: ErrorResponse = serde_json::from_slice(&bodies[0]).unwrap();
    assert_eq!(body.error, "Invalid credentials");
}

#[actix_web::test]
async fn test_expired_token_rejected_on_protected_endpoint() {
    // Zero-lifetime service: registration succeeds but the minted token is
    // already past its expiry by the time it comes back
    let harness = harness(0);
    let app = test::init_service(create_app(
        harness.state.clone(),
        Arc::clone(&harness.token_service),
    ))
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("packer1", "pw123456"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/orders")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Invalid token");
}

#[actix_web::test]
async fn test_order_queue_flow() {
    let harness = harness(3600);
    let app = test::init_service(create_app(
        harness.state.clone(),
        Arc::clone(&harness.token_service),
    ))
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("packer1", "pw123456"))
            .to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let auth = ("Authorization", format!("Bearer {}", body["token"].as_str().unwrap()));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/orders")
            .insert_header(auth.clone())
            .set_json(json!({
                "customer_name": "John Doe",
                "customer_email": "john@example.com",
                "items_count": 3,
                "priority": "high",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let order: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(order["status"], "waiting");
    let order_id = order["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/orders/{}/status", order_id))
            .insert_header(auth.clone())
            .set_json(json!({ "status": "in_progress" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let updated: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(updated["status"], "in_progress");

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/orders/{}/status", Uuid::new_v4()))
            .insert_header(auth.clone())
            .set_json(json!({ "status": "completed" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Order not found");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/orders?status=in_progress")
            .insert_header(auth)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["orders"][0]["id"], order_id.as_str());
}

#[actix_web::test]
async fn test_video_upload_attributed_to_acting_packer() {
    let harness = harness(3600);
    let app = test::init_service(create_app(
        harness.state.clone(),
        Arc::clone(&harness.token_service),
    ))
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("packer1", "pw123456"))
            .to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();
    let packer_id = Uuid::parse_str(body["user"]["id"].as_str().unwrap()).unwrap();
    harness
        .state
        .video_repository
        .insert_packer(packer_id, "packer1")
        .await;
    let auth = ("Authorization", format!("Bearer {}", token));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/videos/upload")
            .insert_header(auth.clone())
            .set_json(json!({
                "job_id": "JOB001",
                "file_name": "job-001-video.webm",
                "drive_file_id": "drive-id-1",
                "shareable_link": "https://drive.example.com/d/drive-id-1/view",
                "duration_seconds": 120,
                "file_size_bytes": 5242880,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let video: serde_json::Value = test::read_body_json(resp).await;
    // The record belongs to whoever presented the token, not to a field in
    // the request body
    assert_eq!(video["packer_id"], packer_id.to_string());
    assert_eq!(video["upload_status"], "completed");
    let video_id = video["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/videos")
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["videos"][0]["packer_name"], "packer1");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/videos/{}", video_id))
            .insert_header(auth.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/videos/{}", Uuid::new_v4()))
            .insert_header(auth)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Video not found");
}

#[actix_web::test]
async fn test_banner_and_health_are_open() {
    let harness = harness(3600);
    let app = test::init_service(create_app(
        harness.state.clone(),
        Arc::clone(&harness.token_service),
    ))
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), 200);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "OK");
}
