//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.role, "user");
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(auth.expires_in > 0);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "wrongpass123".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// User Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, register_req) = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.email, register_req.email);
    assert!(!me.banned);
}

#[tokio::test]
async fn test_get_current_user_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_public_user_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let response = server
        .get(&format!("/api/v1/users/{}", auth.user.id))
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.role, "user");
}

#[tokio::test]
async fn test_role_change_denied_for_regular_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (actor, _) = register_user(&server).await;
    let (target, _) = register_user(&server).await;

    let body = serde_json::json!({ "role": "moderator" });
    let response = server
        .patch_auth(
            &format!("/api/v1/users/{}/role", target.user.id),
            &actor.access_token,
            &body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let request = CreatePostRequest::unique();
    let response = server
        .post_auth("/api/v1/posts", &auth.access_token, &request)
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(post.title, request.title);
    assert_eq!(post.category, "tech");
    assert_eq!(post.owner_id, auth.user.id);
    assert_eq!(post.views, 0);

    // Reading the post counts a view
    let response = server.get(&format!("/api/v1/posts/{}", post.id)).await.unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.views, 1);
}

#[tokio::test]
async fn test_post_listing_filters() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let request = CreatePostRequest::unique();
    server
        .post_auth("/api/v1/posts", &auth.access_token, &request)
        .await
        .unwrap();

    // Filter by category and match on the unique title
    let response = server
        .get(&format!(
            "/api/v1/posts?category=tech&search={}&limit=5",
            request.title.replace(' ', "%20")
        ))
        .await
        .unwrap();
    let listing: PaginatedResponse<PostResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(listing.pagination.total >= 1);
    assert!(listing.items.len() <= 5);
    assert!(listing.items.iter().any(|p| p.title == request.title));
}

#[tokio::test]
async fn test_post_listing_rejects_unknown_category() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/posts?category=gaming").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_post_denied_for_non_owner() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = register_user(&server).await;
    let (other, _) = register_user(&server).await;

    let request = CreatePostRequest::unique();
    let response = server
        .post_auth("/api/v1/posts", &owner.access_token, &request)
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdatePostRequest {
        title: Some("Hijacked title".to_string()),
        ..UpdatePostRequest::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/posts/{}", post.id),
            &other.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_own_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let request = CreatePostRequest::unique();
    let response = server
        .post_auth("/api/v1/posts", &auth.access_token, &request)
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/posts/{}", post.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/v1/posts/{}", post.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_invalid_post_id_path() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/posts/not-a-snowflake").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Report Tests
// ============================================================================

#[tokio::test]
async fn test_create_report() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    // Report an existing post
    let post_req = CreatePostRequest::unique();
    let response = server
        .post_auth("/api/v1/posts", &auth.access_token, &post_req)
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let report_req = CreateReportRequest::for_post(&post.id);
    let response = server
        .post_auth("/api/v1/reports", &auth.access_token, &report_req)
        .await
        .unwrap();
    let report: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(report.status, "pending");
    assert_eq!(report.action_taken, "none");
    assert_eq!(report.reporter_id, auth.user.id);
    assert!(report.reviewer_id.is_none());
}

#[tokio::test]
async fn test_report_unknown_target_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let report_req = CreateReportRequest::for_post("999999999999");
    let response = server
        .post_auth("/api/v1/reports", &auth.access_token, &report_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_report_queue_denied_for_regular_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/reports", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Moderation Tests
// ============================================================================

#[tokio::test]
async fn test_ban_denied_for_regular_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (actor, _) = register_user(&server).await;
    let (target, _) = register_user(&server).await;

    let response = server
        .put_auth(
            &format!("/api/v1/moderation/bans/{}", target.user.id),
            &actor.access_token,
            &BanUserRequest::default(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_security_logs_denied_for_regular_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server).await;

    let response = server
        .get_auth("/api/v1/security-logs", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Helpers
// ============================================================================

async fn register_user(server: &TestServer) -> (AuthResponse, RegisterRequest) {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .expect("register request failed");
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED)
        .await
        .expect("registration should succeed");
    (auth, request)
}
