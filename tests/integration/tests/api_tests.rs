//! API Integration Tests
//!
//! Each test spawns its own server backed by the in-memory store, so no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

async fn create(server: &TestServer, token: &str, payload: &MemberPayload) -> MemberResponse {
    let response = server.post_auth("/api/members", token, payload).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["store"], "healthy");
}

#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login_and_validate() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/auth", &json!({ "password": ADMIN_PASSWORD }))
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(login.success);
    assert!(!login.token.is_empty());
    assert!(login.expires_at > 0);

    let response = server.get_auth("/api/auth", &login.token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "success": true, "valid": true }));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/auth", &json!({ "password": "guess" }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_validate_without_token() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/auth").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTH");
}

#[tokio::test]
async fn test_forged_token_is_rejected() {
    let server = TestServer::start().await.unwrap();

    // An unsigned "role:timestamp:random" value is no longer accepted
    let response = server
        .get_auth("/api/auth", "YWRtaW46MTcwMDAwMDAwMDAwMDpyYW5kb20=")
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_token_from_other_server_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let other = TestServer::start_with(&[("ADMIN_TOKEN_SECRET", "another-secret")])
        .await
        .unwrap();
    let foreign_token = other.login().await.unwrap();

    let response = server.get_auth("/api/auth", &foreign_token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Member Listing Tests
// ============================================================================

#[tokio::test]
async fn test_public_listing_sorts_and_groups() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    create(&server, &token, &MemberPayload::new("Ann")).await;
    create(&server, &token, &MemberPayload::new("Cam").priority(1)).await;
    create(&server, &token, &MemberPayload::new("Bo").priority(1)).await;
    create(&server, &token, &MemberPayload::new("Fay").role("Founder")).await;
    create(&server, &token, &MemberPayload::new("Lou").role("Leader")).await;

    let response = server.get("/api/members").await.unwrap();
    let list: ListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(list.flat_names(), vec!["Bo", "Cam", "Ann"]);
    assert_eq!(list.members["letters"], json!(["A", "B", "C"]));
    assert_eq!(list.members["grouped"]["B"][0]["firstname"], "Bo");
    assert_eq!(list.founders.len(), 1);
    assert_eq!(list.leaders[0].firstname, "Lou");
    assert_eq!(list.total, 3);
    assert_eq!(list.page, 1);
    assert_eq!(list.total_pages, 1);
}

#[tokio::test]
async fn test_search_ignores_tiers() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    create(&server, &token, &MemberPayload::new("Anna").role("Founder")).await;
    create(&server, &token, &MemberPayload::new("Dan")).await;
    create(&server, &token, &MemberPayload::new("Bo")).await;

    let response = server.get("/api/members?search=%20an%20").await.unwrap();
    let list: ListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(list.flat_names(), vec!["Anna", "Dan"]);
    assert!(list.founders.is_empty());
    assert!(list.leaders.is_empty());
}

#[tokio::test]
async fn test_last_name_filter() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    create(&server, &token, &MemberPayload::new("Ann").lastname("JAGUARX")).await;
    create(&server, &token, &MemberPayload::new("Bo").lastname("Other")).await;

    let response = server.get("/api/members?lastNameFilter=JAGUARX").await.unwrap();
    let list: ListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.flat_names(), vec!["Ann"]);
}

#[tokio::test]
async fn test_invalid_page_falls_back_to_first() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/members?page=abc").await.unwrap();
    let list: ListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.page, 1);
    assert_eq!(list.total_pages, 0);
}

#[tokio::test]
async fn test_admin_listing_is_flat_and_public() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    create(&server, &token, &MemberPayload::new("Zoe").lastname("Young")).await;
    create(&server, &token, &MemberPayload::new("Fay").lastname("Adams").role("Founder")).await;

    let response = server.get("/api/members?admin=true").await.unwrap();
    let list: ListResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(list.members.is_array());
    assert_eq!(list.flat_names(), vec!["Fay", "Zoe"]);
    assert_eq!(list.founders[0].firstname, "Fay");
    assert_eq!(list.total_pages, 1);
}

// ============================================================================
// Member Administration Tests
// ============================================================================

#[tokio::test]
async fn test_mutations_require_token() {
    let server = TestServer::start().await.unwrap();

    let response = server.post("/api/members", &MemberPayload::new("Ann")).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/api/members").await.unwrap();
    let list: ListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.total, 0);
}

#[tokio::test]
async fn test_create_member() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    let body = json!({
        "firstname": "  Ann ",
        "lastname": "Lee",
        "imageurl": "https://img.example.com/ann.png",
        "sociallinks": { "facebook": "https://facebook.com/ann" },
        "priority": 2
    });
    let response = server.post_auth("/api/members", &token, &body).await.unwrap();
    let created: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["firstname"], "Ann");
    assert_eq!(created["role"], "Member");
    assert_eq!(created["imageurl"], "https://img.example.com/ann.png");
    assert_eq!(created["sociallinks"]["facebook"], "https://facebook.com/ann");
}

#[tokio::test]
async fn test_create_validation_errors() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    let response = server
        .post_auth("/api/members", &token, &MemberPayload::new(""))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    let response = server
        .post_auth("/api/members", &token, &json!({ "firstname": "Ann", "imageUrl": "nope" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get("/api/members?admin=true").await.unwrap();
    let list: ListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.total, 0);
}

#[tokio::test]
async fn test_update_member() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();
    let created = create(&server, &token, &MemberPayload::new("Ann").lastname("Lee")).await;

    let response = server
        .put_auth(
            &format!("/api/members/{}", created.id),
            &token,
            &MemberPayload::new("Anne").role("Leader"),
        )
        .await
        .unwrap();
    let updated: MemberResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.firstname, "Anne");
    assert_eq!(updated.lastname, None);
    assert_eq!(updated.role, "Leader");

    let response = server
        .put_auth("/api/members/9999", &token, &MemberPayload::new("X"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_MEMBER");
}

#[tokio::test]
async fn test_delete_member() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();
    let created = create(&server, &token, &MemberPayload::new("Ann")).await;
    let path = format!("/api/members/{}", created.id);

    let response = server.delete_auth(&path, &token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({ "success": true }));

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete_auth("/api/members/abc", &token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_bulk_delete() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();
    let a = create(&server, &token, &MemberPayload::new("A")).await;
    let b = create(&server, &token, &MemberPayload::new("B")).await;
    create(&server, &token, &MemberPayload::new("C")).await;

    let response = server
        .delete_json_auth("/api/members", &token, &json!({ "ids": [a.id, b.id] }))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["deleted"], 2);

    let response = server
        .delete_json_auth("/api/members", &token, &json!({ "ids": [a.id] }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR).await.unwrap();
    assert_eq!(body.error.code, "BULK_DELETE_FAILED");
    assert_eq!(body.error.details.unwrap()["failed"], 1);
}

#[tokio::test]
async fn test_duplicate_names_allowed_by_default() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    let first = create(&server, &token, &MemberPayload::new("Ann").lastname("Lee")).await;
    let second = create(&server, &token, &MemberPayload::new("Ann").lastname("Lee")).await;
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_duplicate_names_rejected_when_configured() {
    let server = TestServer::start_with(&[("DUPLICATE_NAME_POLICY", "reject_exact")])
        .await
        .unwrap();
    let token = server.login().await.unwrap();
    let first = create(&server, &token, &MemberPayload::new("Ann").lastname("Lee")).await;

    let response = server
        .post_auth("/api/members", &token, &MemberPayload::new("ann").lastname("LEE"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();

    assert_eq!(body.error.code, "DUPLICATE_NAME");
    assert_eq!(body.error.details.unwrap()["similarMembers"][0]["id"], first.id);
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_image() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    let response = server
        .upload(&token, "file", "face.png", "image/png", vec![0x89, b'P', b'N', b'G'])
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    let url = body["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with(".png"));

    // The stored file is served back under the public path
    let response = server.get(&url).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.bytes().await.unwrap().as_ref(), &[0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_upload_rejects_non_image() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    let response = server
        .upload(&token, "file", "notes.txt", "text/plain", b"hello".to_vec())
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upload_requires_file_field() {
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    let response = server
        .upload(&token, "picture", "face.png", "image/png", vec![1, 2, 3])
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_upload_rejects_oversized_file() {
    let server = TestServer::start_with(&[("MAX_FILE_SIZE_MB", "1")]).await.unwrap();
    let token = server.login().await.unwrap();

    let response = server
        .upload(&token, "file", "big.jpg", "image/jpeg", vec![0; 1024 * 1024 + 1])
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_upload_requires_token() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .upload("not-a-token", "file", "face.png", "image/png", vec![1])
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
