//! Pipeline behavior against a mock backend: retry policy, authentication
//! attachment, and forced sign-out on 401.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use finconsult_client::api::{AdminApi, ApiClient, ApiError, PublicApi};
use finconsult_client::auth::{SessionState, SessionStore};
use finconsult_client::config::ClientConfig;
use finconsult_client::models::UserProfile;
use finconsult_client::store::AuthStore;

fn test_client(server: &MockServer, base_delay: Duration) -> (ApiClient, Arc<SessionStore>, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let session = Arc::new(SessionStore::open(dir.path().join("session.json")));
    let config = ClientConfig {
        base_url: server.base_url(),
        timeout: Duration::from_secs(5),
        max_retries: 2,
        base_delay,
    };
    let client = ApiClient::new(config, session.clone()).expect("Failed to build API client");
    (client, session, dir)
}

fn profile() -> UserProfile {
    UserProfile {
        id: 1,
        name: "A".to_string(),
        email: Some("a@b.com".to_string()),
        role: Some("admin".to_string()),
    }
}

#[tokio::test]
async fn test_get_retries_then_surfaces_last_failure() {
    let server = MockServer::start();
    let unavailable = server.mock(|when, then| {
        when.method(GET).path("/public/services");
        then.status(503).json_body(json!({"message": "maintenance window"}));
    });

    let (client, _session, _dir) = test_client(&server, Duration::from_millis(10));
    let public = PublicApi::new(client);

    let err = public.services().await.expect_err("Expected a failure");

    // Initial attempt plus the configured two retries, then the last-seen
    // failure comes back classified.
    unavailable.assert_hits(3);
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance window");
        }
        other => panic!("Expected a server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_succeeds_after_transient_failures() {
    let server = MockServer::start();
    let mut unavailable = server.mock(|when, then| {
        when.method(GET).path("/public/services");
        then.status(503);
    });

    let (client, _session, _dir) = test_client(&server, Duration::from_millis(500));
    let public = PublicApi::new(client);
    let handle = tokio::spawn(async move { public.services().await });

    // Wait for the first attempt to fail, then bring the backend back up
    // while the client is still waiting out its 500ms backoff.
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while unavailable.hits() == 0 && std::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    unavailable.assert_hits(1);
    unavailable.delete();
    let healthy = server.mock(|when, then| {
        when.method(GET).path("/public/services");
        then.status(200).json_body(json!([
            {"id": 1, "title": "Audit", "description": "Annual audit support"}
        ]));
    });

    let services = handle
        .await
        .expect("Request task panicked")
        .expect("Expected the retried request to succeed");
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].title, "Audit");
    healthy.assert();
}

#[tokio::test]
async fn test_write_is_never_retried() {
    let server = MockServer::start();
    let failing = server.mock(|when, then| {
        when.method(PUT).path("/admin/services/5");
        then.status(500).json_body(json!({"message": "database offline"}));
    });

    let (client, _session, _dir) = test_client(&server, Duration::from_millis(10));
    let admin = AdminApi::new(client);

    let err = admin
        .services()
        .update(5, &json!({"title": "Tax Planning", "description": "Updated"}))
        .await
        .expect_err("Expected a failure");

    failing.assert_hits(1);
    assert!(matches!(err, ApiError::Server { status: 500, .. }));
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_detaches_header() {
    let server = MockServer::start();
    let rejected = server.mock(|when, then| {
        when.method(GET).path("/admin/contacts");
        then.status(401).json_body(json!({"message": "token expired"}));
    });
    // Only matches requests that still carry an Authorization header.
    let guarded = server.mock(|when, then| {
        when.method(GET).path("/admin/me").header_exists("authorization");
        then.status(200).json_body(json!({"id": 1, "name": "A"}));
    });

    let (client, session, _dir) = test_client(&server, Duration::from_millis(10));
    session
        .login("stale-token".to_string(), profile())
        .expect("Failed to store session");
    let state = session.subscribe();
    let admin = AdminApi::new(client);

    let err = admin
        .contacts()
        .list()
        .await
        .expect_err("Expected an auth failure");

    // One hit: a 401 short-circuits the retry budget too.
    rejected.assert_hits(1);
    assert!(matches!(err, ApiError::Auth));
    assert!(session.token().is_none());
    assert_eq!(*state.borrow(), SessionState::SignedOut);

    // The next request goes out without an Authorization header, so the
    // guarded mock never matches and the server falls through to 404.
    let err = admin.me().await.expect_err("Expected a miss");
    assert!(matches!(err, ApiError::Client { status: 404, .. }));
    guarded.assert_hits(0);
}

#[tokio::test]
async fn test_login_stores_token_and_authenticates_later_requests() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/admin/login")
            .json_body(json!({"email": "a@b.com", "password": "secret"}));
        then.status(200)
            .json_body(json!({"id": 1, "name": "A", "token": "tok123"}));
    });
    let me = server.mock(|when, then| {
        when.method(GET)
            .path("/admin/me")
            .header("authorization", "Bearer tok123");
        then.status(200)
            .json_body(json!({"id": 1, "name": "A", "email": "a@b.com", "role": "admin"}));
    });

    let (client, session, _dir) = test_client(&server, Duration::from_millis(10));
    let admin = AdminApi::new(client);
    let mut auth = AuthStore::new(admin.clone(), session.clone());

    let user = auth
        .login("a@b.com", "secret")
        .await
        .expect("Expected login to succeed");
    login.assert();
    assert_eq!(user.id, 1);
    assert_eq!(session.token().as_deref(), Some("tok123"));
    assert!(auth.error().is_none());

    let fetched = admin.me().await.expect("Expected /admin/me to succeed");
    me.assert();
    assert_eq!(fetched.name, "A");
}

#[tokio::test]
async fn test_login_rejection_reads_as_bad_credentials() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/admin/login");
        then.status(401).json_body(json!({"message": "unauthorized"}));
    });

    let (client, session, _dir) = test_client(&server, Duration::from_millis(10));
    let mut auth = AuthStore::new(AdminApi::new(client), session.clone());

    let err = auth
        .login("a@b.com", "wrong")
        .await
        .expect_err("Expected login to fail");
    assert!(matches!(err, ApiError::Auth));
    assert_eq!(auth.error(), Some("Invalid email or password"));
    assert!(!session.is_authenticated());

    // Logging out with no session leaves everything empty and is not an
    // error.
    auth.logout().expect("Expected logout to be a no-op");
    assert!(session.token().is_none());
}

#[tokio::test]
async fn test_success_carries_original_status_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/public/categories");
        then.status(200)
            .json_body(json!([{"id": 1, "name": "Tax", "description": null}]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/public/contact");
        then.status(201).json_body(json!({
            "id": 10, "name": "Lee", "email": "lee@example.com",
            "message": "Please call me back"
        }));
    });

    let (client, _session, _dir) = test_client(&server, Duration::from_millis(10));

    let (status, categories): (u16, Vec<finconsult_client::models::Category>) = client
        .get_with_status("/public/categories")
        .await
        .expect("Expected the fetch to succeed");
    assert_eq!(status, 200);
    assert_eq!(categories.len(), 1);

    let (status, created): (u16, finconsult_client::models::ContactMessage) = client
        .post_with_status(
            "/public/contact",
            &json!({"name": "Lee", "email": "lee@example.com", "message": "Please call me back"}),
        )
        .await
        .expect("Expected the submission to succeed");
    assert_eq!(status, 201);
    assert_eq!(created.id, 10);
}

#[tokio::test]
async fn test_home_content_fetches_collections_concurrently() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/public/services");
        then.status(200)
            .json_body(json!([{"id": 1, "title": "Audit", "description": "Annual audit"}]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/public/team");
        then.status(200)
            .json_body(json!([{"id": 1, "name": "Jo Rivera", "position": "Partner"}]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/public/testimonials");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/public/trusted-companies");
        then.status(200).json_body(json!([]));
    });

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let session = Arc::new(SessionStore::open(dir.path().join("session.json")));
    let config = ClientConfig {
        base_url: server.base_url(),
        timeout: Duration::from_secs(5),
        max_retries: 0,
        base_delay: Duration::from_millis(10),
    };
    let client = finconsult_client::FinConsultClient::new(config, session)
        .expect("Failed to build client");

    let home = client
        .home_content()
        .await
        .expect("Expected home content to load");
    assert_eq!(home.services.len(), 1);
    assert_eq!(home.team[0].name, "Jo Rivera");
    assert!(home.testimonials.is_empty());
    assert!(home.trusted_companies.is_empty());
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start();
    let missing = server.mock(|when, then| {
        when.method(GET).path("/public/team/99");
        then.status(404).json_body(json!({"message": "team member not found"}));
    });

    let (client, _session, _dir) = test_client(&server, Duration::from_millis(10));
    let public = PublicApi::new(client);

    let err = public
        .team_member(99)
        .await
        .expect_err("Expected a failure");
    missing.assert_hits(1);
    match err {
        ApiError::Client { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "team member not found");
        }
        other => panic!("Expected a client error, got {:?}", other),
    }
}
