//! Status proxy integration tests
//!
//! Runs the proxy over real HTTP against a mocked Lanyard API.

use integration_tests::*;
use presence_common::Environment;
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::ResponseTemplate;

const STATUS_PATH: &str = "/api/discord-status";

// ===== Health =====

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/unknown").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ===== Successful reads =====

#[tokio::test]
async fn test_status_with_activity() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .mock_presence(&PresenceFixture::online().activity(activity("t1", "Terminal", 0)))
        .await;

    let response = server.get(STATUS_PATH).await.expect("Request failed");
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "no-store"
    );
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["source"], "lanyard");
    assert!(body["lastUpdated"].is_string());

    assert_eq!(body["user"]["id"], TEST_USER_ID);
    assert_eq!(body["user"]["username"], "quokka");
    assert_eq!(body["user"]["globalName"], "Quokka");
    assert_eq!(body["user"]["displayName"], Value::Null);
    assert_eq!(body["user"]["publicFlags"], 4_194_304);
    assert_eq!(
        body["user"]["avatarUrl"],
        format!("https://cdn.discordapp.com/avatars/{TEST_USER_ID}/{TEST_AVATAR}.png?size=256")
    );

    let presence = &body["presence"];
    assert_eq!(presence["status"], "online");
    assert_eq!(presence["activities"].as_array().unwrap().len(), 1);
    assert_eq!(presence["primaryActivity"]["name"], "Terminal");
    assert_eq!(presence["spotify"], Value::Null);
    assert_eq!(
        presence["activeOn"],
        json!({ "web": false, "desktop": true, "mobile": false, "embedded": false })
    );
}

#[tokio::test]
async fn test_spotify_passthrough() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .mock_presence(
            &PresenceFixture::online()
                .activity(activity("spotify:1", "Spotify", 2))
                .activity(activity("g1", "Factorio", 0))
                .spotify(true),
        )
        .await;

    let response = server.get(STATUS_PATH).await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let presence = &body["presence"];
    let activities = presence["activities"].as_array().unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0]["name"], "Factorio");
    assert_eq!(presence["primaryActivity"]["name"], "Factorio");
    assert_eq!(presence["spotify"], spotify_block());
}

#[tokio::test]
async fn test_spotify_ignored_when_not_listening() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .mock_presence(&PresenceFixture::online().spotify(false))
        .await;

    let response = server.get(STATUS_PATH).await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["presence"]["spotify"], Value::Null);
}

#[tokio::test]
async fn test_default_avatars() {
    let server = TestServer::start().await.expect("Failed to start server");

    server
        .mock_presence(&PresenceFixture::online().avatar(None))
        .await;
    let body: Value = assert_json(
        server.get(STATUS_PATH).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(
        body["user"]["avatarUrl"],
        "https://cdn.discordapp.com/embed/avatars/0.png"
    );

    server
        .mock_presence(
            &PresenceFixture::online()
                .avatar(None)
                .discriminator("1337"),
        )
        .await;
    let body: Value = assert_json(
        server.get(STATUS_PATH).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(
        body["user"]["avatarUrl"],
        "https://cdn.discordapp.com/embed/avatars/2.png"
    );
}

#[tokio::test]
async fn test_animated_avatar() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .mock_presence(&PresenceFixture::online().avatar(Some("a_0123abcd")))
        .await;

    let body: Value = assert_json(
        server.get(STATUS_PATH).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(
        body["user"]["avatarUrl"],
        format!("https://cdn.discordapp.com/avatars/{TEST_USER_ID}/a_0123abcd.gif?size=256")
    );
}

#[tokio::test]
async fn test_repeated_reads_agree() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .mock_presence(&PresenceFixture::online().status("idle"))
        .await;

    let mut first: Value = assert_json(server.get(STATUS_PATH).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let mut second: Value = assert_json(server.get(STATUS_PATH).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    first.as_object_mut().unwrap().remove("lastUpdated");
    second.as_object_mut().unwrap().remove("lastUpdated");
    assert_eq!(first, second);
    assert_eq!(first["presence"]["status"], "idle");
}

#[tokio::test]
async fn test_upstream_request_headers() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.mock_presence(&PresenceFixture::online()).await;

    server.get(STATUS_PATH).await.expect("Request failed");

    let requests = server.lanyard.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let headers = &requests[0].headers;
    assert_eq!(headers.get("cache-control").unwrap(), "no-cache");
    assert_eq!(headers.get("accept").unwrap(), "application/json");
    assert!(headers.contains_key("user-agent"));
}

// ===== Error mapping =====

#[tokio::test]
async fn test_user_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .mock_lanyard(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": { "code": "user_not_monitored", "message": "User is not being monitored by Lanyard" }
        })))
        .await;

    let response = server.get(STATUS_PATH).await.expect("Request failed");
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "no-store"
    );
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body["code"], "USER_NOT_FOUND");
    assert_eq!(body["error"], "User not found");
    assert_eq!(body["helpUrl"], "https://discord.gg/lanyard");
    assert!(body["details"].as_str().unwrap().contains("Lanyard"));
}

#[tokio::test]
async fn test_rate_limited() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.mock_lanyard(ResponseTemplate::new(429)).await;

    let response = server.get(STATUS_PATH).await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();

    assert_eq!(body["code"], "RATE_LIMITED");
    assert_eq!(body["error"], "Rate limited");
    assert_eq!(body.get("helpUrl"), None);
}

#[tokio::test]
async fn test_upstream_failure_in_development() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .mock_lanyard(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .await;

    let response = server.get(STATUS_PATH).await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(body["code"], "FETCH_ERROR");
    assert_eq!(body["error"], "Failed to fetch Discord status");
    assert_eq!(body["details"], "Lanyard API returned 502: bad gateway");
    assert_eq!(body["userId"], TEST_USER_ID);
    assert!(body["timestamp"].is_string());
    assert_eq!(
        body["debug"]["chain"][0],
        "Lanyard API returned 502: bad gateway"
    );
}

#[tokio::test]
async fn test_upstream_failure_in_production_hides_debug() {
    let server = TestServer::start_with_config(|config| {
        config.app.env = Environment::Production;
    })
    .await
    .expect("Failed to start server");
    server
        .mock_lanyard(ResponseTemplate::new(500).set_body_string("boom"))
        .await;

    let response = server.get(STATUS_PATH).await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(body["code"], "FETCH_ERROR");
    assert_eq!(body.get("debug"), None);
}

#[tokio::test]
async fn test_unsuccessful_envelope() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .mock_lanyard(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": { "code": "internal", "message": "Something broke" }
        })))
        .await;

    let response = server.get(STATUS_PATH).await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(body["code"], "FETCH_ERROR");
    assert_eq!(body["details"], "Lanyard API error: Something broke");
}

#[tokio::test]
async fn test_missing_discord_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut data = PresenceFixture::online().data();
    data.as_object_mut().unwrap().remove("discord_user");
    server
        .mock_lanyard(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data })),
        )
        .await;

    let response = server.get(STATUS_PATH).await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(body["code"], "FETCH_ERROR");
    assert_eq!(
        body["details"],
        "No discord_user data received from Lanyard API"
    );
}

#[tokio::test]
async fn test_unknown_presence_status() {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .mock_presence(&PresenceFixture::online().status("invisible"))
        .await;

    let response = server.get(STATUS_PATH).await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();

    assert_eq!(body["code"], "FETCH_ERROR");
}
