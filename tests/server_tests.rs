//! Live-server smoke tests over a real TCP socket
//!
//! Run with: cargo test --test server_tests -- --ignored --test-threads=1
//! (Single thread to avoid port conflicts)

use std::time::Duration;
use tokio::time::sleep;

use inkpress::api::run_server;
use inkpress::Config;

/// Start the API server in the background on a given port
async fn start_test_server(port: u16) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let _ = run_server(Config::default(), "127.0.0.1", port).await;
    })
}

/// Wait for the server to answer its health check
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = reqwest::Client::new();
    for attempt in 0..max_attempts {
        match client
            .get(format!("http://127.0.0.1:{}/api/health", port))
            .timeout(Duration::from_secs(1))
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => return true,
            _ => {
                if attempt < max_attempts - 1 {
                    sleep(Duration::from_millis(100)).await;
                }
            }
        }
    }
    false
}

#[tokio::test]
#[ignore]
async fn test_live_health_endpoint() {
    let port = 4101u16;
    let server = start_test_server(port).await;
    assert!(wait_for_server(port, 50).await, "server failed to start");

    let response = reqwest::get(format!("http://127.0.0.1:{}/api/health", port))
        .await
        .expect("health request");
    assert!(response.status().is_success());

    server.abort();
}

#[tokio::test]
#[ignore]
async fn test_live_login_and_me() {
    let port = 4102u16;
    let server = start_test_server(port).await;
    assert!(wait_for_server(port, 50).await, "server failed to start");

    let client = reqwest::Client::new();
    let login: serde_json::Value = client
        .post(format!("http://127.0.0.1:{}/api/auth/login", port))
        .json(&serde_json::json!({ "email": "admin@blog.com", "password": "admin123" }))
        .send()
        .await
        .expect("login request")
        .json()
        .await
        .expect("login body");

    let token = login["access_token"].as_str().expect("token");

    let me: serde_json::Value = client
        .get(format!("http://127.0.0.1:{}/api/auth/me", port))
        .bearer_auth(token)
        .send()
        .await
        .expect("me request")
        .json()
        .await
        .expect("me body");

    assert_eq!(me["email"], "admin@blog.com");
    assert_eq!(me["role"], "admin");

    server.abort();
}
