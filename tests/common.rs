#![allow(dead_code)]

use std::net::SocketAddr;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response};
use health_server::config::ServerConfig;
use health_server::startup;

pub fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body")
        .to_vec()
}

/// Binds an ephemeral loopback port and serves on it in the background.
pub async fn spawn_server() -> SocketAddr {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    };
    let listener = startup::bind(&config).await.expect("bind should succeed");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(startup::serve(listener));
    addr
}
