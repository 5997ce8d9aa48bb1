// tests/common/mod.rs

#![allow(dead_code)]

use axum::Router;
use serde_json::{Value, json};

/// Serve `router` on a random local port and return the API base URL
/// (e.g. "http://127.0.0.1:12345/api").
pub async fn spawn_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{}/api", port)
}

/// Base URL of a port nothing is listening on.
pub async fn dead_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    format!("http://127.0.0.1:{}/api", port)
}

pub fn question_json(id: &str, text: &str, choices: &[&str], answer_index: usize) -> Value {
    json!({
        "id": id,
        "question_text": text,
        "answer_index": answer_index,
        "choices": choices,
    })
}
