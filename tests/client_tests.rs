// tests/client_tests.rs

mod common;

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use quiz_game::{ClientError, QuizClient};
use serde_json::json;

use common::{dead_api, question_json, spawn_api};

fn fixed_question_route(status: StatusCode, body: serde_json::Value) -> Router {
    Router::new().route(
        "/api/random-question",
        get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

#[tokio::test]
async fn fetch_random_question_works() {
    // Arrange
    let id = uuid::Uuid::new_v4().to_string();
    let body = question_json(&id, "Capital of France?", &["Berlin", "Paris", "Rome"], 1);
    let base_url = spawn_api(fixed_question_route(StatusCode::OK, body)).await;
    let client = QuizClient::new(&base_url).unwrap();

    // Act
    let question = client.fetch_random_question().await.unwrap();

    // Assert
    assert_eq!(question.id(), id);
    assert_eq!(question.question_text(), "Capital of France?");
    assert_eq!(question.choices(), &["Berlin", "Paris", "Rome"]);
    assert_eq!(question.answer_index(), 1);
}

#[tokio::test]
async fn fetch_bad_request_surfaces_server_message() {
    let body = json!({ "message": "no questions available" });
    let base_url = spawn_api(fixed_question_route(StatusCode::BAD_REQUEST, body)).await;
    let client = QuizClient::new(&base_url).unwrap();

    let err = client.fetch_random_question().await.unwrap_err();

    assert_eq!(
        err,
        ClientError::BadRequest("no questions available".to_string())
    );
    assert_eq!(err.to_string(), "Bad request: no questions available");
}

#[tokio::test]
async fn fetch_any_client_error_is_bad_request() {
    let body = json!({ "message": "question pool not found" });
    let base_url = spawn_api(fixed_question_route(StatusCode::NOT_FOUND, body)).await;
    let client = QuizClient::new(&base_url).unwrap();

    let err = client.fetch_random_question().await.unwrap_err();

    assert_eq!(
        err,
        ClientError::BadRequest("question pool not found".to_string())
    );
}

#[tokio::test]
async fn fetch_server_error_hides_body() {
    let body = json!({ "message": "database password is hunter2" });
    let base_url = spawn_api(fixed_question_route(StatusCode::INTERNAL_SERVER_ERROR, body)).await;
    let client = QuizClient::new(&base_url).unwrap();

    let err = client.fetch_random_question().await.unwrap_err();

    assert_eq!(err, ClientError::ServiceUnreachable);
    assert!(!err.to_string().contains("hunter2"));
}

#[tokio::test]
async fn fetch_malformed_question_is_rejected() {
    let body = json!({ "id": "q1", "question_text": "Missing choices", "answer_index": 0 });
    let base_url = spawn_api(fixed_question_route(StatusCode::OK, body)).await;
    let client = QuizClient::new(&base_url).unwrap();

    let err = client.fetch_random_question().await.unwrap_err();

    assert!(matches!(err, ClientError::MalformedQuestion(_)));
}

#[tokio::test]
async fn fetch_out_of_bounds_answer_is_rejected() {
    let body = question_json("q1", "Out of range", &["a", "b"], 5);
    let base_url = spawn_api(fixed_question_route(StatusCode::OK, body)).await;
    let client = QuizClient::new(&base_url).unwrap();

    let err = client.fetch_random_question().await.unwrap_err();

    assert!(matches!(err, ClientError::MalformedQuestion(_)));
}

#[tokio::test]
async fn bad_request_without_message_is_malformed() {
    let body = json!({ "error": "nope" });
    let base_url = spawn_api(fixed_question_route(StatusCode::BAD_REQUEST, body)).await;
    let client = QuizClient::new(&base_url).unwrap();

    let err = client.fetch_random_question().await.unwrap_err();

    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_api_is_service_unreachable() {
    let base_url = dead_api().await;
    let client = QuizClient::new(&base_url).unwrap();

    let err = client.fetch_random_question().await.unwrap_err();
    assert_eq!(err, ClientError::ServiceUnreachable);

    let err = client.check_answer("q1", 0).await.unwrap_err();
    assert_eq!(err, ClientError::ServiceUnreachable);
}

type Calls = Arc<Mutex<Vec<(String, usize)>>>;

async fn answer(
    State(calls): State<Calls>,
    Path((id, index)): Path<(String, usize)>,
) -> (StatusCode, Json<serde_json::Value>) {
    calls.lock().unwrap().push((id.clone(), index));

    match id.as_str() {
        "broken" => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "message": "maintenance" })),
        ),
        "unknown" => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Question not found" })),
        ),
        "garbled" => (StatusCode::OK, Json(json!({ "correct": true }))),
        _ => (StatusCode::OK, Json(json!({ "is_correct": index == 2 }))),
    }
}

async fn spawn_answer_api() -> (String, Calls) {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/api/question/{id}/answer/{index}", get(answer))
        .with_state(calls.clone());

    (spawn_api(router).await, calls)
}

#[tokio::test]
async fn check_answer_reports_server_verdict() {
    let (base_url, calls) = spawn_answer_api().await;
    let client = QuizClient::new(&base_url).unwrap();
    let id = uuid::Uuid::new_v4().to_string();

    assert!(client.check_answer(&id, 2).await.unwrap());
    assert!(!client.check_answer(&id, 0).await.unwrap());

    let calls = calls.lock().unwrap().clone();
    assert_eq!(calls, vec![(id.clone(), 2), (id, 0)]);
}

#[tokio::test]
async fn check_answer_error_mapping() {
    let (base_url, _calls) = spawn_answer_api().await;
    let client = QuizClient::new(&base_url).unwrap();

    assert_eq!(
        client.check_answer("unknown", 1).await.unwrap_err(),
        ClientError::BadRequest("Question not found".to_string())
    );
    assert_eq!(
        client.check_answer("broken", 1).await.unwrap_err(),
        ClientError::ServiceUnreachable
    );
    assert!(matches!(
        client.check_answer("garbled", 1).await.unwrap_err(),
        ClientError::MalformedResponse(_)
    ));
}
