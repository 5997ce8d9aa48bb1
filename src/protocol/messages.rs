//! JSON bodies exchanged with the quizzer API.
//!
//! The API is read-only from the client's side: every call is a `GET` and
//! every response is one of the bodies below.

use std::time::Duration;

use serde::Deserialize;

/// Default API host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default API port.
pub const DEFAULT_PORT: u16 = 5000;

/// Path prefix every endpoint lives under.
pub const API_PREFIX: &str = "api";

/// Path of the random question endpoint, relative to the API base.
pub const RANDOM_QUESTION_PATH: &str = "random-question";

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Body of a successful `GET /random-question`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionPayload {
    pub id: String,
    pub question_text: String,
    pub answer_index: i64,
    pub choices: Vec<String>,
}

/// Body of a successful `GET /question/{id}/answer/{index}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerVerdict {
    pub is_correct: bool,
}

/// Body of any 4xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// Build the API base URL for a host and port.
pub fn api_base_url(host: &str, port: u16) -> String {
    format!("http://{}:{}/{}", host, port, API_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url() {
        assert_eq!(
            api_base_url(DEFAULT_HOST, DEFAULT_PORT),
            "http://127.0.0.1:5000/api"
        );
    }

    #[test]
    fn test_verdict_deserialization() {
        let verdict: AnswerVerdict = serde_json::from_str(r#"{"is_correct": true}"#).unwrap();
        assert!(verdict.is_correct);

        let err: Result<AnswerVerdict, _> = serde_json::from_str(r#"{"correct": true}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_error_message_deserialization() {
        let body: ErrorMessage =
            serde_json::from_str(r#"{"message": "no questions available"}"#).unwrap();
        assert_eq!(body.message, "no questions available");
    }
}
