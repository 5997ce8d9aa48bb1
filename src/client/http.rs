//! HTTP implementation of the quizzer API calls.

use reqwest::{Response, Url};

use crate::models::Question;
use crate::protocol::{AnswerVerdict, ErrorMessage, RANDOM_QUESTION_PATH, REQUEST_TIMEOUT};

use super::ClientError;

/// Client for the quizzer API.
///
/// Each call is a single attempt bounded by [`REQUEST_TIMEOUT`]; nothing is
/// retried.
#[derive(Debug, Clone)]
pub struct QuizClient {
    http: reqwest::Client,
    base_url: Url,
}

impl QuizClient {
    /// Create a client for an API rooted at `base_url`, e.g.
    /// `http://127.0.0.1:5000/api`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Setup(format!("invalid API URL {}: {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::Setup(format!(
                "API URL {} cannot have a path",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Fetch a random question.
    pub async fn fetch_random_question(&self) -> Result<Question, ClientError> {
        let url = self.endpoint(&[RANDOM_QUESTION_PATH]);
        let body = self.get(url).await?;
        let question = Question::from_json(&body)?;

        tracing::info!(id = question.id(), "fetched question");
        Ok(question)
    }

    /// Ask the API whether `selected_index` is the right answer to the
    /// question with `question_id`.
    pub async fn check_answer(
        &self,
        question_id: &str,
        selected_index: usize,
    ) -> Result<bool, ClientError> {
        let index = selected_index.to_string();
        let url = self.endpoint(&["question", question_id, "answer", &index]);
        let body = self.get(url).await?;

        let verdict: AnswerVerdict = serde_json::from_slice(&body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        tracing::info!(
            id = question_id,
            selected_index,
            is_correct = verdict.is_correct,
            "checked answer"
        );
        Ok(verdict.is_correct)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL always has a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send a `GET` and return the body of a 2xx response.
    async fn get(&self, url: Url) -> Result<Vec<u8>, ClientError> {
        tracing::debug!(%url, "GET");

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(%url, "request failed: {}", e);
            ClientError::ServiceUnreachable
        })?;

        read_body(url, response).await
    }
}

async fn read_body(url: Url, response: Response) -> Result<Vec<u8>, ClientError> {
    let status = response.status();

    if !status.is_success() && !status.is_client_error() {
        tracing::warn!(%url, %status, "quizzer API returned an error status");
        return Err(ClientError::ServiceUnreachable);
    }

    let body = response.bytes().await.map_err(|e| {
        tracing::warn!(%url, %status, "failed to read response body: {}", e);
        ClientError::ServiceUnreachable
    })?;

    if status.is_success() {
        return Ok(body.to_vec());
    }

    let error: ErrorMessage = serde_json::from_slice(&body).map_err(|e| {
        ClientError::MalformedResponse(format!("{} response without a message: {}", status, e))
    })?;

    tracing::warn!(%url, %status, message = %error.message, "bad request");
    Err(ClientError::BadRequest(error.message))
}
