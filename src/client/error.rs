use std::fmt;

use crate::models::MalformedQuestion;

/// Failure of a single call to the quizzer API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The API answered with a 4xx status; holds its message verbatim.
    BadRequest(String),
    /// Any other failed status, a connection failure or a timeout.
    ServiceUnreachable,
    /// A question body did not describe a valid question.
    MalformedQuestion(MalformedQuestion),
    /// Any other body that could not be understood.
    MalformedResponse(String),
    /// The client could not be constructed.
    Setup(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::BadRequest(message) => write!(f, "Bad request: {}", message),
            ClientError::ServiceUnreachable => {
                write!(f, "Something is wrong reaching the quizzer API.")
            }
            ClientError::MalformedQuestion(e) => write!(f, "Malformed question: {}", e),
            ClientError::MalformedResponse(reason) => {
                write!(f, "Malformed response from the quizzer API: {}", reason)
            }
            ClientError::Setup(reason) => write!(f, "Could not set up the API client: {}", reason),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::MalformedQuestion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MalformedQuestion> for ClientError {
    fn from(err: MalformedQuestion) -> Self {
        ClientError::MalformedQuestion(err)
    }
}
