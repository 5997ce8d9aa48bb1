//! Quizzer API client.
//!
//! [`QuizClient`] performs the two HTTP calls the game needs and [`Worker`]
//! runs them off the render loop.

mod error;
mod http;
mod worker;

pub use error::ClientError;
pub use http::QuizClient;
pub use worker::{Outcome, Request, Worker, WorkerStopped};
