//! Background task that runs API calls for the game loop.

use std::fmt;

use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use crate::models::Question;

use super::{ClientError, QuizClient};

/// A call the game loop wants made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchQuestion,
    CheckAnswer {
        question_id: String,
        selected_index: usize,
    },
}

/// Result of a [`Request`], delivered back to the game loop.
#[derive(Debug)]
pub enum Outcome {
    Question(Result<Question, ClientError>),
    Verdict(Result<bool, ClientError>),
}

/// The worker task is gone and can no longer take or answer requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStopped;

impl fmt::Display for WorkerStopped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Network worker stopped unexpectedly")
    }
}

impl std::error::Error for WorkerStopped {}

/// Handle to the network task.
///
/// Requests are processed one at a time in submission order. Dropping the
/// handle stops the task.
pub struct Worker {
    requests: mpsc::UnboundedSender<Request>,
    outcomes: mpsc::UnboundedReceiver<Outcome>,
    task: JoinHandle<()>,
}

impl Worker {
    /// Spawn the worker onto the current tokio runtime.
    pub fn spawn(client: QuizClient) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<Request>();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<Outcome>();

        let task = tokio::spawn(async move {
            while let Some(request) = request_rx.recv().await {
                let outcome = execute(&client, request).await;
                if outcome_tx.send(outcome).is_err() {
                    break;
                }
            }
            tracing::debug!("network worker finished");
        });

        Self {
            requests: request_tx,
            outcomes: outcome_rx,
            task,
        }
    }

    pub fn submit(&self, request: Request) -> Result<(), WorkerStopped> {
        tracing::debug!(?request, "submitting request");
        self.requests.send(request).map_err(|_| WorkerStopped)
    }

    /// Take a finished outcome without waiting, if there is one.
    pub fn try_next(&mut self) -> Result<Option<Outcome>, WorkerStopped> {
        match self.outcomes.try_recv() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerStopped),
        }
    }

    /// Wait for the next outcome.
    pub async fn next(&mut self) -> Result<Outcome, WorkerStopped> {
        self.outcomes.recv().await.ok_or(WorkerStopped)
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn execute(client: &QuizClient, request: Request) -> Outcome {
    match request {
        Request::FetchQuestion => Outcome::Question(client.fetch_random_question().await),
        Request::CheckAnswer {
            question_id,
            selected_index,
        } => Outcome::Verdict(client.check_answer(&question_id, selected_index).await),
    }
}
