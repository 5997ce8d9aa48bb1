use std::fmt;

use serde::Deserialize;

use crate::protocol::QuestionPayload;

/// Minimum number of choices a multiple-choice question must offer.
pub const MIN_CHOICES: usize = 2;

/// A multiple-choice question as served by the quizzer API.
///
/// Values are only built through [`Question::new`] or deserialization, both
/// of which enforce that there are at least two choices and that the answer
/// index points at one of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "QuestionPayload")]
pub struct Question {
    id: String,
    question_text: String,
    choices: Vec<String>,
    answer_index: usize,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        question_text: impl Into<String>,
        choices: Vec<String>,
        answer_index: usize,
    ) -> Result<Self, MalformedQuestion> {
        if choices.len() < MIN_CHOICES {
            return Err(MalformedQuestion::new(format!(
                "expected at least {} choices, got {}",
                MIN_CHOICES,
                choices.len()
            )));
        }

        if answer_index >= choices.len() {
            return Err(MalformedQuestion::new(format!(
                "answer_index {} is out of bounds for {} choices",
                answer_index,
                choices.len()
            )));
        }

        Ok(Self {
            id: id.into(),
            question_text: question_text.into(),
            choices,
            answer_index,
        })
    }

    /// Parse a question from a JSON response body.
    pub fn from_json(body: &[u8]) -> Result<Self, MalformedQuestion> {
        serde_json::from_slice(body).map_err(|err| MalformedQuestion::new(err.to_string()))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Number of choices, never less than [`MIN_CHOICES`].
    pub fn num_choices(&self) -> usize {
        self.choices.len()
    }

    pub fn answer_index(&self) -> usize {
        self.answer_index
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question_text)
    }
}

impl TryFrom<QuestionPayload> for Question {
    type Error = MalformedQuestion;

    fn try_from(payload: QuestionPayload) -> Result<Self, Self::Error> {
        let answer_index = usize::try_from(payload.answer_index).map_err(|_| {
            MalformedQuestion::new(format!(
                "answer_index must not be negative, got {}",
                payload.answer_index
            ))
        })?;

        Self::new(
            payload.id,
            payload.question_text,
            payload.choices,
            answer_index,
        )
    }
}

/// A question body was missing fields, had fields of the wrong type or broke
/// the choice/answer invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedQuestion {
    reason: String,
}

impl MalformedQuestion {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for MalformedQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for MalformedQuestion {}
