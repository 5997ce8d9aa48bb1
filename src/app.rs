use crate::client::{ClientError, Outcome, Request};
use crate::models::{GameState, Question};

/// Request the game is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Verdict,
    Question,
}

pub struct App {
    pub state: GameState,
    question: Question,
    selected_option: usize,
    score: u32,
    pending: Option<Pending>,
}

impl App {
    pub fn new(question: Question) -> Self {
        Self {
            state: GameState::Running,
            question,
            selected_option: 0,
            score: 0,
            pending: None,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.question
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    // TODO: increment on a correct answer once the quizzer API confirms that
    // answers are scored.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    fn accepts_input(&self) -> bool {
        self.state == GameState::Running && self.pending.is_none()
    }

    pub fn select_next_option(&mut self) {
        if !self.accepts_input() {
            return;
        }
        let num_choices = self.question.num_choices();
        self.selected_option = (self.selected_option + 1) % num_choices;
    }

    pub fn select_previous_option(&mut self) {
        if !self.accepts_input() {
            return;
        }
        let num_choices = self.question.num_choices();
        self.selected_option = (self.selected_option + num_choices - 1) % num_choices;
    }

    /// Submit the selected option. Returns the request to send, if any.
    pub fn submit_answer(&mut self) -> Option<Request> {
        if !self.accepts_input() {
            return None;
        }
        self.pending = Some(Pending::Verdict);
        Some(Request::CheckAnswer {
            question_id: self.question.id().to_string(),
            selected_index: self.selected_option,
        })
    }

    /// Apply the API's verdict on the submitted answer. A correct answer asks
    /// for the next question; a wrong one changes nothing.
    pub fn answer_checked(&mut self, is_correct: bool) -> Option<Request> {
        if self.pending != Some(Pending::Verdict) {
            tracing::warn!("ignoring verdict nobody asked for");
            return None;
        }

        if is_correct {
            self.pending = Some(Pending::Question);
            Some(Request::FetchQuestion)
        } else {
            self.pending = None;
            None
        }
    }

    pub fn question_received(&mut self, question: Question) {
        if self.pending != Some(Pending::Question) {
            tracing::warn!(id = question.id(), "ignoring question nobody asked for");
            return;
        }

        self.question = question;
        self.selected_option = 0;
        self.pending = None;
    }

    /// Feed a finished request back into the game. Returns the follow-up
    /// request, if any; client errors are passed through untouched.
    pub fn apply(&mut self, outcome: Outcome) -> Result<Option<Request>, ClientError> {
        match outcome {
            Outcome::Verdict(result) => Ok(self.answer_checked(result?)),
            Outcome::Question(result) => {
                self.question_received(result?);
                Ok(None)
            }
        }
    }

    pub fn quit(&mut self) {
        self.state = GameState::GameOver;
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}
