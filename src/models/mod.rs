mod question;
mod state;

pub use question::{MIN_CHOICES, MalformedQuestion, Question};
pub use state::GameState;
