//! Wire format of the quizzer API.

mod messages;

pub use messages::*;
