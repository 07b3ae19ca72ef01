//! Core domain types for Wordle
//!
//! Words, feedback and the constraint engine. Everything here is pure and
//! deterministic; games and players are built on top of it.

mod constraints;
mod feedback;
mod word;

pub use constraints::{ConstraintError, ConstraintState};
pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{Word, WordError};
