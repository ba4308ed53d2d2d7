//! Domain models for quiz conversion.
//!
//! This module contains the core value types: question labels, option
//! letters, answer options, and fully validated questions.

/// Question label (`P1`, `P2`, ...) types and parsing.
pub mod label;
pub use label::{Error as LabelError, Label};

mod question;
pub use question::{AnswerOption, Error as QuestionError, Letter, LetterError, Question};
