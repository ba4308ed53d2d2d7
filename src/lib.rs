//! Plain-text quiz to Moodle GIFT conversion.
//!
//! Quizzes are numbered questions (`P1.` or `::P1::`) with lettered options
//! (`A)` through `D)`) and an explicit correct-answer marker (`Correcta: X`).

pub mod domain;
pub use domain::{AnswerOption, Label, Letter, Question};

pub mod gift;
pub use gift::emit;

pub mod parser;
pub use parser::{FormatError, parse};
