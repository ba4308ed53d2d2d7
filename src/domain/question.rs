use std::fmt;

use serde::Serialize;

use super::Label;

/// One of the four accepted option letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Letter {
    /// Option letter `A`.
    A,
    /// Option letter `B`.
    B,
    /// Option letter `C`.
    C,
    /// Option letter `D`.
    D,
}

impl Letter {
    /// Returns the uppercase character for this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            _ => Err(LetterError(value)),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when a character is not one of `A`-`D`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid option letter '{0}': expected A, B, C, or D")]
pub struct LetterError(char);

/// A single lettered answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    letter: Letter,
    text: String,
}

impl AnswerOption {
    /// Create an answer option.
    #[must_use]
    pub const fn new(letter: Letter, text: String) -> Self {
        Self { letter, text }
    }

    /// Returns the option's letter.
    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.letter
    }

    /// Returns the option's text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A fully parsed single-correct-answer multiple-choice question.
///
/// Constructed only through [`Question::new`], which enforces the
/// invariants; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    label: Label,
    prompt: String,
    options: Vec<AnswerOption>,
    correct: Letter,
}

impl Question {
    /// Create a question, validating its invariants.
    ///
    /// Options are kept in the order given. Duplicate option letters are
    /// tolerated; the reference format never ruled them out.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 options are given, or if `correct`
    /// does not match the letter of any option.
    pub fn new(
        label: Label,
        prompt: String,
        options: Vec<AnswerOption>,
        correct: Letter,
    ) -> Result<Self, Error> {
        if options.len() < 2 {
            return Err(Error::TooFewOptions {
                found: options.len(),
            });
        }
        if !options.iter().any(|option| option.letter == correct) {
            return Err(Error::CorrectNotPresent {
                correct,
                available: options.iter().map(AnswerOption::letter).collect(),
            });
        }
        Ok(Self {
            label,
            prompt,
            options,
            correct,
        })
    }

    /// Returns the question's canonical label.
    #[must_use]
    pub const fn label(&self) -> &Label {
        &self.label
    }

    /// Returns the prompt text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the options in collection order.
    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Returns the letter of the correct option.
    #[must_use]
    pub const fn correct(&self) -> Letter {
        self.correct
    }
}

/// Errors raised when constructing a [`Question`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A question needs at least two options.
    #[error("need at least 2 options, found {found}")]
    TooFewOptions {
        /// How many options were supplied.
        found: usize,
    },

    /// The correct letter matches none of the options.
    #[error("correct letter {correct} is not among the options {available:?}")]
    CorrectNotPresent {
        /// The claimed correct letter.
        correct: Letter,
        /// The letters actually present, in option order.
        available: Vec<Letter>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(letters: &[Letter]) -> Vec<AnswerOption> {
        letters
            .iter()
            .map(|&letter| AnswerOption::new(letter, format!("option {letter}")))
            .collect()
    }

    #[test]
    fn letter_from_char_is_case_insensitive() {
        assert_eq!(Letter::try_from('a').unwrap(), Letter::A);
        assert_eq!(Letter::try_from('D').unwrap(), Letter::D);
    }

    #[test]
    fn letter_rejects_out_of_range() {
        assert!(Letter::try_from('E').is_err());
        assert!(Letter::try_from('1').is_err());
    }

    #[test]
    fn valid_question() {
        let question = Question::new(
            Label::new(1),
            "prompt".to_string(),
            options(&[Letter::A, Letter::B]),
            Letter::B,
        )
        .unwrap();
        assert_eq!(question.correct(), Letter::B);
        assert_eq!(question.options().len(), 2);
    }

    #[test]
    fn rejects_single_option() {
        let result = Question::new(
            Label::new(1),
            "prompt".to_string(),
            options(&[Letter::A]),
            Letter::A,
        );
        assert_eq!(result.unwrap_err(), Error::TooFewOptions { found: 1 });
    }

    #[test]
    fn rejects_correct_letter_missing_from_options() {
        let result = Question::new(
            Label::new(1),
            "prompt".to_string(),
            options(&[Letter::A, Letter::B]),
            Letter::D,
        );
        assert_eq!(
            result.unwrap_err(),
            Error::CorrectNotPresent {
                correct: Letter::D,
                available: vec![Letter::A, Letter::B],
            }
        );
    }

    #[test]
    fn tolerates_duplicate_letters() {
        let result = Question::new(
            Label::new(1),
            "prompt".to_string(),
            options(&[Letter::A, Letter::A]),
            Letter::A,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn serializes_to_json() {
        let question = Question::new(
            Label::new(2),
            "prompt".to_string(),
            options(&[Letter::A, Letter::B]),
            Letter::A,
        )
        .unwrap();
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["label"], "P2");
        assert_eq!(json["correct"], "A");
        assert_eq!(json["options"][1]["letter"], "B");
    }
}
