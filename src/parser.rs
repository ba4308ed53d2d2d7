//! Line-oriented parser for the plain-text quiz format.
//!
//! # Format
//! ```text
//! P1. What is 2+2?
//! A) 3
//! B) 4
//! Correcta: B
//!
//! ::P2::
//! Which of these is a prime number,
//! the smallest one greater than 10?
//! A) 9
//! B) 11
//! C) 12
//! Respuesta correcta: B
//! ```
//!
//! Headers are accepted as `P<n>.` or `::P<n>::` (case-insensitive), prompts
//! may span several lines, and blank lines are insignificant separators. The
//! correct-answer marker accepts an optional leading `✅` and either
//! `Correcta:` or `Respuesta correcta:`.
//!
//! Parsing is a forward-only cursor over the physical lines, one question at
//! a time: header, prompt, options, then the answer marker. The first
//! structural violation aborts the whole document with a line-numbered
//! [`FormatError`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{AnswerOption, Label, Letter, Question, QuestionError};

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:::\s*p(\d+)\s*::|p(\d+)\.)\s*(.*)$").expect("hard-coded pattern is valid")
});

static OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([a-d])\)\s*(.+)$").expect("hard-coded pattern is valid"));

static ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:✅\s*)?(?:correcta|respuesta\s+correcta)\s*:\s*([a-d])$")
        .expect("hard-coded pattern is valid")
});

/// Parse a full quiz document into questions, in source order.
///
/// # Errors
///
/// Returns a [`FormatError`] on the first structural violation: a missing
/// question header, a header with no options before the next header, an
/// empty prompt, fewer than 2 options, a missing `Correcta: X` line, or a
/// correct letter that matches none of the options.
pub fn parse(text: &str) -> Result<Vec<Question>, FormatError> {
    let mut parser = Parser::new(text);
    let mut questions = Vec::new();

    parser.skip_blank_lines();
    while !parser.is_at_end() {
        let question = parser.question()?;
        debug!(label = %question.label(), options = question.options().len(), "parsed question");
        questions.push(question);
        parser.skip_blank_lines();
    }

    Ok(questions)
}

/// Classification of one physical input line, after trimming.
#[derive(Debug)]
enum Line<'a> {
    /// A question header carrying a label and any trailing prompt text.
    Header { label: Label, rest: &'a str },
    /// A lettered option.
    Option { letter: Letter, text: &'a str },
    /// A correct-answer marker.
    Answer { letter: Letter },
    /// Whitespace only.
    Blank,
    /// Anything else.
    Text,
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }

    if let Some(caps) = HEADER.captures(trimmed) {
        let digits = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str());
        if let Some(label) = digits.and_then(|digits| Label::from_digits(digits).ok()) {
            let rest = caps.get(3).map_or("", |m| m.as_str());
            return Line::Header { label, rest };
        }
    }

    if let Some(caps) = OPTION.captures(trimmed) {
        let letter = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .and_then(|c| Letter::try_from(c).ok());
        if let (Some(letter), Some(text)) = (letter, caps.get(2).map(|m| m.as_str())) {
            return Line::Option { letter, text };
        }
    }

    if let Some(caps) = ANSWER.captures(trimmed) {
        let letter = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .and_then(|c| Letter::try_from(c).ok());
        if let Some(letter) = letter {
            return Line::Answer { letter };
        }
    }

    Line::Text
}

/// A forward-only cursor over the document's physical lines.
///
/// Each parsing phase is a separate method so the per-phase behavior is
/// independently testable.
struct Parser<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            cursor: 0,
        }
    }

    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.cursor).copied()
    }

    /// 1-based line number of the cursor position.
    const fn line_number(&self) -> usize {
        self.cursor + 1
    }

    fn is_at_end(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    fn skip_blank_lines(&mut self) {
        while self
            .current()
            .is_some_and(|line| line.trim().is_empty())
        {
            self.advance();
        }
    }

    /// Parse one complete question block starting at the cursor.
    fn question(&mut self) -> Result<Question, FormatError> {
        let header_line = self.line_number();
        let (label, first_fragment) = self.header()?;
        let prompt = self.prompt(&label, first_fragment, header_line)?;
        let options = self.options(&label, header_line)?;
        let correct = self.answer(&label, header_line)?;

        Question::new(label.clone(), prompt, options, correct)
            .map_err(|source| FormatError::from_question(label, header_line, source))
    }

    /// Header phase: the current line must introduce a question.
    ///
    /// Trailing text after the marker becomes the first prompt fragment.
    fn header(&mut self) -> Result<(Label, Option<String>), FormatError> {
        let line_number = self.line_number();
        let Some(line) = self.current() else {
            return Err(FormatError::MissingHeader {
                line: line_number,
                text: String::new(),
            });
        };

        if let Line::Header { label, rest } = classify(line) {
            self.advance();
            let rest = rest.trim();
            let first_fragment = (!rest.is_empty()).then(|| rest.to_string());
            Ok((label, first_fragment))
        } else {
            Err(FormatError::MissingHeader {
                line: line_number,
                text: line.trim().to_string(),
            })
        }
    }

    /// Prompt phase: accumulate trimmed lines until the options begin.
    ///
    /// A new header before any option means the current question has no
    /// options, which is rejected. Answer-marker-shaped lines in this phase
    /// are plain prompt text, matching the reference behavior.
    fn prompt(
        &mut self,
        label: &Label,
        first_fragment: Option<String>,
        header_line: usize,
    ) -> Result<String, FormatError> {
        let mut fragments: Vec<String> = first_fragment.into_iter().collect();

        while let Some(line) = self.current() {
            match classify(line) {
                Line::Blank => self.advance(),
                Line::Option { .. } => break,
                Line::Header { .. } => {
                    return Err(FormatError::MissingOptions {
                        name: label.clone(),
                        line: self.line_number(),
                    });
                }
                Line::Answer { .. } | Line::Text => {
                    fragments.push(line.trim().to_string());
                    self.advance();
                }
            }
        }

        if fragments.is_empty() {
            return Err(FormatError::EmptyPrompt {
                name: label.clone(),
                line: header_line,
            });
        }
        Ok(fragments.join(" "))
    }

    /// Options phase: collect consecutive option lines, blanks allowed.
    fn options(
        &mut self,
        label: &Label,
        header_line: usize,
    ) -> Result<Vec<AnswerOption>, FormatError> {
        let mut options = Vec::new();

        while let Some(line) = self.current() {
            match classify(line) {
                Line::Blank => self.advance(),
                Line::Option { letter, text } => {
                    options.push(AnswerOption::new(letter, text.trim().to_string()));
                    self.advance();
                }
                Line::Header { .. } | Line::Answer { .. } | Line::Text => break,
            }
        }

        if options.len() < 2 {
            return Err(FormatError::TooFewOptions {
                name: label.clone(),
                line: header_line,
                found: options.len(),
            });
        }
        Ok(options)
    }

    /// Answer phase: scan forward for the `Correcta: X` marker.
    ///
    /// Non-matching lines are skipped silently, so the marker need not
    /// immediately follow the last option. A new header ends the scan.
    fn answer(&mut self, label: &Label, header_line: usize) -> Result<Letter, FormatError> {
        while let Some(line) = self.current() {
            match classify(line) {
                Line::Blank | Line::Option { .. } | Line::Text => self.advance(),
                Line::Header { .. } => break,
                Line::Answer { letter } => {
                    self.advance();
                    return Ok(letter);
                }
            }
        }

        Err(FormatError::MissingAnswer {
            name: label.clone(),
            line: header_line,
        })
    }
}

/// Errors raised while parsing the plain-text quiz.
///
/// Every variant carries a 1-based source line number: the offending line
/// where one exists, otherwise the question's header line.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    /// No question header where one was expected.
    #[error("line {line}: no question start found: {text:?}")]
    MissingHeader {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// A new header appeared before any option line.
    #[error("question {name}: missing options before line {line}")]
    MissingOptions {
        /// The question being parsed.
        name: Label,
        /// 1-based line number of the next header.
        line: usize,
    },

    /// No prompt text was collected.
    #[error("question {name} (line {line}): empty prompt")]
    EmptyPrompt {
        /// The question being parsed.
        name: Label,
        /// 1-based line number of the question's header.
        line: usize,
    },

    /// Fewer than two options were collected.
    #[error("question {name} (line {line}): need at least 2 options, found {found}")]
    TooFewOptions {
        /// The question being parsed.
        name: Label,
        /// 1-based line number of the question's header.
        line: usize,
        /// How many options were found.
        found: usize,
    },

    /// No correct-answer marker was found before the next header or the end
    /// of input.
    #[error("question {name} (line {line}): no 'Correcta: X' line found")]
    MissingAnswer {
        /// The question being parsed.
        name: Label,
        /// 1-based line number of the question's header.
        line: usize,
    },

    /// The marked correct letter matches none of the collected options.
    #[error(
        "question {name} (line {line}): correct letter {letter} is not among the options {available:?}"
    )]
    UnknownCorrectLetter {
        /// The question being parsed.
        name: Label,
        /// 1-based line number of the question's header.
        line: usize,
        /// The claimed correct letter.
        letter: Letter,
        /// The letters actually collected, in option order.
        available: Vec<Letter>,
    },
}

impl FormatError {
    fn from_question(name: Label, line: usize, source: QuestionError) -> Self {
        match source {
            QuestionError::TooFewOptions { found } => Self::TooFewOptions { name, line, found },
            QuestionError::CorrectNotPresent { correct, available } => Self::UnknownCorrectLetter {
                name,
                line,
                letter: correct,
                available,
            },
        }
    }
}
