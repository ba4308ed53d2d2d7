//! Emission of parsed questions as Moodle GIFT markup.
//!
//! Each question becomes a block of the shape:
//!
//! ```text
//! ::P1::
//! What is 2+2?
//! {
//! ~3
//! =4
//! ~5
//! }
//! ```
//!
//! with `=` marking the correct option, `~` the rest, and one blank line
//! between blocks.

use crate::domain::Question;

/// Render questions as GIFT markup.
///
/// Options are emitted in collection order. The output always ends with
/// exactly one line break, however many blank lines the blocks produced.
#[must_use]
pub fn emit(questions: &[Question]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for question in questions {
        lines.push(format!("::{}::", question.label()));
        lines.push(question.prompt().to_string());
        lines.push("{".to_string());
        for option in question.options() {
            let prefix = if option.letter() == question.correct() {
                '='
            } else {
                '~'
            };
            lines.push(format!("{prefix}{}", option.text()));
        }
        lines.push("}".to_string());
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnswerOption, Label, Letter};

    fn question(label: usize, correct: Letter, options: &[(Letter, &str)]) -> Question {
        let options = options
            .iter()
            .map(|&(letter, text)| AnswerOption::new(letter, text.to_string()))
            .collect();
        Question::new(
            Label::new(label),
            "What is 2+2?".to_string(),
            options,
            correct,
        )
        .unwrap()
    }

    #[test]
    fn emits_exact_block() {
        let questions = vec![question(
            1,
            Letter::B,
            &[(Letter::A, "3"), (Letter::B, "4"), (Letter::C, "5")],
        )];

        assert_eq!(
            emit(&questions),
            "::P1::\nWhat is 2+2?\n{\n~3\n=4\n~5\n}\n"
        );
    }

    #[test]
    fn separates_questions_with_one_blank_line() {
        let questions = vec![
            question(1, Letter::A, &[(Letter::A, "x"), (Letter::B, "y")]),
            question(2, Letter::B, &[(Letter::A, "x"), (Letter::B, "y")]),
        ];

        let output = emit(&questions);
        assert!(output.contains("}\n\n::P2::"));
    }

    #[test]
    fn ends_with_exactly_one_line_break() {
        let questions = vec![question(1, Letter::A, &[(Letter::A, "x"), (Letter::B, "y")])];

        let output = emit(&questions);
        assert!(output.ends_with("}\n"));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn marks_exactly_one_option_correct() {
        let questions = vec![question(
            3,
            Letter::C,
            &[(Letter::A, "x"), (Letter::B, "y"), (Letter::C, "z")],
        )];

        let output = emit(&questions);
        assert_eq!(output.matches('=').count(), 1);
        assert_eq!(output.matches('~').count(), 2);
    }

    #[test]
    fn empty_input_emits_single_line_break() {
        assert_eq!(emit(&[]), "\n");
    }

    #[test]
    fn parse_then_emit_round_trip() {
        let input = "\
P1. What is 2+2?

A) 3
B) 4
C) 5
✅ Correcta: B

::P2::
Pick one.
a) first
b) second
Respuesta correcta: a
";
        let questions = crate::parser::parse(input).unwrap();
        assert_eq!(
            emit(&questions),
            "::P1::\nWhat is 2+2?\n{\n~3\n=4\n~5\n}\n\n::P2::\nPick one.\n{\n=first\n~second\n}\n"
        );
    }
}
