use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::Context;
use text2gift::{Letter, Question, parser};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
#[command(about = "Validate a plain-text quiz without writing any output")]
pub struct Check {
    /// The plain-text quiz file (UTF-8)
    input: PathBuf,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Check {
    #[instrument]
    pub fn run(self) -> anyhow::Result<()> {
        let text = fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read '{}'", self.input.display()))?;

        let questions = parser::parse(&text)?;

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&questions)?),
            OutputFormat::Table => Self::output_table(&questions),
        }

        Ok(())
    }

    fn output_table(questions: &[Question]) {
        if questions.is_empty() {
            println!("{}", "No questions found in the input.".dim());
            return;
        }

        for question in questions {
            println!(
                "{:<6} {} options, correct {}",
                question.label().to_string(),
                question.options().len(),
                question.correct()
            );
            // Duplicate letters are accepted by the parser but almost
            // certainly a typo in the source quiz.
            for letter in duplicate_letters(question) {
                println!(
                    "  {}",
                    format!("⚠️  option letter {letter} appears more than once").warning()
                );
            }
        }

        let count = questions.len();
        println!("{}", format!("✅ {count} questions look well-formed.").success());
    }
}

fn duplicate_letters(question: &Question) -> Vec<Letter> {
    let mut counts: BTreeMap<Letter, usize> = BTreeMap::new();
    for option in question.options() {
        *counts.entry(option.letter()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter_map(|(letter, count)| (count > 1).then_some(letter))
        .collect()
}
