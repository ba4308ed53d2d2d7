use std::{fs, path::PathBuf};

use anyhow::Context;
use text2gift::{gift, parser};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
#[command(about = "Convert a plain-text quiz to GIFT markup")]
pub struct Convert {
    /// The plain-text quiz file (UTF-8)
    input: PathBuf,

    /// Where to write the GIFT output
    #[arg(short, long)]
    output: PathBuf,
}

impl Convert {
    #[instrument]
    pub fn run(self) -> anyhow::Result<()> {
        let text = fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read '{}'", self.input.display()))?;

        let questions = parser::parse(&text)?;
        let markup = gift::emit(&questions);

        fs::write(&self.output, markup)
            .with_context(|| format!("failed to write '{}'", self.output.display()))?;

        println!(
            "{}",
            format!(
                "OK: {} questions -> {}",
                questions.len(),
                self.output.display()
            )
            .success()
        );

        Ok(())
    }
}
