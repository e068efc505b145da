//! `strand debug` command implementation.

use clap::Args;
use strand_bidi::{EmbeddingStack, embedded_debug_string};

use super::read_input;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the debug command.
#[derive(Args)]
pub(crate) struct DebugArgs {
    /// Text to inspect.
    text: String,

    /// Fail if any pop mark is unmatched or any embedding is left open.
    #[arg(long)]
    strict: bool,
}

impl DebugArgs {
    /// Execute the debug command.
    ///
    /// Always prints marks as tokens, regardless of output configuration.
    ///
    /// # Errors
    ///
    /// Returns an error with `--strict` when the marks are unbalanced.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let source = read_input(&self.text);

        output.result(&embedded_debug_string(&source));

        let balance = Balance::of(&source);
        for index in &balance.unmatched_pops {
            output.info(&format!("Unmatched pop mark at char {index}"));
        }
        if balance.open > 0 {
            output.info(&format!(
                "{} embedding(s) left open at end of text",
                balance.open
            ));
        }

        if self.strict && !balance.is_balanced() {
            return Err(CliError::Unbalanced {
                unmatched_pops: balance.unmatched_pops.len(),
                open: balance.open,
            });
        }
        Ok(())
    }
}

/// How well the embedding marks in a text pair up.
#[derive(Debug, PartialEq, Eq)]
struct Balance {
    /// Char indices of pop marks with nothing to close.
    unmatched_pops: Vec<usize>,
    /// Embeddings still open at the end.
    open: usize,
}

impl Balance {
    fn of(source: &str) -> Self {
        let mut stack = EmbeddingStack::new();
        let mut unmatched = Vec::new();
        stack.walk_with(source, 0, |offset| unmatched.push(offset));
        Self {
            unmatched_pops: unmatched
                .into_iter()
                .map(|offset| source[..offset].chars().count())
                .collect(),
            open: stack.depth(),
        }
    }

    fn is_balanced(&self) -> bool {
        self.unmatched_pops.is_empty() && self.open == 0
    }
}
