//! `strand split` command implementation.

use clap::Args;
use regex::Regex;
use strand_bidi::{Separator, Slicer};
use strand_config::CliSettings;

use super::{CommonArgs, read_input, render};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the split command.
#[derive(Args)]
pub(crate) struct SplitArgs {
    /// Text to split ([LTR], [RTL] and [POP] tokens are accepted).
    text: String,

    /// Literal separator.
    #[arg(short, long)]
    separator: Option<String>,

    /// Regular expression separator.
    #[arg(short, long, conflicts_with = "separator")]
    pattern: Option<String>,

    /// Maximum number of segments to print.
    #[arg(short, long)]
    limit: Option<usize>,

    #[command(flatten)]
    common: CommonArgs,
}

impl SplitArgs {
    /// Execute the split command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the pattern does not compile.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(CliSettings::default())?;

        let separator = match (self.separator, self.pattern) {
            (Some(literal), _) => Some(Separator::Literal(literal)),
            (None, Some(pattern)) => Some(Separator::Pattern(Regex::new(&pattern)?)),
            (None, None) => None,
        };

        let source = read_input(&self.text);
        let segments =
            Slicer::new(config.bidi.strict).split(&source, separator.as_ref(), self.limit);

        output.info(&format!("{} segment(s)", segments.len()));
        for segment in &segments {
            output.result(&render(&config, segment));
        }
        Ok(())
    }
}
