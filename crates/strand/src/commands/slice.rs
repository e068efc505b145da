//! `strand slice` command implementation.

use clap::Args;
use strand_bidi::Slicer;
use strand_config::CliSettings;

use super::{CommonArgs, read_input, render};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the slice command.
#[derive(Args)]
pub(crate) struct SliceArgs {
    /// Text to slice ([LTR], [RTL] and [POP] tokens are accepted).
    text: String,

    /// Start index in chars.
    start: usize,

    /// End index in chars; negative values count from the end.
    #[arg(allow_negative_numbers = true)]
    end: Option<isize>,

    /// Reject out-of-range arguments (overrides config).
    #[arg(long)]
    strict: bool,

    /// Clamp out-of-range arguments (overrides config).
    #[arg(long, conflicts_with = "strict")]
    lenient: bool,

    #[command(flatten)]
    common: CommonArgs,
}

impl SliceArgs {
    /// Execute the slice command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or a strict slice is rejected.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(CliSettings {
            strict: self.resolve_strict(),
            ..CliSettings::default()
        })?;

        let source = read_input(&self.text);
        let slicer = Slicer::new(config.bidi.strict);
        let slice = slicer.slice(&source, self.start, self.end)?;

        output.result(&render(&config, &slice));
        Ok(())
    }

    fn resolve_strict(&self) -> Option<bool> {
        if self.strict {
            Some(true)
        } else if self.lenient {
            Some(false)
        } else {
            None
        }
    }
}
