//! `strand wrap` command implementation.

use clap::Args;
use strand_bidi::{Direction, wrap_direction};
use strand_config::CliSettings;

use super::{CommonArgs, read_input, render};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the wrap command.
#[derive(Args)]
pub(crate) struct WrapArgs {
    /// Text to wrap.
    text: String,

    /// Wrap in a right-to-left embedding (default: left-to-right).
    #[arg(long)]
    rtl: bool,

    #[command(flatten)]
    common: CommonArgs,
}

impl WrapArgs {
    /// Execute the wrap command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(CliSettings::default())?;

        let direction = if self.rtl { Direction::Rtl } else { Direction::Ltr };
        let wrapped = wrap_direction(&read_input(&self.text), direction);

        output.result(&render(&config, &wrapped));
        Ok(())
    }
}
