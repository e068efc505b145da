//! CLI command implementations.

pub(crate) mod debug;
pub(crate) mod fill;
pub(crate) mod slice;
pub(crate) mod split;
pub(crate) mod wrap;

use std::path::PathBuf;

use clap::Args;
use strand_bidi::{embedded_debug_string, parse_debug_string};
use strand_config::{CliSettings, Config};

pub(crate) use debug::DebugArgs;
pub(crate) use fill::FillArgs;
pub(crate) use slice::SliceArgs;
pub(crate) use split::SplitArgs;
pub(crate) use wrap::WrapArgs;

use crate::error::CliError;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover strand.toml).
    #[arg(short, long, env = "STRAND_CONFIG")]
    config: Option<PathBuf>,

    /// Print embedding marks as raw characters instead of [LTR]/[RTL]/[POP].
    #[arg(long)]
    raw: bool,
}

impl CommonArgs {
    /// Load the configuration, layering `settings` and the `--raw` flag on top.
    pub(crate) fn load_config(&self, mut settings: CliSettings) -> Result<Config, CliError> {
        if self.raw {
            settings.debug_marks = Some(false);
        }
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        match &config.config_path {
            Some(path) => tracing::debug!(path = %path.display(), "Loaded configuration"),
            None => tracing::debug!("No configuration file found, using defaults"),
        }
        Ok(config)
    }
}

/// Turn `[LTR]`, `[RTL]` and `[POP]` tokens typed on the command line into marks.
pub(crate) fn read_input(text: &str) -> String {
    parse_debug_string(text)
}

/// Format text for display according to the output configuration.
pub(crate) fn render(config: &Config, text: &str) -> String {
    if config.output.debug_marks {
        embedded_debug_string(text)
    } else {
        text.to_owned()
    }
}
