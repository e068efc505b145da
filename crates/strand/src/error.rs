//! CLI error types.

use strand_bidi::BidiError;
use strand_config::ConfigError;
use strand_fill::FillError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Slice(#[from] BidiError),

    #[error("{0}")]
    Fill(#[from] FillError),

    #[error("Invalid separator pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Unbalanced embedding marks: {unmatched_pops} unmatched pops, {open} left open")]
    Unbalanced { unmatched_pops: usize, open: usize },
}
