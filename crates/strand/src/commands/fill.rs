//! `strand fill` command implementation.

use clap::Args;
use strand_config::{CliSettings, validate_placeholder_key};
use strand_fill::{FillValues, StringSource, capitalize, fill_in, fill_in_strict};

use super::{CommonArgs, read_input, render};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the fill command.
#[derive(Args)]
pub(crate) struct FillArgs {
    /// Template containing `{{key}}` placeholders.
    template: String,

    /// Placeholder value as KEY=VALUE (overrides config, repeatable).
    #[arg(short = 's', long = "set", value_parser = parse_value)]
    values: Vec<(String, String)>,

    /// Fail when a placeholder has no value (overrides config).
    #[arg(long)]
    strict: bool,

    /// Uppercase the first character of the result.
    #[arg(long)]
    capitalize: bool,

    #[command(flatten)]
    common: CommonArgs,
}

impl FillArgs {
    /// Execute the fill command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or, when strict, a placeholder
    /// has no value.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(CliSettings {
            fill_strict: self.strict.then_some(true),
            values: self.values,
            ..CliSettings::default()
        })?;

        let values: FillValues = config
            .fill
            .values
            .iter()
            .map(|(key, value)| (key.clone(), StringSource::from(value.as_str())))
            .collect();
        let template = StringSource::from(read_input(&self.template));

        let mut filled = if config.fill.strict {
            fill_in_strict(&template, &values)?
        } else {
            fill_in(&template, &values)
        };
        if self.capitalize {
            filled = capitalize(&filled);
        }

        output.result(&render(&config, &filled));
        Ok(())
    }
}

/// Parse a `KEY=VALUE` pair.
fn parse_value(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {arg:?}"))?;
    validate_placeholder_key(key).map_err(|e| e.to_string())?;
    Ok((key.to_owned(), value.to_owned()))
}
