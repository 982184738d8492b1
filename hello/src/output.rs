use hello_lib::export::{render, Greeting, OutputFormat};

use crate::error::{CliError, Result};

/// Resolve a user-supplied format name
///
/// # Errors
///
/// Returns `CliError::UnknownFormat` for names other than text/txt/plain/json.
pub fn parse_format(name: &str) -> Result<OutputFormat> {
    OutputFormat::from_name(name).ok_or_else(|| CliError::UnknownFormat(name.to_string()))
}

/// Render the greeting `repeat` times, one rendering per line
///
/// # Errors
///
/// Returns `CliError::InvalidRepeat` when `repeat` is zero, or an export error.
pub fn build_output(format: OutputFormat, repeat: usize) -> Result<String> {
    if repeat == 0 {
        return Err(CliError::InvalidRepeat(repeat));
    }

    let rendered = render(&Greeting::new(), format)?;
    tracing::debug!(format = format.as_str(), repeat, "rendered greeting");
    Ok(rendered.repeat(repeat))
}
