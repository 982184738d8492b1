use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::greeting::hello_world;

/// Errors raised while rendering a greeting
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Serializable form of the greeting: `{"message": "Hello, World!"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    #[must_use]
    pub fn new() -> Self {
        Greeting {
            message: hello_world().to_string(),
        }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain text rendering, newline terminated
#[must_use]
pub fn to_text(greeting: &Greeting) -> String {
    format!("{}\n", greeting.message)
}

/// Compact single-line JSON rendering
///
/// # Errors
///
/// Returns `ExportError::Json` if serialization fails.
pub fn to_json(greeting: &Greeting) -> Result<String, ExportError> {
    Ok(serde_json::to_string(greeting)?)
}

/// Render in the requested format. JSON output is newline terminated like text.
///
/// # Errors
///
/// Returns `ExportError::Json` if serialization fails.
pub fn render(greeting: &Greeting, format: OutputFormat) -> Result<String, ExportError> {
    match format {
        OutputFormat::Text => Ok(to_text(greeting)),
        OutputFormat::Json => to_json(greeting).map(|json| json + "\n"),
    }
}

/// Write already rendered output to a file
///
/// # Errors
///
/// Returns `ExportError::Io` if writing to the file fails.
pub fn write_output(contents: &str, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, contents)?;
    Ok(())
}

/// Write the rendering to a file
///
/// # Errors
///
/// Returns an error if serialization or writing to the file fails.
pub fn render_file(
    greeting: &Greeting,
    format: OutputFormat,
    path: &Path,
) -> Result<(), ExportError> {
    write_output(&render(greeting, format)?, path)
}
