use hello_lib::export::ExportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown format '{0}'. Use 'text' or 'json'")]
    UnknownFormat(String),

    #[error("Invalid repeat count {0}: must be at least 1")]
    InvalidRepeat(usize),

    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, CliError>;
