use phantom_types::ConstraintError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    BadLine {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid constraint: {0}")]
    Constraint(#[from] ConstraintError),

    #[error("could not set up logging: {0}")]
    Logger(String),
}
