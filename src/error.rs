use std::io;
use thiserror::Error;

pub const EXIT_OK: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_FLAG_PARSE_ERROR: i32 = 10;
/// Reserved for AWS failures; storage errors currently exit with `EXIT_ERROR`.
pub const EXIT_AWS_ERROR: i32 = 11;

#[derive(Error, Debug)]
pub enum KvError {
    #[error("{0}")]
    Flags(#[from] clap::Error),

    #[error("Missing table name")]
    MissingTable,

    #[error("\"{0}\" is not a valid key-value pair")]
    InvalidPair(String),

    #[error("{0}")]
    Storage(String),

    #[error("Malformed item: {0}")]
    MalformedItem(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl KvError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // help and version are delivered as clap "errors" on stdout
            KvError::Flags(e) if !e.use_stderr() => EXIT_OK,
            KvError::Flags(_) | KvError::MissingTable => EXIT_FLAG_PARSE_ERROR,
            _ => EXIT_ERROR,
        }
    }

    /// Print the error to the stream it belongs on.
    pub fn report(&self) {
        match self {
            KvError::Flags(e) => {
                let _ = e.print();
            }
            other => eprintln!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, KvError>;
