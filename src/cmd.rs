use crate::cli::Cli;
use crate::error::KvError;

/// The one operation a single invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Delete { key: String },
    Scan,
    // raw tokens; each is parsed right before its write
    Set { pairs: Vec<String> },
}

/// Settings for one run, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table: String,
    pub region: String,
    pub operation: Operation,
}

impl TryFrom<Cli> for Config {
    type Error = KvError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let table = cli
            .table
            .filter(|t| !t.is_empty())
            .ok_or(KvError::MissingTable)?;

        let operation = match cli.delete.filter(|k| !k.is_empty()) {
            Some(key) => Operation::Delete { key },
            None if cli.pairs.is_empty() => Operation::Scan,
            None => Operation::Set { pairs: cli.pairs },
        };

        Ok(Config {
            table,
            region: cli.region,
            operation,
        })
    }
}
