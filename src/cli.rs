use clap::{ArgAction, Parser};

pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Parser, Debug)]
#[command(name = "dynkv")]
#[command(version, about = "Read and write key-value pairs in a DynamoDB table")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Delete a key
    #[arg(short, long, value_name = "KEY")]
    pub delete: Option<String>,

    /// The AWS region
    #[arg(short, long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// The Dynamo table
    #[arg(short, long, value_name = "NAME")]
    pub table: Option<String>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Pairs to set; scans the table when none are given
    #[arg(value_name = "KEY=VALUE")]
    pub pairs: Vec<String>,
}
