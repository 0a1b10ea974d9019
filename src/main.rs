use clap::Parser;
use dynkv::{cli::Cli, Config, DynamoTable, Engine, Result};
use env_logger::Env;
use log::debug;
use std::io;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        e.report();
        process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::try_parse()?;
    let config = Config::try_from(cli)?;
    debug!(
        "table={} region={} operation={:?}",
        config.table, config.region, config.operation
    );

    let table = DynamoTable::connect(&config.region, config.table.as_str())?;
    let mut engine = Engine::new(table);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    engine.execute(&config.operation, &mut out)
}
