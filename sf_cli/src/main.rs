//! Swiss tournament and forum command-line tool.
//!
//! Each invocation connects to PostgreSQL, runs one command and prints the
//! result on stdout.

use std::time::Instant;

use anyhow::{Context, Error};
use pico_args::Arguments;
use sf_cli::{
    app::{App, error_message},
    commands::parse_command,
    config::CliConfig,
    logging,
    render::render,
};
use swiss_forum::db::{Database, redact_url};
use tracing::{error, info};

const HELP: &str = "\
Manage a Swiss-system tournament and a small forum

USAGE:
  sf_cli [OPTIONS] <COMMAND>

COMMANDS:
  migrate                  Apply the database schema
  register <NAME>          Register a player
  count                    Print the number of registered players
  report <WINNER> <LOSER>  Record a match result by player id
  standings                Print standings, best record first
  pairings                 Print pairings for the next round
  clear-matches            Delete all match results
  clear-players            Delete all players and their matches
  post <CONTENT>           Add a forum post
  posts                    List forum posts, newest first

OPTIONS:
  --db-url     URL         Database connection string  [default: env DATABASE_URL or postgres://postgres@localhost/tournament]

FLAGS:
  --json                   Print results as JSON
  -h, --help               Print help information

ENVIRONMENT:
  DATABASE_URL             PostgreSQL connection string
  DB_MAX_CONNECTIONS       Pool size
  DB_CONNECTION_TIMEOUT    Connect timeout in seconds
  RUST_LOG                 Log filter (logs are written to stderr)
  (A .env file in the working directory is loaded if present)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let db_url: Option<String> = pargs.opt_value_from_str("--db-url")?;
    let json = pargs.contains("--json");

    let free = pargs
        .finish()
        .into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow::anyhow!("Argument is not valid UTF-8: {arg:?}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let command = parse_command(&free)?;

    let config = CliConfig::from_env(db_url, json)?;
    config.validate()?;

    logging::init();

    let url = redact_url(&config.database.database_url);
    info!("Connecting to database: {url}");
    let db = Database::new(&config.database)
        .await
        .with_context(|| format!("Failed to connect to database at {url}"))?;

    let app = App::new(db);
    let name = command.name();
    let start = Instant::now();
    let result = app.execute(command).await;
    logging::log_command(name, start.elapsed().as_millis() as u64);
    app.close().await;

    let output = match result {
        Ok(output) => output,
        Err(err) => {
            error!("Command {name} failed: {err:#}");
            eprintln!("Error: {}", error_message(&err));
            std::process::exit(1);
        }
    };
    println!("{}", render(&output, config.json)?);

    Ok(())
}
