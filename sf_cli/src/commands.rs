//! Command-line command parsing.

use swiss_forum::tournament::PlayerId;
use thiserror::Error;

/// A single CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply the bundled schema
    Migrate,
    /// Register a player by name
    Register(String),
    /// Print the number of registered players
    Count,
    /// Record that `winner` beat `loser`
    Report { winner: PlayerId, loser: PlayerId },
    /// Print current standings
    Standings,
    /// Print next-round pairings
    Pairings,
    /// Remove all matches
    ClearMatches,
    /// Remove all players (and their matches)
    ClearPlayers,
    /// Add a forum post
    Post(String),
    /// List forum posts, newest first
    Posts,
}

impl Command {
    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Migrate => "migrate",
            Command::Register(_) => "register",
            Command::Count => "count",
            Command::Report { .. } => "report",
            Command::Standings => "standings",
            Command::Pairings => "pairings",
            Command::ClearMatches => "clear-matches",
            Command::ClearPlayers => "clear-players",
            Command::Post(_) => "post",
            Command::Posts => "posts",
        }
    }
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No command given
    #[error("No command given. Run with --help to see available commands")]
    MissingCommand,

    /// A command is missing one of its arguments
    #[error("'{command}' requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// A player id is not a number
    #[error("Invalid player id '{0}'. Must be a whole number")]
    InvalidPlayerId(String),

    /// Arguments left over after the command
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),

    /// Unrecognized command
    #[error("Unrecognized command '{0}'. Run with --help to see available commands")]
    UnrecognizedCommand(String),
}

/// Parse the free arguments left after option parsing into a [`Command`].
///
/// Names and post content may be given as several words; they are joined
/// with single spaces.
///
/// # Examples
///
/// ```
/// use sf_cli::commands::{parse_command, Command};
///
/// let args: Vec<String> = ["report", "1", "2"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(parse_command(&args), Ok(Command::Report { winner: 1, loser: 2 }));
/// ```
pub fn parse_command(args: &[String]) -> Result<Command, ParseError> {
    let Some((name, rest)) = args.split_first() else {
        return Err(ParseError::MissingCommand);
    };

    let command = match name.as_str() {
        "migrate" => Command::Migrate,
        "count" => Command::Count,
        "standings" => Command::Standings,
        "pairings" => Command::Pairings,
        "clear-matches" => Command::ClearMatches,
        "clear-players" => Command::ClearPlayers,
        "posts" => Command::Posts,
        "register" => return parse_text(rest, "register", "a player name").map(Command::Register),
        "post" => return parse_text(rest, "post", "post content").map(Command::Post),
        "report" => return parse_report(rest),
        other => return Err(ParseError::UnrecognizedCommand(other.to_string())),
    };

    match rest.first() {
        Some(extra) => Err(ParseError::UnexpectedArgument(extra.clone())),
        None => Ok(command),
    }
}

fn parse_text(
    rest: &[String],
    command: &'static str,
    argument: &'static str,
) -> Result<String, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument { command, argument });
    }
    Ok(rest.join(" "))
}

/// Parse "report WINNER LOSER"
fn parse_report(rest: &[String]) -> Result<Command, ParseError> {
    let parse_id = |value: &String| {
        value
            .parse::<PlayerId>()
            .map_err(|_| ParseError::InvalidPlayerId(value.clone()))
    };

    match rest {
        [winner, loser] => Ok(Command::Report {
            winner: parse_id(winner)?,
            loser: parse_id(loser)?,
        }),
        [_, _, extra, ..] => Err(ParseError::UnexpectedArgument(extra.clone())),
        _ => Err(ParseError::MissingArgument {
            command: "report",
            argument: "a winner id and a loser id",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> Vec<String> {
        input.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command(&args("count")), Ok(Command::Count));
        assert_eq!(parse_command(&args("standings")), Ok(Command::Standings));
        assert_eq!(parse_command(&args("pairings")), Ok(Command::Pairings));
        assert_eq!(parse_command(&args("clear-matches")), Ok(Command::ClearMatches));
        assert_eq!(parse_command(&args("clear-players")), Ok(Command::ClearPlayers));
        assert_eq!(parse_command(&args("posts")), Ok(Command::Posts));
        assert_eq!(parse_command(&args("migrate")), Ok(Command::Migrate));
    }

    #[test]
    fn test_parse_register_joins_words() {
        assert_eq!(
            parse_command(&args("register Chandra Nalaar")),
            Ok(Command::Register("Chandra Nalaar".to_string()))
        );
    }

    #[test]
    fn test_parse_register_without_name() {
        assert!(matches!(
            parse_command(&args("register")),
            Err(ParseError::MissingArgument { command: "register", .. })
        ));
    }

    #[test]
    fn test_parse_report() {
        assert_eq!(
            parse_command(&args("report 3 7")),
            Ok(Command::Report { winner: 3, loser: 7 })
        );
    }

    #[test]
    fn test_parse_report_invalid_id() {
        assert_eq!(
            parse_command(&args("report three 7")),
            Err(ParseError::InvalidPlayerId("three".to_string()))
        );
    }

    #[test]
    fn test_parse_report_arity() {
        assert!(matches!(
            parse_command(&args("report 3")),
            Err(ParseError::MissingArgument { command: "report", .. })
        ));
        assert_eq!(
            parse_command(&args("report 3 7 9")),
            Err(ParseError::UnexpectedArgument("9".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_trailing_arguments() {
        assert_eq!(
            parse_command(&args("count players")),
            Err(ParseError::UnexpectedArgument("players".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_and_missing() {
        assert_eq!(parse_command(&[]), Err(ParseError::MissingCommand));
        assert_eq!(
            parse_command(&args("shuffle")),
            Err(ParseError::UnrecognizedCommand("shuffle".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::InvalidPlayerId("x".to_string());
        assert!(err.to_string().contains("'x'"));
    }
}
