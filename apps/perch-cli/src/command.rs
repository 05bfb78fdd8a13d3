//! Line commands read from stdin.

use std::str::FromStr;

use thiserror::Error;

pub const HELP: &str = "\
commands:
  refresh | r        fetch the newest page, replacing the list
  more | m           load the page after the last post
  scroll <index>     report the last visible item; loads more near the end
  post <text>        publish a post and refresh
  reopen             tear the view down and restore it from a snapshot
  help | ?           this text
  quit | q           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    More,
    Scroll(usize),
    Post(String),
    Reopen,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("Not a list index: {0}")]
    InvalidIndex(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "refresh" | "r" => Ok(Command::Refresh),
            "more" | "m" => Ok(Command::More),
            "scroll" | "s" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("scroll"));
                }
                rest.parse()
                    .map(Command::Scroll)
                    .map_err(|_| CommandError::InvalidIndex(rest.to_string()))
            }
            "post" | "p" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("post"));
                }
                Ok(Command::Post(rest.to_string()))
            }
            "reopen" => Ok(Command::Reopen),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}
