//! Line commands understood by the front end.

use hare_core::NodeId;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle(NodeId),
    Finish,
    Undo,
    Redo,
    Recall,
    Show,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("'{0}' needs a node id")]
    MissingNode(String),

    #[error("invalid node id: {0}")]
    InvalidNode(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Command>, ParseCommandError> {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();

        let command = match name.as_str() {
            "toggle" | "shoot" | "t" => {
                let id = words
                    .next()
                    .ok_or_else(|| ParseCommandError::MissingNode(name.clone()))?;
                let id = id
                    .parse::<usize>()
                    .map_err(|_| ParseCommandError::InvalidNode(id.to_string()))?;
                Command::Toggle(NodeId(id))
            }
            "finish" | "f" => Command::Finish,
            "undo" | "u" => Command::Undo,
            "redo" | "r" => Command::Redo,
            "recall" => Command::Recall,
            "show" => Command::Show,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(name)),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}
