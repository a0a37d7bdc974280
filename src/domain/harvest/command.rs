//! Operator commands

use std::fmt;
use std::str::FromStr;

use crate::domain::error::UnknownCommandError;

/// All operator commands, in help order
pub const ALL_COMMANDS: &[OperatorCommand] = &[
    OperatorCommand::OpenNext,
    OperatorCommand::Export,
    OperatorCommand::Status,
    OperatorCommand::List,
    OperatorCommand::Help,
    OperatorCommand::Quit,
];

/// Commands the operator types while harvesting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCommand {
    /// Open the item under the cursor in the browser
    OpenNext,
    /// Print the captured list for hand-off
    Export,
    /// Print counters
    Status,
    /// Print every collected item
    List,
    /// Print the command list
    Help,
    /// Stop harvesting
    Quit,
}

impl OperatorCommand {
    /// Get the canonical command word
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenNext => "next",
            Self::Export => "export",
            Self::Status => "status",
            Self::List => "list",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    /// Get the one-line description shown in help
    pub const fn description(&self) -> &'static str {
        match self {
            Self::OpenNext => "open the next item in the browser (also: n, empty line)",
            Self::Export => "print the captured list (also: e)",
            Self::Status => "show counters (also: s)",
            Self::List => "list collected items (also: l)",
            Self::Help => "show this help (also: h, ?)",
            Self::Quit => "stop harvesting (also: q)",
        }
    }
}

impl FromStr for OperatorCommand {
    type Err = UnknownCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "n" | "next" => Ok(Self::OpenNext),
            "e" | "export" => Ok(Self::Export),
            "s" | "status" => Ok(Self::Status),
            "l" | "list" => Ok(Self::List),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Err(UnknownCommandError {
                input: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for OperatorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
