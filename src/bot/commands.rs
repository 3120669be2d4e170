//! Chat commands

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Check,
    List,
    Watch,
    Unwatch,
}

impl Command {
    pub const ALL: [Command; 4] = [Command::Check, Command::List, Command::Watch, Command::Unwatch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Check => "/check",
            Command::List => "/list",
            Command::Watch => "/watch",
            Command::Unwatch => "/unwatch",
        }
    }

    /// Matches `/check` as well as Telegram's group form `/check@SomeBot`.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.split('@').next().unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inbound chat message, split into what the dispatcher acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    /// Text starting with `/`: the first word and the remaining words.
    Command { name: String, params: Vec<String> },
    /// Anything else is treated as a ticker symbol.
    Symbol(String),
}

pub fn parse_message(text: &str) -> Incoming {
    let text = text.trim();
    if text.starts_with('/') {
        let mut words = text.split_whitespace().map(str::to_string);
        let name = words.next().unwrap_or_default();
        Incoming::Command {
            name,
            params: words.collect(),
        }
    } else {
        Incoming::Symbol(text.to_string())
    }
}
