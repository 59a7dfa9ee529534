//! Splitting an input line into a command and its arguments.

use std::fmt;

/// A command token typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Change,
    Phone,
    Delete,
    DeletePhone,
    All,
    /// `close` or `exit`
    Exit,
    /// Anything else, lowercased
    Unknown(String),
}

impl Command {
    /// Match a command token, ignoring case.
    pub fn from_token(token: &str) -> Self {
        let token = token.to_lowercase();
        match token.as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "add_birthday" => Self::AddBirthday,
            "show_birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "delete" => Self::Delete,
            "delete_phone" => Self::DeletePhone,
            "all" => Self::All,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token: &str = match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::AddBirthday => "add_birthday",
            Self::ShowBirthday => "show_birthday",
            Self::Birthdays => "birthdays",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::Delete => "delete",
            Self::DeletePhone => "delete_phone",
            Self::All => "all",
            Self::Exit => "exit",
            Self::Unknown(token) => token.as_str(),
        };
        f.write_str(token)
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line on whitespace. Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<Input> {
    let mut parts = line.split_whitespace();
    let command = Command::from_token(parts.next()?);
    let args = parts.map(str::to_string).collect();
    Some(Input { command, args })
}
