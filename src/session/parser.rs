//! Turns an input line into a command and its arguments.

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Save,
    Exit,
    Unknown,
}

impl Command {
    /// Match a lowercased keyword. Anything unrecognised is `Unknown`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "remove-phone" => Self::RemovePhone,
            "delete" => Self::Delete,
            "save" => Self::Save,
            "exit" | "close" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

/// Split a line on whitespace into a command and its arguments.
///
/// The keyword is case-insensitive; arguments keep their case. A blank line
/// parses as `Unknown` with no arguments.
pub fn parse_input(line: &str) -> (Command, Vec<&str>) {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(keyword) => (
            Command::from_keyword(&keyword.to_lowercase()),
            parts.collect(),
        ),
        None => (Command::Unknown, Vec::new()),
    }
}
