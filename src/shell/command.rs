use orbit_params::{FieldParseError, ParameterField};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Set { field: ParameterField, raw: String },
    Submit,
    Status,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("usage: set <field> <value>")]
    SetUsage,
    #[error(transparent)]
    Field(#[from] FieldParseError),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };
    match verb.to_ascii_lowercase().as_str() {
        "show" | "params" => Ok(Command::Show),
        "submit" | "run" => Ok(Command::Submit),
        "status" => Ok(Command::Status),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "set" => match args {
            [field, value @ ..] if !value.is_empty() => Ok(Command::Set {
                field: field.parse()?,
                raw: value.join(" "),
            }),
            _ => Err(CommandError::SetUsage),
        },
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
