//! Shell commands
//!
//! Turns a line of user input into a [`Command`].

use super::lexer::split_words;
use crate::error::{Error, Result};

pub const CREATE_TABLE_USAGE: &str = "create_table <table_name> <column1:type> [column2:type ...]";
pub const DROP_TABLE_USAGE: &str = "drop_table <table_name>";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_table <name> <col:type> ...`
    CreateTable {
        name: String,
        columns: Vec<(String, String)>,
    },
    /// `list_tables`
    ListTables,
    /// `drop_table <name>`
    DropTable { name: String },
    /// `help`
    Help,
    /// `exit`
    Exit,
}

/// Parse one line of input
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let words = split_words(line.trim())?;
    let Some((head, args)) = words.split_first() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "exit" => Command::Exit,
        "help" => Command::Help,
        "list_tables" => Command::ListTables,
        "create_table" => {
            let [name, specs @ ..] = args else {
                return Err(Error::Usage(CREATE_TABLE_USAGE));
            };
            if specs.is_empty() {
                return Err(Error::Usage(CREATE_TABLE_USAGE));
            }
            let columns = specs
                .iter()
                .map(|spec| parse_column_spec(spec))
                .collect::<Result<Vec<_>>>()?;
            Command::CreateTable {
                name: name.clone(),
                columns,
            }
        }
        "drop_table" => match args.first() {
            Some(name) => Command::DropTable { name: name.clone() },
            None => return Err(Error::Usage(DROP_TABLE_USAGE)),
        },
        other => return Err(Error::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

/// Split `name:type` at the first colon; the type is lowercased
fn parse_column_spec(spec: &str) -> Result<(String, String)> {
    match spec.split_once(':') {
        Some((name, column_type)) => Ok((
            name.trim().to_string(),
            column_type.trim().to_lowercase(),
        )),
        None => Err(Error::InvalidColumnSpec(spec.to_string())),
    }
}
