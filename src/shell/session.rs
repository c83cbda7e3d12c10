//! Shell session
//!
//! Handles one line at a time: load the catalog, run the command, persist
//! the result and render what the user should see. Nothing here writes to
//! the terminal; the REPL prints the returned [`Response`].

use super::command::{parse_command, Command};
use super::config::ShellConfig;
use crate::catalog::{self, Catalog, Outcome};
use crate::error::{Error, Result};
use crate::storage::CatalogStore;
use tracing::debug;

/// Lines to show the user, and whether the loop should stop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<String>,
    pub exit: bool,
}

impl Response {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, exit: false }
    }
}

/// Help text shown at start-up and for `help`
pub fn help_lines() -> Vec<String> {
    [
        "",
        "***Table catalog***",
        "Functions:",
        "<command> create_table <table_name> <column1:type> .. - create a table",
        "<command> list_tables - list all tables",
        "<command> drop_table <table_name> - drop a table",
        "",
        "General commands:",
        "<command> exit - leave the program",
        "<command> help - show this help",
        "",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

/// An interactive session over one catalog store
#[derive(Debug, Clone)]
pub struct Session {
    store: CatalogStore,
}

impl Session {
    /// Create a session from a shell config
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            store: CatalogStore::new(config.store_path.clone()),
        }
    }

    /// The store this session reads and writes
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Handle one line of input
    ///
    /// Errors never escape: they are rendered into the response.
    pub fn handle_line(&self, line: &str) -> Response {
        match self.execute(line) {
            Ok(response) => response,
            Err(err) => Response::lines(render_error(&err)),
        }
    }

    fn execute(&self, line: &str) -> Result<Response> {
        let Some(command) = parse_command(line)? else {
            return Ok(Response::default());
        };
        debug!(?command, "executing command");

        match command {
            Command::Exit => Ok(Response {
                lines: vec!["Exiting...".to_string()],
                exit: true,
            }),
            Command::Help => Ok(Response::lines(help_lines())),
            Command::ListTables => {
                let mut lines = Vec::new();
                let catalog = self.load(&mut lines)?;
                match catalog::list_tables(&catalog) {
                    None => lines.push("No tables found".to_string()),
                    Some(rows) => {
                        lines.push(String::new());
                        lines.push("Tables:".to_string());
                        lines.extend(rows.iter().map(|row| format!("  {}", row)));
                    }
                }
                Ok(Response::lines(lines))
            }
            Command::CreateTable { name, columns } => {
                self.mutate(|catalog| catalog::create_table(catalog, &name, &columns))
            }
            Command::DropTable { name } => self.mutate(|catalog| catalog::drop_table(catalog, &name)),
        }
    }

    /// Load the catalog, reporting a malformed document into `lines`
    fn load(&self, lines: &mut Vec<String>) -> Result<Catalog> {
        let loaded = self.store.load()?;
        if let Some(diagnostic) = loaded.diagnostic {
            lines.push(format!("Error: {}", diagnostic));
        }
        Ok(loaded.catalog)
    }

    /// Load, apply `op`, persist if it changed anything, render
    fn mutate<F>(&self, op: F) -> Result<Response>
    where
        F: FnOnce(Catalog) -> (Catalog, Outcome),
    {
        let mut lines = Vec::new();
        let catalog = self.load(&mut lines)?;
        let (catalog, outcome) = op(catalog);

        match outcome {
            Ok(change) => {
                lines.extend(change.to_string().lines().map(String::from));
                // A failed write is reported; the session carries on
                if let Err(err) = self.store.save(&catalog) {
                    lines.extend(render_error(&err));
                }
            }
            Err(err) => lines.extend(render_error(&err)),
        }

        Ok(Response::lines(lines))
    }
}

fn render_error(err: &Error) -> Vec<String> {
    match err {
        Error::UnknownCommand(_) => vec![err.to_string(), "Type 'help' for help".to_string()],
        Error::Io(_) | Error::StorageSerialize(_) => vec![format!("An error occurred: {}", err)],
        _ => vec![format!("Error: {}", err)],
    }
}
