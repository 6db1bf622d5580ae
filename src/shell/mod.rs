//! Line-oriented command shell over a [`Database`] of two employee tables.

use std::str::FromStr;

use strum::IntoEnumIterator;
use tracing::debug;

use crate::{Attribute, Database, DatabaseError, Employee, ShellError, Table};

pub mod keyword;

use keyword::Keyword;

pub const HELP: &str = "\
Commands:
  intersect <attribute> <value>       rows of either table matching, common rows relabelled
  difference <table>                  rows of <table> missing from the other table
  union                               distinct rows of both tables
  select <table> <attribute> <value>  rows of <table> matching
  remove <table> <id>                 remove the employee with <id> from <table>
  print                               print both tables
  attributes                          list the attributes that can be queried
  quit                                leave the shell
Tables may be named in full or by their first letter.";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intersect { attribute: String, value: String },
    Difference { table: String },
    Union,
    Select { table: String, attribute: String, value: String },
    Remove { table: String, id: String },
    Print,
    Attributes,
    Help,
    Quit,
}

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// The last argument of `intersect` and `select` takes the rest of the
    /// line, so values may contain spaces.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let mut words = line.split_whitespace();
        let word = words
            .next()
            .ok_or_else(|| ShellError::UnknownCommand(String::new()))?;
        let keyword =
            Keyword::from_str(word).map_err(|_| ShellError::UnknownCommand(word.to_owned()))?;

        let mut arg = |command: &'static str, what: &'static str| {
            words
                .next()
                .map(str::to_owned)
                .ok_or(ShellError::MissingArgument { command, what })
        };

        let command = match keyword {
            Keyword::Quit => Command::Quit,
            Keyword::Intersect => {
                let attribute = arg("intersect", "attribute")?;
                let value = rest(line, 2).ok_or(ShellError::MissingArgument {
                    command: "intersect",
                    what: "value",
                })?;
                Command::Intersect { attribute, value }
            }
            Keyword::Difference => Command::Difference {
                table: arg("difference", "table")?,
            },
            Keyword::Union => Command::Union,
            Keyword::Select => {
                let table = arg("select", "table")?;
                let attribute = arg("select", "attribute")?;
                let value = rest(line, 3).ok_or(ShellError::MissingArgument {
                    command: "select",
                    what: "value",
                })?;
                Command::Select {
                    table,
                    attribute,
                    value,
                }
            }
            Keyword::Remove => Command::Remove {
                table: arg("remove", "table")?,
                id: arg("remove", "id")?,
            },
            Keyword::Print => Command::Print,
            Keyword::Attributes => Command::Attributes,
            Keyword::Help => Command::Help,
        };

        Ok(command)
    }
}

/// Everything after the first `skip` words of `line`, or `None` if empty.
fn rest(line: &str, skip: usize) -> Option<String> {
    let mut remainder = line.trim_start();
    for _ in 0..skip {
        let end = remainder.find(char::is_whitespace)?;
        remainder = remainder[end..].trim_start();
    }

    let remainder = remainder.trim_end();
    (!remainder.is_empty()).then(|| remainder.to_owned())
}

/// The two tables the shell compares, in registration order.
fn pair(db: &Database) -> Result<(&Table<Employee>, &Table<Employee>), ShellError> {
    match db.tables() {
        [one, two, ..] => Ok((one, two)),
        tables => Err(ShellError::TableCount(tables.len())),
    }
}

/// Runs `command` against `db`.
pub fn execute(db: &mut Database, command: Command) -> Result<Outcome, DatabaseError> {
    debug!(?command, "executing");

    let output = match command {
        Command::Quit => return Ok(Outcome::Quit),
        Command::Intersect { attribute, value } => {
            let (one, two) = pair(db)?;
            one.intersect(&attribute, &value, two)?.to_string()
        }
        Command::Difference { table } => {
            let this = db.get_table(&table)?;
            let (one, two) = pair(db)?;
            let other = if this.title() == one.title() { two } else { one };
            this.difference(other).to_string()
        }
        Command::Union => {
            let (one, two) = pair(db)?;
            one.union(two)?.to_string()
        }
        Command::Select {
            table,
            attribute,
            value,
        } => db.get_table(&table)?.select(&attribute, &value).to_string(),
        Command::Remove { table, id } => {
            let table = db.get_table_mut(&table)?;
            match table.remove(&id) {
                Some(removed) => format!("Removed from {}: {removed}", table.title()),
                None => format!("No employee with ID {id} in {}", table.title()),
            }
        }
        Command::Print => db.tables().iter().map(ToString::to_string).collect(),
        Command::Attributes => {
            let names: Vec<String> = Attribute::iter().map(|a| a.to_string()).collect();
            format!("Available attributes: {}.", names.join(", "))
        }
        Command::Help => HELP.to_string(),
    };

    Ok(Outcome::Output(output))
}
