use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by a record while its fields are being changed or built.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RecordError {
    #[error("Invalid marital status '{0}', must be Married, Widowed, Divorced, or Single")]
    #[diagnostic(code(chain_db::record::invalid_status))]
    InvalidStatus(String),
}

/// Errors raised while populating a table from flat text.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Cannot read file '{path}'")]
    #[diagnostic(code(chain_db::load::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("There are missing fields in '{source_name}' on line number: {line}")]
    #[diagnostic(
        code(chain_db::load::missing_fields),
        help("Each line needs: first last status id phone division years")
    )]
    MissingFields { source_name: String, line: usize },

    #[error("Invalid field '{field}' on line {line}, expected an integer")]
    #[diagnostic(code(chain_db::load::invalid_integer))]
    InvalidInteger { field: String, line: usize },

    #[error(
        "Field argument '{field}' on line {line} should not contain numerical digits or non-letter characters"
    )]
    #[diagnostic(code(chain_db::load::invalid_name))]
    InvalidName { field: String, line: usize },

    #[error("Invalid record on line {line}")]
    #[diagnostic(code(chain_db::load::invalid_record))]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Errors raised while parsing a shell command line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ShellError {
    #[error("Option '{0}' does not exist")]
    #[diagnostic(code(chain_db::shell::unknown_command), help("Type 'help' for a list of commands"))]
    UnknownCommand(String),

    #[error("Missing {what} for '{command}'")]
    #[diagnostic(code(chain_db::shell::missing_argument))]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("Shell needs two tables, found {0}")]
    #[diagnostic(code(chain_db::shell::table_count))]
    TableCount(usize),
}

/// Top level error for the database and its shell.
#[derive(Debug, Error, Diagnostic)]
pub enum DatabaseError {
    #[error("Table not found: {0}")]
    #[diagnostic(code(chain_db::table_not_found))]
    TableNotFound(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Shell(#[from] ShellError),
}
