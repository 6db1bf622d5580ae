//! Populates employee tables from whitespace-separated flat text.
//!
//! Each line holds one employee:
//!
//! ```text
//! first last status id phone division years
//! ```
//!
//! Fields are split on runs of spaces and tabs. Lines with more than seven
//! fields are accepted and the extras ignored.

use std::{fs, path::Path};

use tracing::{debug, info};

use crate::{Employee, LoadError, MaritalStatus, Person, Table};

/// Number of fields every record line must carry.
pub const FIELD_COUNT: usize = 7;

/// Ensures every non-blank line has at least [`FIELD_COUNT`] fields.
///
/// `source` names the input in error messages.
pub fn check_fields(text: &str, source: &str) -> Result<(), LoadError> {
    for (idx, line) in text.lines().enumerate() {
        let count = line.split_whitespace().count();
        if count != 0 && count < FIELD_COUNT {
            return Err(LoadError::MissingFields {
                source_name: source.to_owned(),
                line: idx + 1,
            });
        }
    }

    Ok(())
}

fn check_integer(field: &str, line: usize) -> Result<&str, LoadError> {
    field
        .parse::<i64>()
        .map(|_| field)
        .map_err(|_| LoadError::InvalidInteger {
            field: field.to_owned(),
            line,
        })
}

fn check_name(field: &str, line: usize) -> Result<&str, LoadError> {
    if field.chars().all(char::is_alphabetic) {
        Ok(field)
    } else {
        Err(LoadError::InvalidName {
            field: field.to_owned(),
            line,
        })
    }
}

/// Parses one record line, filing the employee under `department`.
///
/// `line` is the 1-based line number used in errors.
pub fn parse_line(text: &str, line: usize, department: &str) -> Result<Employee, LoadError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [first, last, status, id, phone, division, years, ..] = fields.as_slice() else {
        return Err(LoadError::MissingFields {
            source_name: department.to_owned(),
            line,
        });
    };

    let status =
        MaritalStatus::parse(status).map_err(|source| LoadError::Record { line, source })?;
    let person = Person::new(check_name(first, line)?, check_name(last, line)?, status);

    Ok(Employee::new(
        check_integer(id, line)?,
        check_integer(phone, line)?,
        check_integer(division, line)?,
        check_integer(years, line)?,
        person,
        department,
    ))
}

/// Appends every record in `text` to `table`.
///
/// The whole input is validated before anything is inserted, so a bad line
/// leaves the table unchanged. Each employee's department is the table title.
pub fn populate(table: &mut Table<Employee>, text: &str, source: &str) -> Result<usize, LoadError> {
    check_fields(text, source)?;

    let mut parsed = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        parsed.push(parse_line(line, idx + 1, table.title())?);
    }

    let count = parsed.len();
    table.extend(parsed);
    debug!(table = %table.title(), source, count, "populated table");
    Ok(count)
}

/// Reads `path` and appends its records to `table`.
pub fn load_file(table: &mut Table<Employee>, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let text = fs::read_to_string(path).map_err(|source_err| LoadError::Io {
        path: source.clone(),
        source: source_err,
    })?;

    let count = populate(table, &text, &source)?;
    info!(table = %table.title(), path = %source, count, "loaded table");
    Ok(count)
}
