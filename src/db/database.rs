use std::path::Path;

use tracing::debug;

use crate::{DatabaseError, Employee, Table, db::loader};

/// A set of named employee tables, kept in the order they were added.
#[derive(Debug, Default)]
pub struct Database {
    tables: Vec<Table<Employee>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `table` under its title.
    ///
    /// A table with the same title is replaced in place.
    pub fn add_table(&mut self, table: Table<Employee>) {
        match self.tables.iter().position(|t| t.title() == table.title()) {
            Some(idx) => {
                debug!(table = %table.title(), "replacing table");
                self.tables[idx] = table;
            }
            None => {
                debug!(table = %table.title(), "adding table");
                self.tables.push(table);
            }
        }
    }

    /// Creates a table titled `name` and fills it from the file at `path`.
    pub fn load_table(&mut self, name: &str, path: impl AsRef<Path>) -> Result<usize, DatabaseError> {
        let mut table = Table::new(name);
        let count = loader::load_file(&mut table, path)?;
        self.add_table(table);
        Ok(count)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.tables
            .iter()
            .position(|t| t.title().eq_ignore_ascii_case(name))
            .or_else(|| {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => self.tables.iter().position(|t| {
                        t.title()
                            .chars()
                            .next()
                            .is_some_and(|c| c.eq_ignore_ascii_case(&letter))
                    }),
                    _ => None,
                }
            })
    }

    /// Looks a table up by title, ignoring case, or by the first letter of
    /// its title.
    pub fn get_table(&self, name: &str) -> Result<&Table<Employee>, DatabaseError> {
        self.position(name)
            .map(|idx| &self.tables[idx])
            .ok_or_else(|| DatabaseError::TableNotFound(name.to_string()))
    }

    pub fn get_table_mut(&mut self, name: &str) -> Result<&mut Table<Employee>, DatabaseError> {
        match self.position(name) {
            Some(idx) => Ok(&mut self.tables[idx]),
            None => Err(DatabaseError::TableNotFound(name.to_string())),
        }
    }

    /// Tables in insertion order.
    pub fn tables(&self) -> &[Table<Employee>] {
        &self.tables
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.title()).collect()
    }
}
