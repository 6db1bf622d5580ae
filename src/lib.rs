//! In-memory relational tables over linked storage.
//!
//! A [`Table`] holds records of one [`Record`] variant and answers set-style
//! queries (`select`, `union`, `intersect`, `difference`), each producing a new
//! table. [`Employee`] is the bundled record variant, [`db::loader`] fills
//! employee tables from flat text, and [`shell`] drives them interactively.

pub(crate) mod common;
pub mod db;
pub mod record;
pub mod shell;

pub use common::error::{DatabaseError, LoadError, RecordError, ShellError};
pub use db::{database::Database, table::Table};
pub use record::{
    Record,
    employee::{Attribute, Employee},
    person::Person,
    status::MaritalStatus,
};
