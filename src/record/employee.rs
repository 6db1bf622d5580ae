use std::{fmt, str::FromStr};

use strum::{Display, EnumIter, EnumString};

use super::{Record, person::Person, status::MaritalStatus};
use crate::RecordError;

/// Attribute names an [`Employee`] answers to.
///
/// Only `id` accepts case variants. Every other name is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Attribute {
    #[strum(to_string = "id", serialize = "ID", serialize = "Id")]
    Id,
    Phone,
    Division,
    Years,
    Department,
    First,
    Last,
    Status,
}

/// One row of an employee table.
///
/// Numeric fields are kept as the text they were loaded from. Equality covers
/// every field except `department`, since the same person can be filed in
/// several departments at once.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: String,
    pub phone: String,
    pub division: String,
    pub years: String,
    pub person: Person,
    pub department: String,
}

impl Employee {
    pub fn new(
        id: &str,
        phone: &str,
        division: &str,
        years: &str,
        person: Person,
        department: &str,
    ) -> Self {
        Self {
            id: id.to_owned(),
            phone: phone.to_owned(),
            division: division.to_owned(),
            years: years.to_owned(),
            person,
            department: department.to_owned(),
        }
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.phone == other.phone
            && self.division == other.division
            && self.years == other.years
            && self.person == other.person
    }
}

impl Eq for Employee {}

impl Record for Employee {
    type Error = RecordError;

    const GROUP_ATTRIBUTE: &'static str = "department";

    fn check(&self, attribute: &str, value: &str) -> bool {
        let Ok(attribute) = Attribute::from_str(attribute) else {
            return false;
        };

        match attribute {
            Attribute::Id => self.id == value,
            Attribute::Phone => self.phone == value,
            Attribute::Division => self.division == value,
            Attribute::Years => self.years == value,
            Attribute::Department => self.department.eq_ignore_ascii_case(value),
            Attribute::First => self.person.first.eq_ignore_ascii_case(value),
            Attribute::Last => self.person.last.eq_ignore_ascii_case(value),
            Attribute::Status => self.person.status.to_string().eq_ignore_ascii_case(value),
        }
    }

    fn change(&mut self, attribute: &str, value: &str) -> Result<bool, RecordError> {
        let Ok(attribute) = Attribute::from_str(attribute) else {
            return Ok(false);
        };

        let value = value.to_owned();
        match attribute {
            Attribute::Id => self.id = value,
            Attribute::Phone => self.phone = value,
            Attribute::Division => self.division = value,
            Attribute::Years => self.years = value,
            Attribute::Department => self.department = value,
            Attribute::First => self.person.first = value,
            Attribute::Last => self.person.last = value,
            Attribute::Status => self.person.status = MaritalStatus::parse(&value)?,
        }

        Ok(true)
    }

    fn copy(&self) -> Self {
        Self {
            id: self.id.clone(),
            phone: self.phone.clone(),
            division: self.division.clone(),
            years: self.years.clone(),
            person: Person::new(&self.person.first, &self.person.last, self.person.status),
            department: self.department.clone(),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee({}): {}\n\tRecord: {} years in division [{}] -- Dept: {}",
            self.id, self.person, self.years, self.division, self.department
        )
    }
}
