use std::fmt;

use super::status::MaritalStatus;

/// Personal information attached to an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first: String,
    pub last: String,
    pub status: MaritalStatus,
}

impl Person {
    pub fn new(first: &str, last: &str, status: MaritalStatus) -> Self {
        Self {
            first: first.to_owned(),
            last: last.to_owned(),
            status,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first, self.last, self.status)
    }
}
