use std::str::FromStr;

use strum::{Display, EnumString};

use crate::RecordError;

/// Marital status of a person.
///
/// Parses the capitalised word, its lowercase form, or the single letter in
/// either case. Always displays as the capitalised word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum MaritalStatus {
    #[strum(to_string = "Married", serialize = "married", serialize = "M", serialize = "m")]
    Married,
    #[strum(to_string = "Widowed", serialize = "widowed", serialize = "W", serialize = "w")]
    Widowed,
    #[strum(to_string = "Divorced", serialize = "divorced", serialize = "D", serialize = "d")]
    Divorced,
    #[strum(to_string = "Single", serialize = "single", serialize = "S", serialize = "s")]
    Single,
}

impl MaritalStatus {
    /// Parses a status, mapping failures to [`RecordError::InvalidStatus`].
    pub fn parse(value: &str) -> Result<Self, RecordError> {
        Self::from_str(value).map_err(|_| RecordError::InvalidStatus(value.to_owned()))
    }
}
