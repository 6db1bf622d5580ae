use strum::EnumString;

/// Command words recognised by the shell.
///
/// Keywords are case-insensitive. The digits of the classic numbered menu are
/// accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Keyword {
    #[strum(serialize = "quit", serialize = "exit", serialize = "0")]
    Quit,
    #[strum(serialize = "intersect", serialize = "1")]
    Intersect,
    #[strum(serialize = "difference", serialize = "2")]
    Difference,
    #[strum(serialize = "union", serialize = "3")]
    Union,
    #[strum(serialize = "select", serialize = "4")]
    Select,
    #[strum(serialize = "remove", serialize = "5")]
    Remove,
    #[strum(serialize = "print", serialize = "6")]
    Print,
    Attributes,
    Help,
}
