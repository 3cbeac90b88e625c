//! Record Status

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Active/inactive flag stored as a single `Y`/`N` character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

/// Raised when a status flag is anything other than `Y` or `N`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid status flag `{0}`, expected `Y` or `N`")]
pub struct InvalidStatus(pub String);

impl Status {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Active => 'Y',
            Self::Inactive => 'N',
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Y",
            Self::Inactive => "N",
        }
    }
}

impl TryFrom<char> for Status {
    type Error = InvalidStatus;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'Y' => Ok(Self::Active),
            'N' => Ok(Self::Inactive),
            _ => Err(InvalidStatus(value.to_string())),
        }
    }
}

impl FromStr for Status {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();

        match (chars.next(), chars.next()) {
            (Some(flag), None) => Self::try_from(flag),
            _ => Err(InvalidStatus(s.to_string())),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
