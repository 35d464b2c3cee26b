use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const MISSING_NAME: &str = "Please enter your name.";

/// The visitor's name as entered on the booking form, trimmed
#[derive(Debug, Clone, PartialEq)]
pub struct PersonName(String);

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PersonName {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::Validation(MISSING_NAME));
        }
        Ok(Self(value.to_string()))
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
