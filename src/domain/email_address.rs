use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const MISSING_EMAIL: &str = "Please enter a valid email.";

/// A visitor supplied email-address
///
/// Only presence is checked here. The form's `type="email"` input does the
/// format check in the browser and the intake service checks it again.
#[derive(Debug, PartialEq, Clone)]
pub struct EmailAddress(String);

impl FromStr for EmailAddress {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::Validation(MISSING_EMAIL));
        }
        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
