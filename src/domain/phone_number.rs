use std::str::FromStr;

use crate::error::{Error, Result};

pub const INVALID_PHONE: &str = "Please enter a valid phone number.";

/// Number of digits required for a North American phone number
const MIN_DIGITS: usize = 10;

/// A visitor supplied phone number
///
/// Keeps the text exactly as entered, the intake email shows it that way.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// The phone number exactly as it was typed
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        if digits_of(value).len() < MIN_DIGITS {
            return Err(Error::Validation(INVALID_PHONE));
        }
        Ok(Self(value.to_string()))
    }
}

fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Progressively format whatever digits have been typed so far
///
/// Anything past the tenth digit is dropped.
pub fn format_phone(value: &str) -> String {
    let digits = digits_of(value);
    let (area, rest) = digits.split_at(digits.len().min(3));
    let (prefix, rest) = rest.split_at(rest.len().min(3));
    let line = &rest[..rest.len().min(4)];

    match digits.len() {
        0..=3 => area.to_string(),
        4..=6 => format!("({}) {}", area, prefix),
        _ => format!("({}) {}-{}", area, prefix, line),
    }
}
