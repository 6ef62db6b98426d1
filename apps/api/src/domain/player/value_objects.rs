use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::{RosterError, RosterResult};

/// Shirt number worn by a player
///
/// # Invariants
/// - Between 0 and 99 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JerseyNumber(u16);

impl JerseyNumber {
    pub const MAX: u16 = 99;

    pub fn new(value: u16) -> RosterResult<Self> {
        if value > Self::MAX {
            return Err(RosterError::validation(format!(
                "number must be between 0 and {}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// Parses a number typed into a form
    ///
    /// # Example
    /// ```
    /// use roster_api::domain::player::JerseyNumber;
    ///
    /// assert_eq!(JerseyNumber::parse(" 10 ").unwrap().value(), 10);
    /// assert!(JerseyNumber::parse("ten").is_err());
    /// ```
    pub fn parse(raw: &str) -> RosterResult<Self> {
        let value = raw
            .trim()
            .parse::<u16>()
            .map_err(|_| RosterError::validation("number must be a whole number"))?;
        Self::new(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for JerseyNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player height in metres
///
/// # Invariants
/// - Strictly positive
/// - No taller than 3 metres
/// - At most centimetre precision (two decimal places)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Height(Decimal);

impl Height {
    pub const MAX_DECIMAL_PLACES: u32 = 2;

    pub fn new(metres: Decimal) -> RosterResult<Self> {
        if metres.normalize().scale() > Self::MAX_DECIMAL_PLACES {
            return Err(RosterError::validation(
                "height must have at most 2 decimal places",
            ));
        }
        if metres <= Decimal::ZERO || metres > Decimal::from(3) {
            return Err(RosterError::validation(
                "height must be greater than 0 and at most 3 metres",
            ));
        }
        Ok(Self(metres))
    }

    /// Parses a height such as `1.85`; a decimal comma is accepted too
    pub fn parse(raw: &str) -> RosterResult<Self> {
        let normalized = raw.trim().replace(',', ".");
        let metres = Decimal::from_str(&normalized)
            .map_err(|_| RosterError::validation("height must be a number in metres"))?;
        Self::new(metres)
    }

    pub fn metres(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
