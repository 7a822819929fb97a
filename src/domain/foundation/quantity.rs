//! Physical quantity value objects: milk volume and feed weight.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::ValidationError;

/// A non-negative volume of milk, in liters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(Decimal);

impl Liters {
    /// Creates a volume, rejecting negative values.
    ///
    /// # Errors
    ///
    /// - `NegativeMagnitude` if `value < 0`
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::negative_magnitude("liters", value));
        }
        Ok(Self(value))
    }

    /// The zero volume.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the inner decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for Liters {
    type Output = Liters;

    fn add(self, rhs: Liters) -> Liters {
        Liters(self.0 + rhs.0)
    }
}

impl Sum for Liters {
    fn sum<I: Iterator<Item = Liters>>(iter: I) -> Liters {
        iter.fold(Liters::zero(), Add::add)
    }
}

impl fmt::Display for Liters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} L", self.0)
    }
}

/// A non-negative weight of feed, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(Decimal);

impl Kilograms {
    /// Creates a weight, rejecting negative values.
    ///
    /// # Errors
    ///
    /// - `NegativeMagnitude` if `value < 0`
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::negative_magnitude("kilograms", value));
        }
        Ok(Self(value))
    }

    /// The zero weight.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the inner decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for Kilograms {
    type Output = Kilograms;

    fn add(self, rhs: Kilograms) -> Kilograms {
        Kilograms(self.0 + rhs.0)
    }
}

impl Sum for Kilograms {
    fn sum<I: Iterator<Item = Kilograms>>(iter: I) -> Kilograms {
        iter.fold(Kilograms::zero(), Add::add)
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.0)
    }
}
