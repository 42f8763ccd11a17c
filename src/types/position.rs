// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Position types for curtain travel.
//!
//! Two scales are in use: the vendor API speaks in fractions ([`Position`])
//! and the host entity interface speaks in percentages ([`CoverPosition`]).
//! Both use the same orientation: 0 is fully open, the maximum is fully
//! closed. Converting between them never inverts the scale.

use std::fmt;

use crate::error::ValueError;

/// Curtain position as a fraction of full travel (0.0-1.0).
///
/// 0.0 means fully open, 1.0 means fully closed.
///
/// # Examples
///
/// ```
/// use slide_cover::types::Position;
///
/// let pos = Position::new(0.3).unwrap();
/// assert_eq!(pos.to_percent().value(), 30);
///
/// assert!(Position::new(1.5).is_err());
/// assert_eq!(Position::clamped(1.5), Position::CLOSED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Position(f64);

impl Position {
    /// Fully open.
    pub const OPEN: Self = Self(0.0);

    /// Fully closed.
    pub const CLOSED: Self = Self(1.0);

    /// Creates a new position.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::FractionOutOfRange` if the fraction is outside
    /// [0.0, 1.0] or is NaN.
    pub fn new(fraction: f64) -> Result<Self, ValueError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ValueError::FractionOutOfRange(fraction));
        }
        Ok(Self(fraction))
    }

    /// Creates a position, clamping to the valid range.
    ///
    /// NaN is treated as fully open.
    #[must_use]
    pub fn clamped(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::OPEN;
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Returns the fraction value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Converts to a percentage, rounding to the nearest whole percent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_percent(&self) -> CoverPosition {
        // Safe: self.0 is within [0.0, 1.0], so the rounded value fits 0-100
        CoverPosition((self.0 * 100.0).round() as u8)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Position {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CoverPosition> for Position {
    fn from(percent: CoverPosition) -> Self {
        Self(f64::from(percent.0) / 100.0)
    }
}

/// Cover position as a percentage (0-100) at the host interface.
///
/// 0 means fully open, 100 means fully closed.
///
/// # Examples
///
/// ```
/// use slide_cover::types::{CoverPosition, Position};
///
/// let target = CoverPosition::new(70).unwrap();
/// assert_eq!(Position::from(target).value(), 0.7);
///
/// assert!(CoverPosition::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoverPosition(u8);

impl CoverPosition {
    /// Fully open (0%).
    pub const OPEN: Self = Self(0);

    /// Fully closed (100%).
    pub const CLOSED: Self = Self(100);

    /// Creates a new cover position.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::PercentOutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::PercentOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for CoverPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for CoverPosition {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_bounds() {
        assert!(Position::new(0.0).is_ok());
        assert!(Position::new(1.0).is_ok());
        assert!(Position::new(-0.01).is_err());
        assert!(Position::new(1.01).is_err());
        assert!(Position::new(f64::NAN).is_err());
    }

    #[test]
    fn position_clamped() {
        assert_eq!(Position::clamped(-0.2), Position::OPEN);
        assert_eq!(Position::clamped(1.02), Position::CLOSED);
        assert_eq!(Position::clamped(f64::NAN), Position::OPEN);
        assert!((Position::clamped(0.42).value() - 0.42).abs() < f64::EPSILON);
    }

    #[test]
    fn to_percent_rounds_to_nearest() {
        for (fraction, expected) in [
            (0.0, 0),
            (0.3, 30),
            (0.294, 29),
            (0.296, 30),
            (0.999, 100),
            (1.0, 100),
        ] {
            let pos = Position::new(fraction).unwrap();
            assert_eq!(pos.to_percent().value(), expected, "fraction {fraction}");
        }
    }

    #[test]
    fn percent_to_fraction_keeps_orientation() {
        assert_eq!(Position::from(CoverPosition::OPEN), Position::OPEN);
        assert_eq!(Position::from(CoverPosition::CLOSED), Position::CLOSED);
        let ten = Position::from(CoverPosition::new(10).unwrap());
        assert!((ten.value() - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn cover_position_invalid() {
        assert_eq!(
            CoverPosition::new(101),
            Err(ValueError::PercentOutOfRange(101))
        );
        assert_eq!(
            CoverPosition::try_from(200),
            Err(ValueError::PercentOutOfRange(200))
        );
    }

    #[test]
    fn display() {
        assert_eq!(CoverPosition::new(75).unwrap().to_string(), "75%");
        assert_eq!(Position::new(0.7).unwrap().to_string(), "0.70");
    }
}
