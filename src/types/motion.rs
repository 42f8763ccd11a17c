// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Motion and entity state types.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Last known motion state of a slide.
///
/// `Unknown` is only ever held by a slide that has not reported its state
/// yet. Once a state has been observed it is never reset to `Unknown`.
///
/// # Examples
///
/// ```
/// use slide_cover::types::MotionState;
///
/// let state: MotionState = "closing".parse().unwrap();
/// assert_eq!(state, MotionState::Closing);
/// assert_eq!(state.as_str(), "closing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    /// Curtain is open.
    Open,
    /// Curtain is closed.
    Closed,
    /// Curtain is travelling towards open.
    Opening,
    /// Curtain is travelling towards closed.
    Closing,
    /// No state has been observed yet.
    #[default]
    Unknown,
}

impl MotionState {
    /// Returns the vendor string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Closing => "closing",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` unless the state is `Unknown`.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotionState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "opening" => Ok(Self::Opening),
            "closing" => Ok(Self::Closing),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseError::InvalidValue {
                field: "state".to_string(),
                message: format!("unknown motion state: {s}"),
            }),
        }
    }
}

/// State of a cover entity as seen by the host.
///
/// Derived from the entity queries, see
/// [`CoverEntity::state`](crate::cover::CoverEntity::state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverState {
    /// Cover is open (or stopped somewhere short of closed).
    Open,
    /// Cover is closed.
    Closed,
    /// Cover is opening.
    Opening,
    /// Cover is closing.
    Closing,
    /// State is not known.
    Unknown,
}

impl CoverState {
    /// Returns the host state string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Closing => "closing",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical tag a host uses to pick icons and wording for a cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// A curtain that slides along a rail.
    Curtain,
}

impl DeviceClass {
    /// Returns the host device class string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Curtain => "curtain",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_state_default_is_unknown() {
        assert_eq!(MotionState::default(), MotionState::Unknown);
        assert!(!MotionState::default().is_known());
    }

    #[test]
    fn motion_state_parse_is_case_insensitive() {
        assert_eq!("OPEN".parse::<MotionState>().unwrap(), MotionState::Open);
        assert_eq!("Closed".parse::<MotionState>().unwrap(), MotionState::Closed);
    }

    #[test]
    fn motion_state_parse_rejects_garbage() {
        let err = "jammed".parse::<MotionState>().unwrap_err();
        assert!(err.to_string().contains("jammed"));
    }

    #[test]
    fn cover_state_serializes_lowercase() {
        let json = serde_json::to_string(&CoverState::Opening).unwrap();
        assert_eq!(json, "\"opening\"");
    }

    #[test]
    fn device_class_is_curtain() {
        assert_eq!(DeviceClass::Curtain.to_string(), "curtain");
        let json = serde_json::to_value(DeviceClass::Curtain).unwrap();
        assert_eq!(json, serde_json::json!("curtain"));
    }
}
