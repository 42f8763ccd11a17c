// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Slide device record.

use std::fmt;

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::{MotionState, Position};

use super::SlideUpdate;

/// Vendor-assigned identifier of a slide.
///
/// Opaque to this crate. The vendor reports it either as a number or as a
/// string; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(String);

impl SlideId {
    /// Creates an identifier from its textual form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for SlideId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for SlideId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for SlideId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

/// One physical slide as last observed.
///
/// `id`, `name` and `mac` are fixed at discovery time. `position` and
/// `motion` hold the last known values and may be patched optimistically by
/// a [`SlideCover`](crate::cover::SlideCover) or authoritatively through
/// [`Slide::apply`].
///
/// # Examples
///
/// ```
/// use slide_cover::slide::Slide;
/// use slide_cover::types::MotionState;
///
/// let slide = Slide::from_json(
///     r#"{"id": 42, "name": "Living room", "mac": "AA:BB:CC:DD:EE:FF", "state": null, "pos": 0.25}"#,
/// ).unwrap();
///
/// assert_eq!(slide.id().as_str(), "42");
/// assert_eq!(slide.motion(), MotionState::Unknown);
/// assert_eq!(slide.position().map(|p| p.value()), Some(0.25));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSlide")]
pub struct Slide {
    id: SlideId,
    name: String,
    mac: String,
    position: Option<Position>,
    motion: MotionState,
}

impl Slide {
    /// Creates a slide with unknown position and motion.
    #[must_use]
    pub fn new(id: impl Into<SlideId>, name: impl Into<String>, mac: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mac: mac.into(),
            position: None,
            motion: MotionState::Unknown,
        }
    }

    /// Sets the initial position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the initial motion state.
    #[must_use]
    pub fn with_motion(mut self, motion: MotionState) -> Self {
        self.motion = motion;
        self
    }

    /// Parses a single vendor record.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the JSON is malformed or the state string is
    /// not recognised.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(ParseError::Json)
    }

    /// Parses a JSON array of vendor records.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if any record fails to parse.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, ParseError> {
        serde_json::from_str(json).map_err(ParseError::Json)
    }

    /// Returns the vendor identifier.
    #[must_use]
    pub fn id(&self) -> &SlideId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hardware address.
    #[must_use]
    pub fn mac(&self) -> &str {
        &self.mac
    }

    /// Returns the last known position, if any.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the last known motion state.
    #[must_use]
    pub fn motion(&self) -> MotionState {
        self.motion
    }

    /// Overwrites the motion state without going through [`SlideUpdate`].
    ///
    /// Used for optimistic patches. Unlike [`Slide::apply`] this accepts any
    /// state, so callers must not pass `Unknown`.
    pub(crate) fn set_motion(&mut self, motion: MotionState) {
        self.motion = motion;
    }

    /// Applies an authoritative update.
    ///
    /// Returns `true` if the record changed.
    pub fn apply(&mut self, update: &SlideUpdate) -> bool {
        match update {
            SlideUpdate::Motion(MotionState::Unknown) => false,
            SlideUpdate::Motion(motion) => {
                let changed = self.motion != *motion;
                self.motion = *motion;
                changed
            }
            SlideUpdate::Position(position) => {
                let changed = self.position != *position;
                self.position = *position;
                changed
            }
            SlideUpdate::Batch(updates) => updates
                .iter()
                .fold(false, |changed, u| self.apply(u) || changed),
        }
    }
}

/// Wire shape of a slide as reported by the vendor.
#[derive(Deserialize)]
struct RawSlide {
    id: SlideId,
    name: String,
    mac: String,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    pos: Option<f64>,
}

impl TryFrom<RawSlide> for Slide {
    type Error = ParseError;

    fn try_from(raw: RawSlide) -> Result<Self, Self::Error> {
        let motion = raw
            .state
            .as_deref()
            .map(str::parse::<MotionState>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            id: raw.id,
            name: raw.name,
            mac: raw.mac,
            position: raw.pos.map(Position::clamped),
            motion,
        })
    }
}
