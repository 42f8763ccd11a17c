// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authoritative slide updates.
//!
//! Updates come from whatever polls or receives pushes from the vendor API.
//! They replace optimistic guesses made by cover commands.
//!
//! # Examples
//!
//! ```
//! use slide_cover::slide::{Slide, SlideUpdate};
//! use slide_cover::types::{MotionState, Position};
//!
//! let mut slide = Slide::new("1", "Kitchen", "aa:bb:cc:dd:ee:ff");
//!
//! let changed = slide.apply(&SlideUpdate::Motion(MotionState::Closed));
//! assert!(changed);
//!
//! let changed = slide.apply(&SlideUpdate::Motion(MotionState::Closed));
//! assert!(!changed);
//! ```

use crate::types::{MotionState, Position};

use super::Slide;

/// A change reported by the vendor for one slide.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideUpdate {
    /// Motion state observed. `Unknown` is ignored when applied.
    Motion(MotionState),

    /// Position observed; `None` if the vendor no longer reports one.
    Position(Option<Position>),

    /// Multiple updates applied in order.
    Batch(Vec<SlideUpdate>),
}

impl From<&Slide> for SlideUpdate {
    /// Builds an update from a freshly fetched vendor record.
    ///
    /// An unknown motion state in the report is left out. The position is
    /// always carried, so an unreported position clears the old one.
    fn from(report: &Slide) -> Self {
        let mut updates = Vec::with_capacity(2);
        if report.motion().is_known() {
            updates.push(Self::Motion(report.motion()));
        }
        updates.push(Self::Position(report.position()));
        Self::Batch(updates)
    }
}
