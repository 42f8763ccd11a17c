// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for curtain control.
//!
//! # Types
//!
//! - [`Position`] - Travel as a fraction (0.0 open, 1.0 closed)
//! - [`CoverPosition`] - Travel as a percentage (0 open, 100 closed)
//! - [`MotionState`] - Last known motion of a slide
//! - [`CoverState`] - Entity state reported to the host
//! - [`DeviceClass`] - Categorical tag of the cover

mod motion;
mod position;

pub use motion::{CoverState, DeviceClass, MotionState};
pub use position::{CoverPosition, Position};
