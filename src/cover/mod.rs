// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover entities as seen by a home-automation host.
//!
//! The host polls the query methods of [`CoverEntity`] and forwards user
//! intents to its command methods. [`SlideCover`] is the implementation for
//! Slide curtain motors.
//!
//! # Optimistic State
//!
//! Commands update the reported motion state before the command client is
//! awaited, so the host sees `opening`/`closing` right away. Nothing checks
//! that guess afterwards: it stays until the next authoritative refresh,
//! even if the command failed. This is why every cover reports
//! [`assumed_state`](CoverEntity::assumed_state) as `true`.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use slide_cover::cover::{CoverEntity, SlideCover};
//! use slide_cover::error::CommandDispatchError;
//! use slide_cover::slide::{Slide, SlideId};
//! use slide_cover::types::{CoverState, Position};
//! use slide_cover::{PlatformConfig, SlideApi};
//!
//! struct NoopApi;
//!
//! impl SlideApi for NoopApi {
//!     async fn slide_open(&self, _: &SlideId) -> Result<(), CommandDispatchError> { Ok(()) }
//!     async fn slide_close(&self, _: &SlideId) -> Result<(), CommandDispatchError> { Ok(()) }
//!     async fn slide_stop(&self, _: &SlideId) -> Result<(), CommandDispatchError> { Ok(()) }
//!     async fn slide_set_position(&self, _: &SlideId, _: Position) -> Result<(), CommandDispatchError> { Ok(()) }
//! }
//!
//! let slide = Slide::new("1", "Living room", "AA:BB:CC:DD:EE:FF");
//! let cover = SlideCover::new(Arc::new(NoopApi), slide, &PlatformConfig::default());
//!
//! assert_eq!(cover.entity_id().to_string(), "cover.slide_aa_bb_cc_dd_ee_ff");
//! assert_eq!(cover.state(), CoverState::Unknown);
//! assert_eq!(cover.is_closed(), None);
//! ```

mod slide_cover;

pub use slide_cover::SlideCover;

use crate::entity_id::EntityId;
use crate::error::CommandDispatchError;
use crate::types::{CoverPosition, CoverState, DeviceClass};

/// Host-facing surface of a cover entity.
#[allow(async_fn_in_trait)]
pub trait CoverEntity {
    /// Returns the stable entity id.
    fn entity_id(&self) -> &EntityId;

    /// Returns the display name.
    fn name(&self) -> &str;

    /// Returns the device class.
    fn device_class(&self) -> DeviceClass;

    /// Returns `true` if the reported state is not continuously verified.
    fn assumed_state(&self) -> bool;

    /// Returns `true` if the cover is opening.
    fn is_opening(&self) -> bool;

    /// Returns `true` if the cover is closing.
    fn is_closing(&self) -> bool;

    /// Returns whether the cover is closed, or `None` if unknown.
    fn is_closed(&self) -> Option<bool>;

    /// Returns the position (0 open, 100 closed), or `None` if unknown.
    fn current_cover_position(&self) -> Option<CoverPosition>;

    /// Opens the cover.
    ///
    /// # Errors
    ///
    /// Returns `CommandDispatchError` if the command could not be delivered.
    async fn open_cover(&self) -> Result<(), CommandDispatchError>;

    /// Closes the cover.
    ///
    /// # Errors
    ///
    /// Returns `CommandDispatchError` if the command could not be delivered.
    async fn close_cover(&self) -> Result<(), CommandDispatchError>;

    /// Stops the cover.
    ///
    /// # Errors
    ///
    /// Returns `CommandDispatchError` if the command could not be delivered.
    async fn stop_cover(&self) -> Result<(), CommandDispatchError>;

    /// Moves the cover to a position.
    ///
    /// # Errors
    ///
    /// Returns `CommandDispatchError` if the command could not be delivered.
    async fn set_cover_position(
        &self,
        position: CoverPosition,
    ) -> Result<(), CommandDispatchError>;

    /// Returns the entity state the host should display.
    ///
    /// Motion wins over position: a cover that is opening reports
    /// `Opening` even if it was last seen closed.
    fn state(&self) -> CoverState {
        if self.is_opening() {
            return CoverState::Opening;
        }
        if self.is_closing() {
            return CoverState::Closing;
        }
        match self.is_closed() {
            None => CoverState::Unknown,
            Some(true) => CoverState::Closed,
            Some(false) => CoverState::Open,
        }
    }

    /// Returns the entity attributes as a JSON object.
    ///
    /// `current_position` is only present when the position is known.
    fn state_attributes(&self) -> serde_json::Value {
        let mut attributes = serde_json::Map::with_capacity(4);
        attributes.insert("friendly_name".into(), self.name().into());
        attributes.insert("device_class".into(), self.device_class().as_str().into());
        attributes.insert("assumed_state".into(), self.assumed_state().into());
        if let Some(position) = self.current_cover_position() {
            attributes.insert("current_position".into(), position.value().into());
        }
        serde_json::Value::Object(attributes)
    }
}
