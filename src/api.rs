// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command client interface for the Slide vendor API.
//!
//! This crate does not talk to the vendor API itself. Whatever does (a cloud
//! client, a local network client, a test double) implements [`SlideApi`]
//! and is handed to each [`SlideCover`](crate::cover::SlideCover).
//!
//! Implementations own transport, authentication and any retry policy.
//! Every failure they surface is returned by the cover unchanged.

use crate::error::CommandDispatchError;
use crate::slide::SlideId;
use crate::types::Position;

/// Trait for clients that can send commands to slides.
#[allow(async_fn_in_trait)]
pub trait SlideApi {
    /// Starts opening the slide.
    ///
    /// # Errors
    ///
    /// Returns `CommandDispatchError` if the command could not be delivered.
    async fn slide_open(&self, id: &SlideId) -> Result<(), CommandDispatchError>;

    /// Starts closing the slide.
    ///
    /// # Errors
    ///
    /// Returns `CommandDispatchError` if the command could not be delivered.
    async fn slide_close(&self, id: &SlideId) -> Result<(), CommandDispatchError>;

    /// Stops the slide where it is.
    ///
    /// # Errors
    ///
    /// Returns `CommandDispatchError` if the command could not be delivered.
    async fn slide_stop(&self, id: &SlideId) -> Result<(), CommandDispatchError>;

    /// Moves the slide to a position.
    ///
    /// # Arguments
    ///
    /// * `id` - The slide to move
    /// * `position` - Target fraction, 0.0 open to 1.0 closed
    ///
    /// # Errors
    ///
    /// Returns `CommandDispatchError` if the command could not be delivered.
    async fn slide_set_position(
        &self,
        id: &SlideId,
        position: Position,
    ) -> Result<(), CommandDispatchError>;
}
