// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover entity for a single Slide.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::SlideApi;
use crate::config::PlatformConfig;
use crate::entity_id::EntityId;
use crate::error::CommandDispatchError;
use crate::slide::{Slide, SlideId, SlideUpdate};
use crate::types::{CoverPosition, DeviceClass, MotionState, Position};

use super::CoverEntity;

/// A Slide curtain exposed as a cover entity.
///
/// Owns the [`Slide`] record it was built from and forwards commands to a
/// shared [`SlideApi`] client. The record lock is only held for the
/// duration of a read or patch, never across an await, so queries observe
/// an optimistic update as soon as the command has been issued.
///
/// Concurrent commands on the same cover are not serialized; the last
/// optimistic write wins.
#[derive(Debug)]
pub struct SlideCover<A: SlideApi> {
    api: Arc<A>,
    id: SlideId,
    name: String,
    entity_id: EntityId,
    slide: RwLock<Slide>,
}

impl<A: SlideApi> SlideCover<A> {
    /// Creates a cover for `slide`, deriving its entity id from the
    /// hardware address.
    #[must_use]
    pub fn new(api: Arc<A>, slide: Slide, config: &PlatformConfig) -> Self {
        Self {
            api,
            id: slide.id().clone(),
            name: slide.name().to_string(),
            entity_id: config.entity_id_for(slide.mac()),
            slide: RwLock::new(slide),
        }
    }

    /// Returns the vendor identifier of the slide.
    #[must_use]
    pub fn slide_id(&self) -> &SlideId {
        &self.id
    }

    /// Returns a copy of the current slide record.
    #[must_use]
    pub fn snapshot(&self) -> Slide {
        self.slide.read().clone()
    }

    /// Applies an authoritative update from the vendor.
    ///
    /// Returns `true` if the record changed.
    pub fn refresh(&self, update: &SlideUpdate) -> bool {
        let changed = self.slide.write().apply(update);
        if changed {
            tracing::debug!(slide_id = %self.id, "Slide state refreshed");
        }
        changed
    }

    fn motion(&self) -> MotionState {
        self.slide.read().motion()
    }

    fn set_motion(&self, motion: MotionState) {
        self.slide.write().set_motion(motion);
    }

    fn log_failure(&self, command: &'static str, error: &CommandDispatchError) {
        tracing::warn!(
            slide_id = %self.id,
            command,
            error = %error,
            "Slide command failed, keeping optimistic state"
        );
    }
}

impl<A: SlideApi> CoverEntity for SlideCover<A> {
    fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn device_class(&self) -> DeviceClass {
        DeviceClass::Curtain
    }

    fn assumed_state(&self) -> bool {
        true
    }

    fn is_opening(&self) -> bool {
        self.motion() == MotionState::Opening
    }

    fn is_closing(&self) -> bool {
        self.motion() == MotionState::Closing
    }

    fn is_closed(&self) -> Option<bool> {
        match self.motion() {
            MotionState::Unknown => None,
            motion => Some(motion == MotionState::Closed),
        }
    }

    fn current_cover_position(&self) -> Option<CoverPosition> {
        self.slide.read().position().map(|p| p.to_percent())
    }

    async fn open_cover(&self) -> Result<(), CommandDispatchError> {
        self.set_motion(MotionState::Opening);
        tracing::debug!(slide_id = %self.id, "Opening slide");
        self.api
            .slide_open(&self.id)
            .await
            .inspect_err(|e| self.log_failure("open", e))
    }

    async fn close_cover(&self) -> Result<(), CommandDispatchError> {
        self.set_motion(MotionState::Closing);
        tracing::debug!(slide_id = %self.id, "Closing slide");
        self.api
            .slide_close(&self.id)
            .await
            .inspect_err(|e| self.log_failure("close", e))
    }

    async fn stop_cover(&self) -> Result<(), CommandDispatchError> {
        // Where the slide ends up is unknown until the next refresh.
        tracing::debug!(slide_id = %self.id, "Stopping slide");
        self.api
            .slide_stop(&self.id)
            .await
            .inspect_err(|e| self.log_failure("stop", e))
    }

    async fn set_cover_position(
        &self,
        position: CoverPosition,
    ) -> Result<(), CommandDispatchError> {
        let target = Position::from(position);

        {
            let mut slide = self.slide.write();
            // No direction can be told without a known starting point.
            if let Some(current) = slide.position() {
                let motion = if target > current {
                    MotionState::Closing
                } else {
                    MotionState::Opening
                };
                slide.set_motion(motion);
            }
        }

        tracing::debug!(slide_id = %self.id, target = %target, "Moving slide");
        self.api
            .slide_set_position(&self.id, target)
            .await
            .inspect_err(|e| self.log_failure("set_position", e))
    }
}
