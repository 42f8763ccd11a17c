// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `slide_cover` - Slide curtain motors as home-automation cover entities.
//!
//! This library adapts Slide devices to the cover entity model used by
//! home-automation hosts: open, close, stop and set-position commands, plus
//! the open / closed / opening / closing / unknown state machine.
//!
//! Talking to the vendor API is left to a client implementing
//! [`SlideApi`]. Each [`SlideCover`] forwards commands to that client and
//! updates its own motion state optimistically, before the client answers.
//! The optimistic state is the last known intent, not ground truth: it is
//! only corrected by an authoritative refresh and is not rolled back when a
//! command fails.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use slide_cover::cover::CoverEntity;
//! use slide_cover::error::CommandDispatchError;
//! use slide_cover::slide::{Slide, SlideId};
//! use slide_cover::types::{CoverPosition, CoverState, MotionState, Position};
//! use slide_cover::{PlatformConfig, SlideApi, SlidePlatform};
//!
//! struct MyClient;
//!
//! impl SlideApi for MyClient {
//!     async fn slide_open(&self, _: &SlideId) -> Result<(), CommandDispatchError> { Ok(()) }
//!     async fn slide_close(&self, _: &SlideId) -> Result<(), CommandDispatchError> { Ok(()) }
//!     async fn slide_stop(&self, _: &SlideId) -> Result<(), CommandDispatchError> { Ok(()) }
//!     async fn slide_set_position(&self, _: &SlideId, _: Position) -> Result<(), CommandDispatchError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() -> slide_cover::Result<()> {
//!     let slides = Slide::list_from_json(
//!         r#"[{"id": 1, "name": "Living room", "mac": "AA:BB:CC:DD:EE:FF", "state": "open", "pos": 0.3}]"#,
//!     )?;
//!
//!     let platform = SlidePlatform::setup(Arc::new(MyClient), Some(slides), &PlatformConfig::default());
//!     let cover = &platform.entities()[0];
//!
//!     cover.set_cover_position(CoverPosition::new(70)?).await?;
//!     assert_eq!(cover.state(), CoverState::Closing);
//!
//!     // Later, the vendor reports where the slide actually stopped
//!     let report = Slide::new("1", "Living room", "AA:BB:CC:DD:EE:FF")
//!         .with_motion(MotionState::Closed)
//!         .with_position(Position::CLOSED);
//!     platform.refresh([&report]);
//!     assert_eq!(cover.state(), CoverState::Closed);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod config;
pub mod cover;
pub mod entity_id;
pub mod error;
mod platform;
pub mod slide;
pub mod types;

pub use api::SlideApi;
pub use config::PlatformConfig;
pub use cover::{CoverEntity, SlideCover};
pub use entity_id::EntityId;
pub use error::{CommandDispatchError, Error, ParseError, Result, ValueError};
pub use platform::SlidePlatform;
pub use slide::{Slide, SlideId, SlideUpdate};
pub use types::{CoverPosition, CoverState, DeviceClass, MotionState, Position};
