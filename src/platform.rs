// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform setup for Slide covers.
//!
//! Turns the slides found by discovery into cover entities. Both the
//! command client and the slide list are passed in explicitly; nothing is
//! looked up from shared host state.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use slide_cover::cover::CoverEntity;
//! use slide_cover::error::CommandDispatchError;
//! use slide_cover::slide::{Slide, SlideId};
//! use slide_cover::types::Position;
//! use slide_cover::{PlatformConfig, SlideApi, SlidePlatform};
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
//! let slides = vec![
//!     Slide::new("1", "Living room", "AA:AA:AA:AA:AA:01"),
//!     Slide::new("2", "Bedroom", "AA:AA:AA:AA:AA:02"),
//! ];
//!
//! let platform = SlidePlatform::setup(Arc::new(NoopApi), Some(slides), &PlatformConfig::default());
//! assert_eq!(platform.len(), 2);
//!
//! let cover = platform.by_slide_id(&SlideId::new("2")).unwrap();
//! assert_eq!(cover.name(), "Bedroom");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::api::SlideApi;
use crate::config::PlatformConfig;
use crate::cover::{CoverEntity, SlideCover};
use crate::entity_id::EntityId;
use crate::slide::{Slide, SlideId, SlideUpdate};

/// The set of cover entities built for one vendor account.
#[derive(Debug)]
pub struct SlidePlatform<A: SlideApi> {
    covers: Vec<SlideCover<A>>,
}

impl<A: SlideApi> SlidePlatform<A> {
    /// Creates one cover per discovered slide.
    ///
    /// Without discovery info there is nothing to set up and the platform
    /// is empty. A slide whose vendor id or entity id repeats an earlier
    /// one is skipped, so every refresh report routes to exactly one cover.
    #[must_use]
    pub fn setup(
        api: Arc<A>,
        discovery: Option<impl IntoIterator<Item = Slide>>,
        config: &PlatformConfig,
    ) -> Self {
        let Some(slides) = discovery else {
            tracing::debug!("No discovery info, skipping Slide cover setup");
            return Self { covers: Vec::new() };
        };

        let mut seen_slide_ids = HashSet::new();
        let mut seen_entity_ids = HashSet::new();
        let mut covers = Vec::new();

        for slide in slides {
            tracing::debug!(
                slide_id = %slide.id(),
                name = %slide.name(),
                mac = %slide.mac(),
                "Setting up Slide entity"
            );

            if seen_slide_ids.contains(slide.id()) {
                tracing::warn!(
                    slide_id = %slide.id(),
                    mac = %slide.mac(),
                    "Duplicate Slide id, skipping"
                );
                continue;
            }

            let cover = SlideCover::new(Arc::clone(&api), slide, config);
            if !seen_entity_ids.insert(cover.entity_id().clone()) {
                tracing::warn!(
                    entity_id = %cover.entity_id(),
                    "Duplicate Slide entity id, skipping"
                );
                continue;
            }
            seen_slide_ids.insert(cover.slide_id().clone());
            covers.push(cover);
        }

        tracing::debug!(count = covers.len(), "Slide cover setup completed");

        Self { covers }
    }

    /// Returns all covers.
    #[must_use]
    pub fn entities(&self) -> &[SlideCover<A>] {
        &self.covers
    }

    /// Returns the number of covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.covers.len()
    }

    /// Returns `true` if no cover was set up.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }

    /// Looks up a cover by entity id.
    #[must_use]
    pub fn entity(&self, entity_id: &EntityId) -> Option<&SlideCover<A>> {
        self.covers.iter().find(|c| c.entity_id() == entity_id)
    }

    /// Looks up a cover by vendor slide id.
    #[must_use]
    pub fn by_slide_id(&self, id: &SlideId) -> Option<&SlideCover<A>> {
        self.covers.iter().find(|c| c.slide_id() == id)
    }

    /// Applies freshly fetched vendor records to the matching covers.
    ///
    /// Returns the number of covers whose state changed. Records for slides
    /// without a cover are ignored.
    pub fn refresh<'a>(&self, reports: impl IntoIterator<Item = &'a Slide>) -> usize {
        let mut changed = 0;
        for report in reports {
            let Some(cover) = self.by_slide_id(report.id()) else {
                tracing::debug!(slide_id = %report.id(), "No cover for reported slide");
                continue;
            };
            if cover.refresh(&SlideUpdate::from(report)) {
                changed += 1;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandDispatchError;
    use crate::types::{CoverState, MotionState, Position};

    struct NoopApi;

    impl SlideApi for NoopApi {
        async fn slide_open(&self, _: &SlideId) -> Result<(), CommandDispatchError> {
            Ok(())
        }

        async fn slide_close(&self, _: &SlideId) -> Result<(), CommandDispatchError> {
            Ok(())
        }

        async fn slide_stop(&self, _: &SlideId) -> Result<(), CommandDispatchError> {
            Ok(())
        }

        async fn slide_set_position(
            &self,
            _: &SlideId,
            _: Position,
        ) -> Result<(), CommandDispatchError> {
            Ok(())
        }
    }

    fn slides() -> Vec<Slide> {
        vec![
            Slide::new("1", "Living room", "aa:00:00:00:00:01"),
            Slide::new("2", "Bedroom", "aa:00:00:00:00:02").with_motion(MotionState::Closed),
        ]
    }

    fn platform(discovery: Option<Vec<Slide>>) -> SlidePlatform<NoopApi> {
        SlidePlatform::setup(Arc::new(NoopApi), discovery, &PlatformConfig::default())
    }

    #[test]
    fn setup_without_discovery_is_empty() {
        let platform = platform(None);
        assert!(platform.is_empty());
    }

    #[test]
    fn setup_creates_one_cover_per_slide() {
        let platform = platform(Some(slides()));
        assert_eq!(platform.len(), 2);

        let ids: Vec<String> = platform
            .entities()
            .iter()
            .map(|c| c.entity_id().to_string())
            .collect();
        assert_eq!(
            ids,
            ["cover.slide_aa_00_00_00_00_01", "cover.slide_aa_00_00_00_00_02"]
        );
    }

    #[test]
    fn setup_skips_duplicate_entity_ids() {
        let mut slides = slides();
        slides.push(Slide::new("3", "Copy", "AA-00-00-00-00-01"));
        let platform = platform(Some(slides));
        assert_eq!(platform.len(), 2);
        assert!(platform.by_slide_id(&SlideId::new("3")).is_none());
    }

    #[test]
    fn setup_skips_duplicate_slide_ids() {
        let platform = platform(Some(vec![
            Slide::new("1", "A", "aa:01"),
            Slide::new("1", "B", "aa:02"),
        ]));
        assert_eq!(platform.len(), 1);
        assert_eq!(platform.by_slide_id(&SlideId::new("1")).unwrap().name(), "A");

        let id = PlatformConfig::default().entity_id_for("aa:02");
        assert!(platform.entity(&id).is_none());

        let report = Slide::new("1", "A", "aa:01").with_motion(MotionState::Open);
        assert_eq!(platform.refresh([&report]), 1);
        assert_eq!(platform.entities()[0].state(), CoverState::Open);
    }

    #[test]
    fn skipped_duplicate_does_not_reserve_its_slide_id() {
        let platform = platform(Some(vec![
            Slide::new("1", "A", "aa:01"),
            Slide::new("2", "Copy", "AA-01"),
            Slide::new("2", "B", "aa:02"),
        ]));
        assert_eq!(platform.len(), 2);
        assert_eq!(platform.by_slide_id(&SlideId::new("2")).unwrap().name(), "B");
    }

    #[test]
    fn lookup_by_entity_id() {
        let platform = platform(Some(slides()));
        let id = PlatformConfig::default().entity_id_for("aa:00:00:00:00:02");
        let cover = platform.entity(&id).unwrap();
        assert_eq!(cover.state(), CoverState::Closed);
    }

    #[test]
    fn refresh_routes_reports_by_slide_id() {
        let platform = platform(Some(slides()));
        let reports = vec![
            Slide::new("1", "Living room", "aa:00:00:00:00:01")
                .with_motion(MotionState::Open)
                .with_position(Position::OPEN),
            Slide::new("2", "Bedroom", "aa:00:00:00:00:02").with_motion(MotionState::Closed),
            Slide::new("99", "Stranger", "ff:ff:ff:ff:ff:ff").with_motion(MotionState::Open),
        ];

        assert_eq!(platform.refresh(&reports), 1);

        let living = platform.by_slide_id(&SlideId::new("1")).unwrap();
        assert_eq!(living.state(), CoverState::Open);
        assert_eq!(living.current_cover_position(), Some(crate::types::CoverPosition::OPEN));
    }
}
