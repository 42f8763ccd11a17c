// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Slide device records and the updates applied to them.
//!
//! A [`Slide`] is created once per physical unit when it is discovered and
//! lives as long as its cover entity. Its motion state is a best-effort
//! record of the last known intent, not ground truth: cover commands patch
//! it optimistically and only a [`SlideUpdate`] from the vendor corrects it.

mod record;
mod update;

pub use record::{Slide, SlideId};
pub use update::SlideUpdate;
