// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-facing entity identifiers.

use std::fmt;

/// Converts text into a slug of lowercase ASCII letters, digits and `_`.
///
/// Every run of other characters collapses into a single `_`, and leading
/// or trailing separators are dropped. Text with nothing sluggable becomes
/// `"unknown"`.
///
/// Non-ASCII letters are not transliterated; they count as separators, so
/// `"Küche"` becomes `"k_che"`. Entity ids are keyed on MAC addresses,
/// which are plain ASCII.
///
/// # Examples
///
/// ```
/// use slide_cover::entity_id::slugify;
///
/// assert_eq!(slugify("slide_AA:BB:CC:DD:EE:FF"), "slide_aa_bb_cc_dd_ee_ff");
/// assert_eq!(slugify("  Living Room!  "), "living_room");
/// assert_eq!(slugify("::"), "unknown");
/// assert_eq!(slugify("Küche"), "k_che");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        "unknown".to_string()
    } else {
        slug
    }
}

/// Stable identifier of a cover entity, e.g. `cover.slide_aa_bb_cc_dd_ee_ff`.
///
/// Made of an entity domain and a slugged object id. Derived once from the
/// hardware address, so it stays the same across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(into = "String")]
pub struct EntityId {
    domain: String,
    object_id: String,
}

impl EntityId {
    /// Creates an entity id, slugging `object_id`.
    #[must_use]
    pub fn new(domain: impl Into<String>, object_id: &str) -> Self {
        Self {
            domain: domain.into(),
            object_id: slugify(object_id),
        }
    }

    /// Returns the entity domain (the part before the dot).
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the slugged object id (the part after the dot).
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.object_id
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain, self.object_id)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_mac_address() {
        assert_eq!(slugify("slide_12:34:56:78:9A:BC"), "slide_12_34_56_78_9a_bc");
        assert_eq!(slugify("slide_123456789abc"), "slide_123456789abc");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("a -- b"), "a_b");
        assert_eq!(slugify("__a__"), "a");
    }

    #[test]
    fn slugify_treats_non_ascii_as_separator() {
        assert_eq!(slugify("Küche"), "k_che");
        assert_eq!(slugify(""), "unknown");
    }

    #[test]
    fn entity_id_display() {
        let id = EntityId::new("cover", "slide_AA:BB");
        assert_eq!(id.domain(), "cover");
        assert_eq!(id.object_id(), "slide_aa_bb");
        assert_eq!(id.to_string(), "cover.slide_aa_bb");
    }

    #[test]
    fn entity_id_serializes_as_string() {
        let id = EntityId::new("cover", "slide_1");
        assert_eq!(
            serde_json::to_value(&id).unwrap(),
            serde_json::json!("cover.slide_1")
        );
    }
}
