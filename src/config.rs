// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform configuration.

use serde::Deserialize;

use crate::entity_id::EntityId;

/// Configuration shared by all covers of a platform.
///
/// Controls how entity ids are derived from hardware addresses. The defaults
/// produce ids like `cover.slide_aa_bb_cc_dd_ee_ff`.
///
/// # Examples
///
/// ```
/// use slide_cover::PlatformConfig;
///
/// let config = PlatformConfig::new();
/// assert_eq!(config.entity_id_for("AA:BB").to_string(), "cover.slide_aa_bb");
///
/// let config = PlatformConfig::new().with_object_id_prefix("curtain_");
/// assert_eq!(config.entity_id_for("AA:BB").to_string(), "cover.curtain_aa_bb");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    entity_domain: String,
    object_id_prefix: String,
}

impl PlatformConfig {
    /// Default entity domain.
    pub const DEFAULT_ENTITY_DOMAIN: &'static str = "cover";
    /// Default prefix prepended to the hardware address before slugging.
    pub const DEFAULT_OBJECT_ID_PREFIX: &'static str = "slide_";

    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entity_domain: Self::DEFAULT_ENTITY_DOMAIN.to_string(),
            object_id_prefix: Self::DEFAULT_OBJECT_ID_PREFIX.to_string(),
        }
    }

    /// Sets the entity domain.
    #[must_use]
    pub fn with_entity_domain(mut self, domain: impl Into<String>) -> Self {
        self.entity_domain = domain.into();
        self
    }

    /// Sets the object id prefix.
    #[must_use]
    pub fn with_object_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.object_id_prefix = prefix.into();
        self
    }

    /// Returns the entity domain.
    #[must_use]
    pub fn entity_domain(&self) -> &str {
        &self.entity_domain
    }

    /// Returns the object id prefix.
    #[must_use]
    pub fn object_id_prefix(&self) -> &str {
        &self.object_id_prefix
    }

    /// Derives the entity id for a slide with the given hardware address.
    #[must_use]
    pub fn entity_id_for(&self, mac: &str) -> EntityId {
        EntityId::new(
            self.entity_domain.clone(),
            &format!("{}{mac}", self.object_id_prefix),
        )
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = PlatformConfig::default();
        assert_eq!(config.entity_domain(), "cover");
        assert_eq!(config.object_id_prefix(), "slide_");
    }

    #[test]
    fn entity_id_from_mac() {
        let id = PlatformConfig::new().entity_id_for("12:34:56:AB:CD:EF");
        assert_eq!(id.to_string(), "cover.slide_12_34_56_ab_cd_ef");
    }

    #[test]
    fn builder_chain() {
        let config = PlatformConfig::new()
            .with_entity_domain("blind")
            .with_object_id_prefix("gs_");
        assert_eq!(config.entity_id_for("01").to_string(), "blind.gs_01");
    }

    #[test]
    fn deserialize_partial() {
        let config: PlatformConfig =
            serde_json::from_str(r#"{"object_id_prefix": "curtain_"}"#).unwrap();
        assert_eq!(config.entity_domain(), "cover");
        assert_eq!(config.object_id_prefix(), "curtain_");
    }

    #[test]
    fn deserialize_empty() {
        let config: PlatformConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PlatformConfig::new());
    }
}
