//! Resolver configuration.
//!
//! Game-variant switches are read once, when a session starts, and then
//! passed explicitly into every resolution. Nothing in the engine queries
//! features lazily.
//!
//! # Example
//!
//! ```
//! use sigil_core::{GameVariant, ResolverConfig};
//!
//! let iwd2 = ResolverConfig::from_features(&GameVariant::Iwd2);
//! assert!(iwd2.charname_is_gabber);
//!
//! let bg2 = ResolverConfig::from_features(&GameVariant::Bg2);
//! assert!(!bg2.charname_is_gabber);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ResolveError, Result};

/// Engine features the resolvers care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// `Protagonist` names the dialogue speaker rather than player 1.
    CharNameIsGabber,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CharNameIsGabber => write!(f, "CharNameIsGabber"),
        }
    }
}

/// Source of feature switches, usually the host game's configuration.
pub trait FeatureQuery {
    /// Returns `true` if the feature is enabled.
    fn has_feature(&self, feature: Feature) -> bool;
}

/// Known game variants with their built-in feature sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    /// Baldur's Gate.
    Bg1,
    /// Baldur's Gate II.
    Bg2,
    /// Icewind Dale.
    Iwd,
    /// Icewind Dale II.
    Iwd2,
    /// Planescape: Torment.
    Pst,
}

impl FeatureQuery for GameVariant {
    fn has_feature(&self, feature: Feature) -> bool {
        match feature {
            Feature::CharNameIsGabber => matches!(self, Self::Iwd2),
        }
    }
}

/// Switches fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// `Protagonist` prefers the dialogue speaker, falling back to the
    /// nearest living party member.
    #[serde(default)]
    pub charname_is_gabber: bool,
}

impl ResolverConfig {
    /// Reads every switch from a feature source, once.
    #[must_use]
    pub fn from_features(features: &impl FeatureQuery) -> Self {
        Self {
            charname_is_gabber: features.has_feature(Feature::CharNameIsGabber),
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Config`] if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ResolveError::Config(e.to_string()))
    }
}
