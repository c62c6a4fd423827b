//! Error types for parsing chart input and configuration.
//!
//! Core computations never fail: lookup misses, incomplete charts and
//! out-of-range selections degrade to empty or zero results. Errors only
//! arise at the text/config boundary.

use thiserror::Error;

/// Errors from parsing symbols, pillars and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GanzhiError {
    #[error("unknown stem symbol: {0:?}")]
    UnknownStem(String),

    #[error("unknown branch symbol: {0:?}")]
    UnknownBranch(String),

    #[error("invalid pillar {0:?}: expected a stem followed by a branch")]
    InvalidPillar(String),

    #[error("pillar {0:?} pairs a yang stem with a yin branch or vice versa")]
    MismatchedPolarity(String),

    #[error("unknown chart position: {0:?}")]
    UnknownPosition(String),

    #[error("unknown gender: {0:?}")]
    UnknownGender(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for GanzhiError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
