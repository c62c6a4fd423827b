//! Weight tables and fortune-period constants.
//!
//! Defaults reproduce the built-in tables. Every field may be overridden
//! from TOML; missing fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combination::{CombinationKind, Completion};
use crate::element::VitalityLevel;
use crate::error::GanzhiError;
use crate::hidden::TIER_WEIGHTS;
use crate::pillar::Position;

/// Weights for the element strength score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Primary stem weight per position (year, month, day, hour).
    pub stem_position: [f64; 4],
    /// Hidden stem weight per position, multiplied by the tier weight.
    pub hidden_position: [f64; 4],
    /// Sound-label element weight per position.
    pub sound_position: [f64; 4],
    /// Principal, middle and residual hidden-stem tiers.
    pub hidden_tiers: [f64; 3],
    /// Seasonal delta per vitality level (dominant .. dead).
    pub seasonal: [f64; 5],
    /// Dominant-month bonus per vitality level (dominant .. dead).
    pub dominant_month: [f64; 5],
    pub stem_pair: f64,
    pub branch_triad: f64,
    pub branch_trio: f64,
    /// Multiplier for a combination with only two of three branches.
    pub partial_factor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            stem_position: [1.2, 3.0, 3.0, 1.0],
            hidden_position: [0.8, 2.5, 2.2, 0.7],
            sound_position: [0.6, 2.0, 1.5, 0.5],
            hidden_tiers: TIER_WEIGHTS,
            seasonal: [2.5, 1.2, 0.0, -1.2, -1.8],
            dominant_month: [2.0, 1.0, 0.0, -0.5, -0.8],
            stem_pair: 0.8,
            branch_triad: 1.5,
            branch_trio: 1.2,
            partial_factor: 0.6,
        }
    }
}

impl ScoringWeights {
    /// Primary stem weight at `pos`.
    pub fn stem_weight(&self, pos: Position) -> f64 {
        self.stem_position[pos.index()]
    }

    /// Hidden stem weight at `pos`, before the tier factor.
    pub fn hidden_weight(&self, pos: Position) -> f64 {
        self.hidden_position[pos.index()]
    }

    /// Sound-label weight at `pos`.
    pub fn sound_weight(&self, pos: Position) -> f64 {
        self.sound_position[pos.index()]
    }

    /// Seasonal delta for a vitality level.
    pub fn seasonal_delta(&self, level: VitalityLevel) -> f64 {
        self.seasonal[level.index() as usize]
    }

    /// Dominant-month bonus for a vitality level.
    pub fn dominant_month_bonus(&self, level: VitalityLevel) -> f64 {
        self.dominant_month[level.index() as usize]
    }

    /// Weight of one detected combination.
    pub fn combination_weight(&self, kind: CombinationKind, completion: Completion) -> f64 {
        let base = match kind {
            CombinationKind::StemPair => self.stem_pair,
            CombinationKind::BranchTriad => self.branch_triad,
            CombinationKind::BranchTrio => self.branch_trio,
        };
        match completion {
            Completion::Full => base,
            Completion::Partial => base * self.partial_factor,
        }
    }
}

/// Fortune-period generation constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneConfig {
    /// Age at which the first decade period starts.
    pub start_age: i32,
    /// Number of decade periods to generate.
    pub decade_count: usize,
    /// Length of a decade period in years.
    pub decade_span: i32,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            start_age: 8,
            decade_count: 10,
            decade_span: 10,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringWeights,
    pub fortune: FortuneConfig,
}

impl EngineConfig {
    /// Parse from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, GanzhiError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GanzhiError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GanzhiError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), GanzhiError> {
        let f = &self.fortune;
        if f.decade_span <= 0 {
            return Err(GanzhiError::Config(format!(
                "decade_span must be positive, got {}",
                f.decade_span
            )));
        }
        if f.start_age < 0 {
            return Err(GanzhiError::Config(format!(
                "start_age must not be negative, got {}",
                f.start_age
            )));
        }
        // Last age covered must fit in i32.
        let horizon = i32::try_from(f.decade_count)
            .ok()
            .and_then(|n| n.checked_mul(f.decade_span))
            .and_then(|years| years.checked_add(f.start_age));
        if horizon.is_none() {
            return Err(GanzhiError::Config(format!(
                "start_age + decade_count * decade_span overflows ({} + {} * {})",
                f.start_age, f.decade_count, f.decade_span
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let w = ScoringWeights::default();
        assert_eq!(w.stem_weight(Position::Month), 3.0);
        assert_eq!(w.hidden_weight(Position::Hour), 0.7);
        assert_eq!(w.seasonal_delta(VitalityLevel::Dead), -1.8);
        assert_eq!(w.dominant_month_bonus(VitalityLevel::Supportive), 1.0);
        let f = FortuneConfig::default();
        assert_eq!((f.start_age, f.decade_count, f.decade_span), (8, 10, 10));
    }

    #[test]
    fn partial_combination_weights() {
        let w = ScoringWeights::default();
        let triad = w.combination_weight(CombinationKind::BranchTriad, Completion::Partial);
        let trio = w.combination_weight(CombinationKind::BranchTrio, Completion::Partial);
        assert!((triad - 0.9).abs() < 1e-12);
        assert!((trio - 0.72).abs() < 1e-12);
        assert_eq!(
            w.combination_weight(CombinationKind::StemPair, Completion::Full),
            0.8
        );
    }

    #[test]
    fn toml_partial_override() {
        let cfg = EngineConfig::from_toml_str(
            r#"
            [scoring]
            stem_pair = 1.0

            [fortune]
            start_age = 3
            "#,
        )
        .unwrap();
        assert_eq!(cfg.scoring.stem_pair, 1.0);
        assert_eq!(cfg.scoring.branch_triad, 1.5);
        assert_eq!(cfg.fortune.start_age, 3);
        assert_eq!(cfg.fortune.decade_count, 10);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(
            EngineConfig::from_toml_str("[scoring]\nstem_pair = \"x\""),
            Err(GanzhiError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("[fortune]\ndecade_span = 0"),
            Err(GanzhiError::Config(_))
        ));
    }

    #[test]
    fn overflowing_fortune_horizon_is_rejected() {
        assert!(matches!(
            EngineConfig::from_toml_str("[fortune]\ndecade_span = 1000000000\ndecade_count = 5"),
            Err(GanzhiError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("[fortune]\ndecade_count = 3000000000"),
            Err(GanzhiError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("[fortune]\nstart_age = -1"),
            Err(GanzhiError::Config(_))
        ));
        let edge = EngineConfig::from_toml_str(
            "[fortune]\nstart_age = 7\ndecade_span = 1000000000\ndecade_count = 2",
        )
        .unwrap();
        assert_eq!(edge.fortune.decade_count, 2);
    }
}
