//! Common error infrastructure for game2-core.
//!
//! The resolver has no recoverable states: every failure here means the
//! caller handed it a config/state pairing the chain would never accept.
//! Errors are surfaced immediately instead of defaulted, since a silent
//! fallback would let the client prediction drift from the chain unnoticed.

use crate::state::{AbilityId, EffectType};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: enemy count outside 1..=3, wrong loadout size
    Validation,

    /// Unexpected inconsistency between collaborators.
    ///
    /// Examples: a loadout referencing an ability missing from the table.
    /// These indicate integration bugs and should be investigated.
    Internal,

    /// Battle state corrupted, the round cannot be computed.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game2 errors.
///
/// Provides a uniform interface for error classification across crates.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failures raised while validating or resolving a combat round.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("ability {id} is not in the ability table")]
    UnknownAbilityId { id: AbilityId },

    #[error("deck index {index} in slot {slot} is outside the loadout (size {loadout_size})")]
    InvalidDeckIndex {
        slot: usize,
        index: u8,
        loadout_size: usize,
    },

    #[error("deck index {index} appears more than once in the hand")]
    DuplicateDeckIndex { index: u8 },

    #[error("enemy count {count} is outside 1..=3")]
    InvalidEnemyCount { count: usize },

    #[error("{effect_type} effect encodes energy color {amount}, expected 0..=2")]
    InvalidEnergyColor { effect_type: EffectType, amount: u32 },

    #[error("loadout has {len} abilities, expected exactly {expected}")]
    InvalidLoadoutSize { len: usize, expected: usize },

    #[error("reward range {min}..={max} is empty")]
    InvalidRewardRange { min: u64, max: u64 },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownAbilityId { .. } => ErrorSeverity::Internal,
            Self::InvalidDeckIndex { .. } | Self::DuplicateDeckIndex { .. } => {
                ErrorSeverity::Fatal
            }
            Self::InvalidEnemyCount { .. }
            | Self::InvalidEnergyColor { .. }
            | Self::InvalidLoadoutSize { .. }
            | Self::InvalidRewardRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAbilityId { .. } => "UNKNOWN_ABILITY_ID",
            Self::InvalidDeckIndex { .. } => "INVALID_DECK_INDEX",
            Self::DuplicateDeckIndex { .. } => "DUPLICATE_DECK_INDEX",
            Self::InvalidEnemyCount { .. } => "INVALID_ENEMY_COUNT",
            Self::InvalidEnergyColor { .. } => "INVALID_ENERGY_COLOR",
            Self::InvalidLoadoutSize { .. } => "INVALID_LOADOUT_SIZE",
            Self::InvalidRewardRange { .. } => "INVALID_REWARD_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_miss_is_an_integration_bug() {
        let err = CombatError::UnknownAbilityId {
            id: AbilityId([0xab; 32]),
        };
        assert!(err.severity().is_internal());
        assert_eq!(err.error_code(), "UNKNOWN_ABILITY_ID");
        assert!(err.to_string().starts_with("ability abab"));
    }

    #[test]
    fn bad_enemy_count_is_validation() {
        let err = CombatError::InvalidEnemyCount { count: 4 };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_internal());
    }
}
