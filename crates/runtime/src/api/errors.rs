//! Unified error types surfaced by the runtime API.
//!
//! Wraps combat rule failures and the session's own bookkeeping checks so
//! clients can bubble them up with consistent context.
use game2_core::{
    AbilityId, BattleId, Biome, CombatError, ErrorSeverity, GameError, Level, PlayerId, QuestId,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("player {player} is not registered")]
    UnknownPlayer { player: PlayerId },

    #[error("player {player} is already registered")]
    PlayerAlreadyRegistered { player: PlayerId },

    #[error("battle {battle} does not exist or has already ended")]
    UnknownBattle { battle: BattleId },

    #[error("quest {quest} does not exist or has already been finalized")]
    UnknownQuest { quest: QuestId },

    #[error("level {biome} difficulty {difficulty} is not in the level table")]
    UnknownLevel { biome: Biome, difficulty: u32 },

    #[error("level {biome} difficulty {difficulty} has no boss roster")]
    NoBossRoster { biome: Biome, difficulty: u32 },

    #[error("player owns {owned} of ability {ability}, needs {required}")]
    AbilityNotOwned {
        ability: AbilityId,
        owned: u32,
        required: u32,
    },

    #[error("level {biome} difficulty {difficulty} is locked (unlocked up to {unlocked})")]
    LevelLocked {
        biome: Biome,
        difficulty: u32,
        unlocked: u32,
    },

    #[error("quest {quest} unlocks at height {unlock_height}, current height is {height}")]
    QuestNotReady {
        quest: QuestId,
        unlock_height: u64,
        height: u64,
    },

    #[error("insufficient gold: need {required}, have {available}")]
    InsufficientGold { required: u64, available: u64 },

    #[error("sacrifice is worth {offered}, upgrade needs at least {required}")]
    InvalidSacrifice { offered: u64, required: u64 },

    #[error(transparent)]
    Combat(#[from] CombatError),
}

impl RuntimeError {
    pub(crate) fn unknown_level(level: Level) -> Self {
        Self::UnknownLevel {
            biome: level.biome,
            difficulty: level.difficulty,
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Combat(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPlayer { .. } => "UNKNOWN_PLAYER",
            Self::PlayerAlreadyRegistered { .. } => "PLAYER_ALREADY_REGISTERED",
            Self::UnknownBattle { .. } => "UNKNOWN_BATTLE",
            Self::UnknownQuest { .. } => "UNKNOWN_QUEST",
            Self::UnknownLevel { .. } => "UNKNOWN_LEVEL",
            Self::NoBossRoster { .. } => "NO_BOSS_ROSTER",
            Self::AbilityNotOwned { .. } => "ABILITY_NOT_OWNED",
            Self::LevelLocked { .. } => "LEVEL_LOCKED",
            Self::QuestNotReady { .. } => "QUEST_NOT_READY",
            Self::InsufficientGold { .. } => "INSUFFICIENT_GOLD",
            Self::InvalidSacrifice { .. } => "INVALID_SACRIFICE",
            Self::Combat(err) => err.error_code(),
        }
    }
}
