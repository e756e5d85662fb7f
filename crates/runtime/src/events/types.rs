//! Event types for different topics.

use game2_core::{
    AbilityId, BattleId, BattleState, Biome, CombatEvent, Level, PlayerId, QuestId, RoundOutcome,
};
use serde::{Deserialize, Serialize};

/// One resolver sub-step, tagged with the battle and round it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatNotice {
    pub battle: BattleId,
    /// Zero-based round counter of the battle.
    pub round: u64,
    pub event: CombatEvent,
}

/// Account, battle and quest transitions applied by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    PlayerRegistered {
        player: PlayerId,
    },

    BattleStarted {
        battle: BattleId,
        player: PlayerId,
        level: Level,
    },

    /// A round finished and its state was committed.
    RoundResolved {
        battle: BattleId,
        round: u64,
        state: BattleState,
        outcome: RoundOutcome,
    },

    /// The battle reached an outcome and was removed.
    BattleEnded {
        battle: BattleId,
        player: PlayerId,
        outcome: RoundOutcome,
        /// Gold credited, boss bonus included.
        gold: u64,
    },

    LevelUnlocked {
        player: PlayerId,
        biome: Biome,
        difficulty: u32,
    },

    QuestStarted {
        quest: QuestId,
        player: PlayerId,
        level: Level,
        unlock_height: u64,
    },

    QuestFinalized {
        quest: QuestId,
        battle: BattleId,
    },

    AbilityGranted {
        player: PlayerId,
        ability: AbilityId,
    },

    AbilitySold {
        player: PlayerId,
        ability: AbilityId,
        gold: u64,
    },

    AbilityUpgraded {
        player: PlayerId,
        from: AbilityId,
        to: AbilityId,
        sacrificed: AbilityId,
        cost: u64,
    },
}
