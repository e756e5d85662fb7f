use std::collections::HashMap;

use game2_core::{BattleConfig, BattleId, BattleState, Quest, QuestId};

use crate::api::{Result, RuntimeError};

/// A battle in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleRecord {
    pub config: BattleConfig,
    pub state: BattleState,
    /// Rounds resolved so far; also the index of the next round's seed.
    pub round: u64,
    /// Quest this boss battle was finalized from, if any.
    pub quest: Option<QuestId>,
}

impl BattleRecord {
    pub fn new(config: BattleConfig, state: BattleState) -> Self {
        Self {
            config,
            state,
            round: 0,
            quest: None,
        }
    }
}

/// Running battles and pending quests.
///
/// Finished battles and finalized quests are removed, so a lookup miss
/// covers both "never existed" and "already over".
#[derive(Debug, Default)]
pub struct BattleBook {
    battles: HashMap<BattleId, BattleRecord>,
    quests: HashMap<QuestId, Quest>,
}

impl BattleBook {
    pub fn contains_battle(&self, id: &BattleId) -> bool {
        self.battles.contains_key(id)
    }

    pub fn insert_battle(&mut self, id: BattleId, record: BattleRecord) {
        self.battles.insert(id, record);
    }

    pub fn battle(&self, id: &BattleId) -> Result<&BattleRecord> {
        self.battles
            .get(id)
            .ok_or(RuntimeError::UnknownBattle { battle: *id })
    }

    pub fn battle_mut(&mut self, id: &BattleId) -> Result<&mut BattleRecord> {
        self.battles
            .get_mut(id)
            .ok_or(RuntimeError::UnknownBattle { battle: *id })
    }

    pub fn remove_battle(&mut self, id: &BattleId) -> Option<BattleRecord> {
        self.battles.remove(id)
    }

    pub fn battle_count(&self) -> usize {
        self.battles.len()
    }

    pub fn contains_quest(&self, id: &QuestId) -> bool {
        self.quests.contains_key(id)
    }

    pub fn insert_quest(&mut self, id: QuestId, quest: Quest) {
        self.quests.insert(id, quest);
    }

    pub fn quest(&self, id: &QuestId) -> Result<&Quest> {
        self.quests
            .get(id)
            .ok_or(RuntimeError::UnknownQuest { quest: *id })
    }

    pub fn remove_quest(&mut self, id: &QuestId) -> Option<Quest> {
        self.quests.remove(id)
    }
}
