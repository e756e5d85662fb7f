//! Forwards resolver sub-steps onto the bus.

use game2_core::{
    AbilityId, BattleId, CombatEvent, CombatSink, EffectSource, EnergyColor, GameConfig,
    combat::PlayerAttack,
};

use super::bus::{Event, EventBus};
use super::types::CombatNotice;

/// [`CombatSink`] publishing each event as a [`CombatNotice`].
pub struct BusSink<'a> {
    bus: &'a EventBus,
    battle: BattleId,
    round: u64,
}

impl<'a> BusSink<'a> {
    pub fn new(bus: &'a EventBus, battle: BattleId, round: u64) -> Self {
        Self { bus, battle, round }
    }

    fn emit(&self, event: CombatEvent) {
        self.bus.publish(Event::Combat(CombatNotice {
            battle: self.battle,
            round: self.round,
            event,
        }));
    }
}

impl CombatSink for BusSink<'_> {
    fn hand_drawn(&mut self, abilities: &[AbilityId; GameConfig::HAND_SIZE]) {
        self.emit(CombatEvent::HandDrawn {
            abilities: *abilities,
        });
    }

    fn enemy_blocks(&mut self, enemy: u8, amount: u32) {
        self.emit(CombatEvent::EnemyBlocks {
            enemy,
            target: enemy,
            amount,
        });
    }

    fn player_attacks(&mut self, attack: &PlayerAttack) {
        self.emit(CombatEvent::PlayerAttacks(*attack));
    }

    fn player_blocks(&mut self, slot: u8, source: EffectSource, amount: u32) {
        self.emit(CombatEvent::PlayerBlocks {
            slot,
            source,
            amount,
        });
    }

    fn energy_generated(&mut self, slot: u8, source: EffectSource, color: EnergyColor) {
        self.emit(CombatEvent::EnergyGenerated {
            slot,
            source,
            color,
        });
    }

    fn enemy_attacks(&mut self, enemy: u8, amount: u32) {
        self.emit(CombatEvent::EnemyAttacks { enemy, amount });
    }
}
