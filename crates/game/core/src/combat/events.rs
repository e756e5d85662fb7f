//! Combat events emitted while a round resolves.
//!
//! The resolver reports every sub-step to a [`CombatSink`] before its numeric
//! effect is applied, in a fixed order for a given input. A UI can animate
//! each event as it arrives, a test harness can record them, and a
//! fast-forward caller can pass [`NullSink`] and ignore them entirely.

use crate::combat::Effectiveness;
use crate::config::GameConfig;
use crate::state::{AbilityId, EffectType, EnergyColor};

/// Which part of an ability produced an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EffectSource {
    /// The ability's base effect.
    Base,
    /// The ability's bonus effect for a charged energy color.
    Energy(EnergyColor),
}

/// A player attack landing on one enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PlayerAttack {
    /// Hand slot of the ability.
    pub slot: u8,
    pub source: EffectSource,
    pub enemy: u8,
    pub effect_type: EffectType,
    pub effectiveness: Effectiveness,
    /// Damage after effectiveness scaling, before enemy block.
    pub damage: u64,
}

/// Discrete round sub-step, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CombatEvent {
    HandDrawn {
        abilities: [AbilityId; GameConfig::HAND_SIZE],
    },
    EnemyBlocks {
        enemy: u8,
        /// Enemies only ever block for themselves.
        target: u8,
        amount: u32,
    },
    PlayerAttacks(PlayerAttack),
    PlayerBlocks {
        slot: u8,
        source: EffectSource,
        amount: u32,
    },
    EnergyGenerated {
        slot: u8,
        source: EffectSource,
        color: EnergyColor,
    },
    EnemyAttacks {
        enemy: u8,
        amount: u32,
    },
}

/// Receives round sub-steps, one method per event kind.
///
/// All methods default to no-ops so sinks only override what they render.
pub trait CombatSink {
    fn hand_drawn(&mut self, _abilities: &[AbilityId; GameConfig::HAND_SIZE]) {}

    fn enemy_blocks(&mut self, _enemy: u8, _amount: u32) {}

    fn player_attacks(&mut self, _attack: &PlayerAttack) {}

    fn player_blocks(&mut self, _slot: u8, _source: EffectSource, _amount: u32) {}

    fn energy_generated(&mut self, _slot: u8, _source: EffectSource, _color: EnergyColor) {}

    fn enemy_attacks(&mut self, _enemy: u8, _amount: u32) {}
}

/// Sink that discards everything, for fast-forwarding.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl CombatSink for NullSink {}

/// Records events in emission order.
impl CombatSink for Vec<CombatEvent> {
    fn hand_drawn(&mut self, abilities: &[AbilityId; GameConfig::HAND_SIZE]) {
        self.push(CombatEvent::HandDrawn {
            abilities: *abilities,
        });
    }

    fn enemy_blocks(&mut self, enemy: u8, amount: u32) {
        self.push(CombatEvent::EnemyBlocks {
            enemy,
            target: enemy,
            amount,
        });
    }

    fn player_attacks(&mut self, attack: &PlayerAttack) {
        self.push(CombatEvent::PlayerAttacks(*attack));
    }

    fn player_blocks(&mut self, slot: u8, source: EffectSource, amount: u32) {
        self.push(CombatEvent::PlayerBlocks {
            slot,
            source,
            amount,
        });
    }

    fn energy_generated(&mut self, slot: u8, source: EffectSource, color: EnergyColor) {
        self.push(CombatEvent::EnergyGenerated {
            slot,
            source,
            color,
        });
    }

    fn enemy_attacks(&mut self, enemy: u8, amount: u32) {
        self.push(CombatEvent::EnemyAttacks { enemy, amount });
    }
}

impl CombatEvent {
    /// Replays this event into another sink.
    pub fn dispatch<S: CombatSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::HandDrawn { abilities } => sink.hand_drawn(abilities),
            Self::EnemyBlocks { enemy, amount, .. } => sink.enemy_blocks(*enemy, *amount),
            Self::PlayerAttacks(attack) => sink.player_attacks(attack),
            Self::PlayerBlocks {
                slot,
                source,
                amount,
            } => sink.player_blocks(*slot, *source, *amount),
            Self::EnergyGenerated {
                slot,
                source,
                color,
            } => sink.energy_generated(*slot, *source, *color),
            Self::EnemyAttacks { enemy, amount } => sink.enemy_attacks(*enemy, *amount),
        }
    }
}
