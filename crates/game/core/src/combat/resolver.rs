//! The combat round resolver.
//!
//! Mirrors the battle contract's round circuit step for step:
//!
//! 1. resolve `deck_indices` against the loadout into a 3-ability hand
//! 2. report enemy self-block for every living enemy with block
//! 3. draw one target per hand slot in `[0, enemy_count)`
//! 4. resolve base effects in slot order
//! 5. for each energy color in order, if charged, resolve every hand
//!    ability's bonus effect for that color
//! 6. total the attacks of living enemies
//! 7. apply player and enemy HP loss at once, block first
//! 8. decide the outcome, player defeat before victory
//!
//! Nothing is applied before step 7, so every event precedes the numbers it
//! describes. Deck rotation for the next round is left to the caller.

use arrayvec::ArrayVec;

use crate::combat::events::{CombatSink, EffectSource, PlayerAttack};
use crate::combat::{effectiveness, scale_damage};
use crate::config::GameConfig;
use crate::env::{AbilityOracle, GOLD_DRAW_INDEX, RngOracle};
use crate::error::CombatError;
use crate::state::{
    Ability, AbilityId, BattleConfig, BattleState, Effect, EnemyStats, EnergyColor, EnergyColors,
};

/// Read-only collaborators of a round.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    pub abilities: &'a dyn AbilityOracle,
    pub rng: &'a dyn RngOracle,
    /// Inclusive lower bound of the victory gold draw.
    pub gold_min: u64,
    /// Inclusive upper bound of the victory gold draw.
    pub gold_max: u64,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        abilities: &'a dyn AbilityOracle,
        rng: &'a dyn RngOracle,
        config: &GameConfig,
    ) -> Self {
        Self {
            abilities,
            rng,
            gold_min: config.victory_gold_min,
            gold_max: config.victory_gold_max,
        }
    }
}

/// Terminal status after a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RoundOutcome {
    Continuing,
    Victory { gold: u64 },
    Defeat,
}

impl RoundOutcome {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continuing)
    }
}

/// Intermediate totals of a round, before block was subtracted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RoundTotals {
    /// Target drawn for each hand slot.
    pub targets: [u8; GameConfig::HAND_SIZE],
    /// Scaled player damage per enemy slot.
    pub enemy_damage: [u64; GameConfig::MAX_ENEMIES],
    pub player_block: u64,
    /// Sum of living enemies' attacks.
    pub incoming_damage: u64,
    pub energy: EnergyColors,
}

/// Result of [`resolve_round`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RoundReport {
    pub state: BattleState,
    pub outcome: RoundOutcome,
    pub totals: RoundTotals,
}

#[derive(Clone, Copy, Debug)]
struct HandCard {
    id: AbilityId,
    ability: Ability,
}

/// Resolve one combat round.
///
/// Takes `state` by value and returns the successor, so a state can only be
/// in one resolution at a time. All validation happens before the first
/// event is emitted: a failing round emits nothing.
///
/// # Errors
///
/// - [`CombatError::InvalidEnemyCount`] if the roster count is outside 1..=3
/// - [`CombatError::InvalidDeckIndex`] / [`CombatError::DuplicateDeckIndex`]
///   if the hand does not select three distinct loadout slots
/// - [`CombatError::UnknownAbilityId`] if a hand ability is not in the table
/// - [`CombatError::InvalidEnergyColor`] if a hand ability generates an
///   unknown color
/// - [`CombatError::InvalidRewardRange`] if the gold range is empty
pub fn resolve_round<S: CombatSink + ?Sized>(
    config: &BattleConfig,
    state: BattleState,
    env: &CombatEnv<'_>,
    seed: &[u8],
    sink: &mut S,
) -> Result<RoundReport, CombatError> {
    let enemy_count = config.enemies.count()?;
    if env.gold_min > env.gold_max {
        return Err(CombatError::InvalidRewardRange {
            min: env.gold_min,
            max: env.gold_max,
        });
    }
    let hand = draw_hand(config, &state, env.abilities)?;

    // 1. Hand
    let ids: [AbilityId; GameConfig::HAND_SIZE] = core::array::from_fn(|slot| hand[slot].id);
    sink.hand_drawn(&ids);

    let roster = config.enemies.slots();
    let alive: [bool; GameConfig::MAX_ENEMIES] =
        core::array::from_fn(|enemy| enemy < enemy_count && state.enemy_hp[enemy] > 0);

    // 2. Enemy self-block (display only, the value is re-read at step 7)
    for enemy in 0..enemy_count {
        if alive[enemy] && roster[enemy].block != 0 {
            sink.enemy_blocks(enemy as u8, roster[enemy].block);
        }
    }

    // 3. Targets
    let last_enemy = (enemy_count - 1) as u64;
    let targets: [u8; GameConfig::HAND_SIZE] =
        core::array::from_fn(|slot| env.rng.draw(seed, slot as u64, 0, last_enemy) as u8);

    let mut ledger = RoundLedger {
        roster,
        alive,
        targets,
        enemy_damage: [0; GameConfig::MAX_ENEMIES],
        player_block: 0,
        energy: EnergyColors::empty(),
    };

    // 4. Base effects
    for (slot, card) in hand.iter().enumerate() {
        if let Some(effect) = &card.ability.effect {
            ledger.resolve(slot, EffectSource::Base, effect, sink)?;
        }
    }

    // 5. Energy effects: colors outer, hand slots inner
    for color in EnergyColor::ALL {
        if !ledger.energy.charged(color) {
            continue;
        }
        for (slot, card) in hand.iter().enumerate() {
            if let Some(effect) = &card.ability.on_energy[color.index()] {
                ledger.resolve(slot, EffectSource::Energy(color), effect, sink)?;
            }
        }
    }

    // 6. Enemy attacks
    let mut incoming_damage: u64 = 0;
    for enemy in 0..enemy_count {
        if !alive[enemy] {
            continue;
        }
        let attack = roster[enemy].attack;
        if attack != 0 {
            sink.enemy_attacks(enemy as u8, attack);
        }
        incoming_damage = incoming_damage.saturating_add(u64::from(attack));
    }

    // 7. Apply
    let mut next = state;
    next.player_hp = apply_damage(
        state.player_hp,
        incoming_damage.saturating_sub(ledger.player_block),
    );
    for enemy in 0..enemy_count {
        if !alive[enemy] {
            continue;
        }
        let net = ledger.enemy_damage[enemy].saturating_sub(u64::from(roster[enemy].block));
        next.enemy_hp[enemy] = apply_damage(state.enemy_hp[enemy], net);
    }

    // 8. Outcome
    let outcome = if !next.player_alive() {
        RoundOutcome::Defeat
    } else if next.enemy_hp[..enemy_count].iter().all(|hp| *hp == 0) {
        RoundOutcome::Victory {
            gold: env
                .rng
                .draw(seed, GOLD_DRAW_INDEX, env.gold_min, env.gold_max),
        }
    } else {
        RoundOutcome::Continuing
    };

    let totals = RoundTotals {
        targets,
        enemy_damage: ledger.enemy_damage,
        player_block: ledger.player_block,
        incoming_damage,
        energy: ledger.energy,
    };

    tracing::debug!(
        player_hp = next.player_hp,
        enemy_hp = ?next.enemy_hp,
        player_block = totals.player_block,
        incoming = totals.incoming_damage,
        outcome = ?outcome,
        "round resolved"
    );

    Ok(RoundReport {
        state: next,
        outcome,
        totals,
    })
}

/// Resolves the deck indices into the three abilities in hand.
fn draw_hand(
    config: &BattleConfig,
    state: &BattleState,
    abilities: &dyn AbilityOracle,
) -> Result<ArrayVec<HandCard, { GameConfig::HAND_SIZE }>, CombatError> {
    let mut hand = ArrayVec::new();

    for (slot, &index) in state.deck_indices.iter().enumerate() {
        if state.deck_indices[..slot].contains(&index) {
            return Err(CombatError::DuplicateDeckIndex { index });
        }
        let id = *config
            .loadout
            .get(index)
            .ok_or(CombatError::InvalidDeckIndex {
                slot,
                index,
                loadout_size: GameConfig::LOADOUT_SIZE,
            })?;
        let ability = *abilities
            .ability(&id)
            .ok_or(CombatError::UnknownAbilityId { id })?;
        ability.validate()?;

        hand.push(HandCard { id, ability });
    }

    Ok(hand)
}

/// HP after taking `damage`, floored at zero.
fn apply_damage(hp: u32, damage: u64) -> u32 {
    if damage >= u64::from(hp) {
        0
    } else {
        // damage < hp <= u32::MAX
        hp - damage as u32
    }
}

/// Per-round accumulators shared by the base and energy phases.
struct RoundLedger<'a> {
    roster: &'a [EnemyStats; GameConfig::MAX_ENEMIES],
    alive: [bool; GameConfig::MAX_ENEMIES],
    targets: [u8; GameConfig::HAND_SIZE],
    enemy_damage: [u64; GameConfig::MAX_ENEMIES],
    player_block: u64,
    energy: EnergyColors,
}

impl RoundLedger<'_> {
    fn resolve<S: CombatSink + ?Sized>(
        &mut self,
        slot: usize,
        source: EffectSource,
        effect: &Effect,
        sink: &mut S,
    ) -> Result<(), CombatError> {
        if let Some(element) = effect.effect_type.element() {
            let target = usize::from(self.targets[slot]);
            for enemy in 0..GameConfig::MAX_ENEMIES {
                if !self.alive[enemy] || !(effect.is_aoe || enemy == target) {
                    continue;
                }
                let tier = effectiveness(element, &self.roster[enemy]);
                let damage = scale_damage(effect.amount, tier);
                tracing::trace!(slot, ?source, enemy, ?tier, damage, "player attack");

                sink.player_attacks(&PlayerAttack {
                    slot: slot as u8,
                    source,
                    enemy: enemy as u8,
                    effect_type: effect.effect_type,
                    effectiveness: tier,
                    damage,
                });
                self.enemy_damage[enemy] = self.enemy_damage[enemy].saturating_add(damage);
            }
        } else if let Some(color) = effect.energy_color()? {
            tracing::trace!(slot, ?source, %color, "energy generated");
            sink.energy_generated(slot as u8, source, color);
            self.energy |= color.flag();
        } else {
            tracing::trace!(slot, ?source, amount = effect.amount, "player block");
            sink.player_blocks(slot as u8, source, effect.amount);
            self.player_block = self.player_block.saturating_add(u64::from(effect.amount));
        }
        Ok(())
    }
}
