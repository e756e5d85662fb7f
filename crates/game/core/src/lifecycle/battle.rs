use crate::config::GameConfig;
use crate::error::CombatError;
use crate::state::{
    AbilityId, BattleConfig, BattleId, BattleState, EnemyRoster, EnemyStats, Level, Loadout,
    PlayerId,
};

/// Builds a battle from a level's enemies and the player's seven-ability
/// loadout, returning its content id, config and starting state.
///
/// Identical inputs produce the identical id, so callers can use it to look
/// up a battle that is already running instead of starting a second one.
pub fn new_battle(
    level: Level,
    enemies: &[EnemyStats],
    player: PlayerId,
    loadout: &[AbilityId],
    game: &GameConfig,
) -> Result<(BattleId, BattleConfig, BattleState), CombatError> {
    let config = BattleConfig {
        level,
        enemies: EnemyRoster::new(enemies)?,
        player,
        loadout: Loadout::new(loadout)?,
    };
    let state = initial_state(&config, game);
    Ok((config.id(), config, state))
}

/// Full HP on both sides and the first three loadout slots in hand.
pub fn initial_state(config: &BattleConfig, game: &GameConfig) -> BattleState {
    let mut enemy_hp = [0; GameConfig::MAX_ENEMIES];
    for (slot, enemy) in config.enemies.enemies().iter().enumerate() {
        enemy_hp[slot] = enemy.hp;
    }

    BattleState {
        player_hp: game.player_max_hp,
        enemy_hp,
        deck_indices: [0, 1, 2],
    }
}
