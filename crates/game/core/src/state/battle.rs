use crate::config::GameConfig;
use crate::error::CombatError;
use crate::identity::ContentId;
use crate::state::{AbilityId, BattleId, EnemyRoster, PlayerId};

/// Biome a level belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Biome {
    Grasslands = 0,
    Desert = 1,
    Tundra = 2,
    Cave = 3,
}

/// A biome plus difficulty, selecting the enemies a battle is fought against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Level {
    pub biome: Biome,
    pub difficulty: u32,
}

impl Level {
    pub const fn new(biome: Biome, difficulty: u32) -> Self {
        Self { biome, difficulty }
    }
}

/// The player's ordered choice of exactly seven abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Loadout {
    pub abilities: [AbilityId; GameConfig::LOADOUT_SIZE],
}

impl Loadout {
    pub fn new(abilities: &[AbilityId]) -> Result<Self, CombatError> {
        let abilities: [AbilityId; GameConfig::LOADOUT_SIZE] = abilities
            .try_into()
            .map_err(|_| CombatError::InvalidLoadoutSize {
                len: abilities.len(),
                expected: GameConfig::LOADOUT_SIZE,
            })?;
        Ok(Self { abilities })
    }

    /// Ability in the given loadout slot, checked against the loadout bounds.
    pub fn get(&self, index: u8) -> Option<&AbilityId> {
        self.abilities.get(usize::from(index))
    }
}

/// Immutable descriptor of one battle instance.
///
/// Its content hash is the battle's primary key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BattleConfig {
    pub level: Level,
    pub enemies: EnemyRoster,
    pub player: PlayerId,
    pub loadout: Loadout,
}

impl BattleConfig {
    pub fn id(&self) -> BattleId {
        BattleId(self.content_id())
    }
}

impl ContentId for BattleConfig {}

/// Mutable round-by-round combat state.
///
/// Block is round-local: it is accumulated and consumed inside a single
/// round, so no block trackers survive into the persisted state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BattleState {
    pub player_hp: u32,
    /// Mirrors the roster; filler slots stay at 0.
    pub enemy_hp: [u32; GameConfig::MAX_ENEMIES],
    /// Loadout slots currently in hand.
    pub deck_indices: [u8; GameConfig::HAND_SIZE],
}

impl BattleState {
    /// A round ending at zero HP is a defeat, whatever happened to the enemies.
    pub fn player_alive(&self) -> bool {
        self.player_hp > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loadout_requires_exactly_seven() {
        let six = [AbilityId::default(); 6];
        assert_eq!(
            Loadout::new(&six),
            Err(CombatError::InvalidLoadoutSize {
                len: 6,
                expected: 7
            })
        );
        let seven = [AbilityId::default(); 7];
        let loadout = Loadout::new(&seven).unwrap();
        assert!(loadout.get(6).is_some());
        assert!(loadout.get(7).is_none());
    }

    #[test]
    fn player_alive_until_hp_hits_zero() {
        let mut state = BattleState {
            player_hp: 1,
            enemy_hp: [0, 3, 0],
            deck_indices: [0, 1, 2],
        };
        assert!(state.player_alive());
        state.player_hp = 0;
        assert!(!state.player_alive());
    }
}
