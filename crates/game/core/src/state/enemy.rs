use crate::combat::Effectiveness;
use crate::config::GameConfig;
use crate::error::CombatError;
use crate::state::Element;

/// Reward/unlock classification of an enemy. Never consulted by combat math.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum BossType {
    #[default]
    Normal,
    Miniboss,
    Boss,
}

/// Per-enemy combat profile, fixed for the lifetime of a battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EnemyStats {
    pub hp: u32,
    /// Damage dealt to the player each round while alive.
    pub attack: u32,
    /// Damage absorbed before HP loss, refreshed every round.
    pub block: u32,
    pub physical_def: Effectiveness,
    pub fire_def: Effectiveness,
    pub ice_def: Effectiveness,
    pub boss_type: BossType,
}

impl EnemyStats {
    /// Profile occupying unused roster slots. Every field is the zero value
    /// of its type (`Immune` and `Normal` are variant 0), so a filler slot
    /// encodes to all-zero bytes.
    pub const FILLER: Self = Self {
        hp: 0,
        attack: 0,
        block: 0,
        physical_def: Effectiveness::Immune,
        fire_def: Effectiveness::Immune,
        ice_def: Effectiveness::Immune,
        boss_type: BossType::Normal,
    };

    /// A regular enemy, neutral to every element.
    pub fn new(hp: u32, attack: u32, block: u32) -> Self {
        Self {
            hp,
            attack,
            block,
            physical_def: Effectiveness::Neutral,
            fire_def: Effectiveness::Neutral,
            ice_def: Effectiveness::Neutral,
            boss_type: BossType::Normal,
        }
    }

    pub fn with_defenses(
        mut self,
        physical: Effectiveness,
        fire: Effectiveness,
        ice: Effectiveness,
    ) -> Self {
        self.physical_def = physical;
        self.fire_def = fire;
        self.ice_def = ice;
        self
    }

    pub fn with_boss_type(mut self, boss_type: BossType) -> Self {
        self.boss_type = boss_type;
        self
    }

    /// Stored defense tier for the given attack element.
    pub const fn defense(&self, element: Element) -> Effectiveness {
        match element {
            Element::Physical => self.physical_def,
            Element::Fire => self.fire_def,
            Element::Ice => self.ice_def,
        }
    }
}

/// The enemies of one battle: up to three profiles, unused slots zero-filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EnemyRoster {
    stats: [EnemyStats; GameConfig::MAX_ENEMIES],
    count: u8,
}

impl EnemyRoster {
    /// Builds a roster from 1 to 3 enemy profiles.
    pub fn new(enemies: &[EnemyStats]) -> Result<Self, CombatError> {
        if enemies.is_empty() || enemies.len() > GameConfig::MAX_ENEMIES {
            return Err(CombatError::InvalidEnemyCount {
                count: enemies.len(),
            });
        }

        let mut stats = [EnemyStats::FILLER; GameConfig::MAX_ENEMIES];
        stats[..enemies.len()].copy_from_slice(enemies);

        Ok(Self {
            stats,
            count: enemies.len() as u8,
        })
    }

    /// Number of real enemies, re-validated since rosters can be deserialized.
    pub fn count(&self) -> Result<usize, CombatError> {
        let count = usize::from(self.count);
        if count == 0 || count > GameConfig::MAX_ENEMIES {
            return Err(CombatError::InvalidEnemyCount { count });
        }
        Ok(count)
    }

    /// All three slots, fillers included.
    pub const fn slots(&self) -> &[EnemyStats; GameConfig::MAX_ENEMIES] {
        &self.stats
    }

    /// The occupied slots only.
    pub fn enemies(&self) -> &[EnemyStats] {
        let count = usize::from(self.count).min(GameConfig::MAX_ENEMIES);
        &self.stats[..count]
    }

    pub fn has_boss(&self) -> bool {
        self.enemies()
            .iter()
            .any(|enemy| enemy.boss_type == BossType::Boss)
    }
}
