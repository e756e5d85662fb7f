use std::collections::HashMap;

use game2_core::{AbilityId, Biome, GameConfig, Level, PlayerId};

use crate::api::{Result, RuntimeError};

/// Difficulty every biome is open at for a fresh account.
pub const FIRST_DIFFICULTY: u32 = 1;

/// A player's wallet, ability inventory and level progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerAccount {
    pub gold: u64,
    owned: HashMap<AbilityId, u32>,
    unlocked: HashMap<Biome, u32>,
}

impl PlayerAccount {
    pub fn new(gold: u64) -> Self {
        Self {
            gold,
            ..Self::default()
        }
    }

    /// Copies of `ability` this account holds.
    pub fn owned(&self, ability: &AbilityId) -> u32 {
        self.owned.get(ability).copied().unwrap_or(0)
    }

    pub fn abilities(&self) -> impl Iterator<Item = (&AbilityId, u32)> {
        self.owned.iter().map(|(id, count)| (id, *count))
    }

    pub fn grant(&mut self, ability: AbilityId, copies: u32) {
        let count = self.owned.entry(ability).or_insert(0);
        *count = count.saturating_add(copies);
    }

    /// Removes one copy of `ability`.
    pub fn take(&mut self, ability: &AbilityId) -> Result<()> {
        match self.owned(ability) {
            0 => Err(RuntimeError::AbilityNotOwned {
                ability: *ability,
                owned: 0,
                required: 1,
            }),
            1 => {
                self.owned.remove(ability);
                Ok(())
            }
            count => {
                self.owned.insert(*ability, count - 1);
                Ok(())
            }
        }
    }

    /// Checks the account holds enough copies for every slot of `loadout`.
    ///
    /// A loadout may repeat an ability only as many times as it is owned.
    pub fn check_loadout(&self, loadout: &[AbilityId]) -> Result<()> {
        if loadout.len() != GameConfig::LOADOUT_SIZE {
            return Err(game2_core::CombatError::InvalidLoadoutSize {
                len: loadout.len(),
                expected: GameConfig::LOADOUT_SIZE,
            }
            .into());
        }

        let mut needed: HashMap<AbilityId, u32> = HashMap::new();
        for id in loadout {
            *needed.entry(*id).or_insert(0) += 1;
        }
        for (ability, required) in needed {
            let owned = self.owned(&ability);
            if owned < required {
                return Err(RuntimeError::AbilityNotOwned {
                    ability,
                    owned,
                    required,
                });
            }
        }
        Ok(())
    }

    /// Highest difficulty open in `biome`.
    pub fn unlocked(&self, biome: Biome) -> u32 {
        self.unlocked
            .get(&biome)
            .copied()
            .unwrap_or(FIRST_DIFFICULTY)
    }

    pub fn check_unlocked(&self, level: &Level) -> Result<()> {
        let unlocked = self.unlocked(level.biome);
        if level.difficulty > unlocked {
            return Err(RuntimeError::LevelLocked {
                biome: level.biome,
                difficulty: level.difficulty,
                unlocked,
            });
        }
        Ok(())
    }

    /// Opens `difficulty` in `biome`. Returns false if it was already open.
    pub fn unlock(&mut self, biome: Biome, difficulty: u32) -> bool {
        if difficulty <= self.unlocked(biome) {
            return false;
        }
        self.unlocked.insert(biome, difficulty);
        true
    }

    pub fn credit(&mut self, gold: u64) {
        self.gold = self.gold.saturating_add(gold);
    }

    pub fn debit(&mut self, gold: u64) -> Result<()> {
        if gold > self.gold {
            return Err(RuntimeError::InsufficientGold {
                required: gold,
                available: self.gold,
            });
        }
        self.gold -= gold;
        Ok(())
    }
}

/// Registered accounts keyed by player.
#[derive(Debug, Default)]
pub struct AccountBook {
    accounts: HashMap<PlayerId, PlayerAccount>,
}

impl AccountBook {
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.accounts.contains_key(player)
    }

    pub fn insert(&mut self, player: PlayerId, account: PlayerAccount) {
        self.accounts.insert(player, account);
    }

    pub fn get(&self, player: &PlayerId) -> Result<&PlayerAccount> {
        self.accounts
            .get(player)
            .ok_or(RuntimeError::UnknownPlayer { player: *player })
    }

    pub fn get_mut(&mut self, player: &PlayerId) -> Result<&mut PlayerAccount> {
        self.accounts
            .get_mut(player)
            .ok_or(RuntimeError::UnknownPlayer { player: *player })
    }
}
