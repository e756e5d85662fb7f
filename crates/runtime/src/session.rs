//! The game session: an in-process stand-in for the battle contract.
//!
//! [`GameSession`] owns player accounts, running battles and pending quests,
//! and applies every state transition the chain would: registering players,
//! starting battles, resolving rounds (with gold, unlock and reward
//! settlement), deferring quests into boss battles, and the ability shop.
//!
//! Each round is resolved by [`game2_core::resolve_round`] with a seed
//! derived from the battle id and its round counter, so replaying a battle
//! from the same inputs reproduces it event for event. Sub-steps go to
//! [`Topic::Combat`]; the transitions themselves go to [`Topic::Lifecycle`].

use game2_content::GameContent;
use game2_core::{
    AbilityId, BattleConfig, BattleId, GameConfig, Level, PlayerId, Quest, QuestId,
    RoundOutcome, RoundReport, ability_value, compute_round_seed, draw_reward_ability,
    new_battle, resolve_round, rotate_deck, sell_price, upgrade_ability, upgrade_cost,
};
use tokio::sync::broadcast;

use crate::api::{Result, RuntimeError};
use crate::events::{BusSink, Event, EventBus, LifecycleEvent, Topic};
use crate::oracle::OracleManager;
use crate::repository::{AccountBook, BattleBook, BattleRecord, PlayerAccount};

pub struct GameSession {
    oracles: OracleManager,
    accounts: AccountBook,
    books: BattleBook,
    bus: EventBus,
}

impl GameSession {
    pub fn new(oracles: OracleManager) -> Self {
        Self::with_bus(oracles, EventBus::new())
    }

    pub fn with_bus(oracles: OracleManager, bus: EventBus) -> Self {
        Self {
            oracles,
            accounts: AccountBook::default(),
            books: BattleBook::default(),
            bus,
        }
    }

    pub fn from_content(content: GameContent) -> Self {
        Self::new(OracleManager::from_content(content))
    }

    // ===== queries =====

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn config(&self) -> &GameConfig {
        self.oracles.config()
    }

    pub fn account(&self, player: &PlayerId) -> Result<&PlayerAccount> {
        self.accounts.get(player)
    }

    pub fn battle(&self, battle: &BattleId) -> Result<&BattleRecord> {
        self.books.battle(battle)
    }

    pub fn quest(&self, quest: &QuestId) -> Result<&Quest> {
        self.books.quest(quest)
    }

    pub fn running_battles(&self) -> usize {
        self.books.battle_count()
    }

    // ===== accounts =====

    /// Opens an account holding the starter abilities and starting gold.
    pub fn register_player(&mut self, player: PlayerId) -> Result<()> {
        if self.accounts.contains(&player) {
            return Err(RuntimeError::PlayerAlreadyRegistered { player });
        }

        let mut account = PlayerAccount::new(self.oracles.config.starting_gold);
        for (ability, copies) in self.oracles.starters() {
            account.grant(*ability, *copies);
        }
        self.accounts.insert(player, account);

        tracing::info!(%player, "player registered");
        self.publish(LifecycleEvent::PlayerRegistered { player });
        Ok(())
    }

    // ===== battles =====

    /// Starts a battle on `level` with a seven-ability loadout.
    ///
    /// The loadout must be backed by owned copies and the level unlocked.
    /// Starting an identical battle while it is still running returns the
    /// running battle's id instead of resetting it.
    pub fn start_battle(
        &mut self,
        player: PlayerId,
        loadout: &[AbilityId],
        level: Level,
    ) -> Result<BattleId> {
        let account = self.accounts.get(&player)?;
        account.check_loadout(loadout)?;
        account.check_unlocked(&level)?;

        let enemies = self
            .oracles
            .levels()
            .enemies(&level)
            .ok_or(RuntimeError::unknown_level(level))?;
        let (id, config, state) = new_battle(level, enemies, player, loadout, &self.oracles.config)?;

        if self.books.contains_battle(&id) {
            tracing::debug!(battle = %id, "battle already running");
            return Ok(id);
        }
        self.books.insert_battle(id, BattleRecord::new(config, state));

        tracing::info!(
            battle = %id,
            %player,
            biome = %level.biome,
            difficulty = level.difficulty,
            "battle started"
        );
        self.publish(LifecycleEvent::BattleStarted {
            battle: id,
            player,
            level,
        });
        Ok(id)
    }

    /// Resolves the next round of `battle` and applies its outcome.
    ///
    /// On `Continuing` the new state is stored with the hand rotated for the
    /// next round. A terminal outcome removes the battle; victory credits the
    /// drawn gold (plus the boss bonus), unlocks the next difficulty after a
    /// boss, and grants a reward ability if the battle came from a quest.
    pub fn combat_round(&mut self, battle: BattleId) -> Result<RoundReport> {
        let record = self.books.battle(&battle)?;
        let round = record.round;
        let config = record.config;
        let quest = record.quest;
        let seed = compute_round_seed(&battle, round);

        let mut sink = BusSink::new(&self.bus, battle, round);
        let report = resolve_round(
            &config,
            record.state,
            &self.oracles.combat_env(),
            &seed,
            &mut sink,
        )?;

        tracing::debug!(
            battle = %battle,
            round,
            player_hp = report.state.player_hp,
            enemy_hp = ?report.state.enemy_hp,
            outcome = ?report.outcome,
            "round committed"
        );
        self.publish(LifecycleEvent::RoundResolved {
            battle,
            round,
            state: report.state,
            outcome: report.outcome,
        });

        match report.outcome {
            RoundOutcome::Continuing => {
                let offsets = self.oracles.config.rotation_offsets;
                let record = self.books.battle_mut(&battle)?;
                record.state = report.state;
                record.state.deck_indices = rotate_deck(
                    report.state.deck_indices,
                    offsets,
                    GameConfig::LOADOUT_SIZE as u8,
                );
                record.round += 1;
            }
            RoundOutcome::Victory { gold } => {
                self.books.remove_battle(&battle);
                self.settle_victory(battle, &config, quest, gold, &seed)?;
            }
            RoundOutcome::Defeat => {
                self.books.remove_battle(&battle);
                tracing::info!(battle = %battle, player = %config.player, round, "battle lost");
                self.publish(LifecycleEvent::BattleEnded {
                    battle,
                    player: config.player,
                    outcome: report.outcome,
                    gold: 0,
                });
            }
        }

        Ok(report)
    }

    /// Resolves rounds until the battle ends or `max_rounds` have run.
    ///
    /// Returns the last round's report.
    pub fn fast_forward(&mut self, battle: BattleId, max_rounds: u64) -> Result<Option<RoundReport>> {
        let mut last = None;
        for _ in 0..max_rounds {
            let report = self.combat_round(battle)?;
            last = Some(report);
            if report.outcome.is_terminal() {
                break;
            }
        }
        Ok(last)
    }

    fn settle_victory(
        &mut self,
        battle: BattleId,
        config: &BattleConfig,
        quest: Option<QuestId>,
        gold: u64,
        seed: &[u8],
    ) -> Result<()> {
        let player = config.player;
        let level = config.level;
        let boss = config.enemies.has_boss();

        let total = if boss {
            gold.saturating_add(self.oracles.config.boss_gold_bonus)
        } else {
            gold
        };
        let next = level.difficulty.saturating_add(1);
        let opens_next = boss
            && self
                .oracles
                .levels()
                .max_difficulty(level.biome)
                .is_some_and(|max| next <= max);
        let reward = match quest {
            Some(_) => draw_reward_ability(self.oracles.reward_pool(), seed, self.oracles.rng()),
            None => None,
        };
        let reward = reward.map(|ability| self.oracles.register_ability(ability));

        let account = self.accounts.get_mut(&player)?;
        account.credit(total);
        let unlocked = opens_next && account.unlock(level.biome, next);
        if let Some(ability) = reward {
            account.grant(ability, 1);
        }

        tracing::info!(battle = %battle, %player, gold = total, boss, "battle won");
        self.publish(LifecycleEvent::BattleEnded {
            battle,
            player,
            outcome: RoundOutcome::Victory { gold },
            gold: total,
        });
        if unlocked {
            tracing::info!(%player, biome = %level.biome, difficulty = next, "level unlocked");
            self.publish(LifecycleEvent::LevelUnlocked {
                player,
                biome: level.biome,
                difficulty: next,
            });
        }
        if let Some(ability) = reward {
            tracing::info!(%player, ability = %ability, "quest reward granted");
            self.publish(LifecycleEvent::AbilityGranted { player, ability });
        }
        Ok(())
    }

    // ===== quests =====

    /// Records a quest that can be turned into the level's boss battle once
    /// `quest_duration` blocks have passed since `height`.
    pub fn start_quest(
        &mut self,
        player: PlayerId,
        loadout: &[AbilityId],
        level: Level,
        height: u64,
    ) -> Result<QuestId> {
        let account = self.accounts.get(&player)?;
        account.check_loadout(loadout)?;
        account.check_unlocked(&level)?;

        let levels = self.oracles.levels();
        if levels.enemies(&level).is_none() {
            return Err(RuntimeError::unknown_level(level));
        }
        if levels.boss(&level).is_none() {
            return Err(RuntimeError::NoBossRoster {
                biome: level.biome,
                difficulty: level.difficulty,
            });
        }

        let quest = Quest::new(level, player, loadout, height, &self.oracles.config)?;
        let id = quest.id();
        if self.books.contains_quest(&id) {
            return Ok(id);
        }
        self.books.insert_quest(id, quest);

        tracing::info!(
            quest = %id,
            %player,
            unlock_height = quest.unlock_height,
            "quest started"
        );
        self.publish(LifecycleEvent::QuestStarted {
            quest: id,
            player,
            level,
            unlock_height: quest.unlock_height,
        });
        Ok(id)
    }

    pub fn is_quest_ready(&self, quest: &QuestId, height: u64) -> Result<bool> {
        Ok(self.books.quest(quest)?.is_ready(height))
    }

    /// Turns a ready quest into its boss battle and returns the battle id.
    ///
    /// The quest is consumed. Ownership of the loadout is checked again since
    /// abilities may have been sold while the quest was pending.
    pub fn finalize_quest(&mut self, quest_id: QuestId, height: u64) -> Result<BattleId> {
        let quest = *self.books.quest(&quest_id)?;
        if !quest.is_ready(height) {
            return Err(RuntimeError::QuestNotReady {
                quest: quest_id,
                unlock_height: quest.unlock_height,
                height,
            });
        }

        let loadout = quest.loadout.abilities;
        self.accounts.get(&quest.player)?.check_loadout(&loadout)?;
        let boss = self
            .oracles
            .levels()
            .boss(&quest.level)
            .ok_or(RuntimeError::NoBossRoster {
                biome: quest.level.biome,
                difficulty: quest.level.difficulty,
            })?;
        let (id, config, state) =
            new_battle(quest.level, boss, quest.player, &loadout, &self.oracles.config)?;

        self.books.remove_quest(&quest_id);
        if self.books.contains_battle(&id) {
            tracing::debug!(battle = %id, quest = %quest_id, "boss battle already running");
        } else {
            self.books.insert_battle(
                id,
                BattleRecord {
                    quest: Some(quest_id),
                    ..BattleRecord::new(config, state)
                },
            );
        }

        tracing::info!(quest = %quest_id, battle = %id, "quest finalized");
        self.publish(LifecycleEvent::QuestFinalized {
            quest: quest_id,
            battle: id,
        });
        Ok(id)
    }

    // ===== shop =====

    /// Sells one copy of `ability` for its value in gold.
    pub fn sell_ability(&mut self, player: PlayerId, ability: AbilityId) -> Result<u64> {
        let price = sell_price(self.known_ability(&ability)?);

        let account = self.accounts.get_mut(&player)?;
        account.take(&ability)?;
        account.credit(price);

        tracing::info!(%player, ability = %ability, gold = price, "ability sold");
        self.publish(LifecycleEvent::AbilitySold {
            player,
            ability,
            gold: price,
        });
        Ok(price)
    }

    /// Upgrades one copy of `target`, consuming one copy of `sacrifice`.
    ///
    /// The sacrifice must be worth at least as much as the target, and the
    /// player pays the target's upgrade cost. Nothing changes unless every
    /// check passes. Returns the id of the upgraded ability.
    pub fn upgrade_ability(
        &mut self,
        player: PlayerId,
        target: AbilityId,
        sacrifice: AbilityId,
    ) -> Result<AbilityId> {
        let base = *self.known_ability(&target)?;
        let offered = ability_value(self.known_ability(&sacrifice)?);
        let required = ability_value(&base);
        if offered < required {
            return Err(RuntimeError::InvalidSacrifice { offered, required });
        }
        let cost = upgrade_cost(&base, &self.oracles.config);

        let account = self.accounts.get(&player)?;
        let needed = if target == sacrifice { 2 } else { 1 };
        for (ability, copies) in [(target, needed), (sacrifice, 1)] {
            let owned = account.owned(&ability);
            if owned < copies {
                return Err(RuntimeError::AbilityNotOwned {
                    ability,
                    owned,
                    required: copies,
                });
            }
        }
        if account.gold < cost {
            return Err(RuntimeError::InsufficientGold {
                required: cost,
                available: account.gold,
            });
        }

        let upgraded = self.oracles.register_ability(upgrade_ability(&base));
        let account = self.accounts.get_mut(&player)?;
        account.debit(cost)?;
        account.take(&target)?;
        account.take(&sacrifice)?;
        account.grant(upgraded, 1);

        tracing::info!(%player, from = %target, to = %upgraded, cost, "ability upgraded");
        self.publish(LifecycleEvent::AbilityUpgraded {
            player,
            from: target,
            to: upgraded,
            sacrificed: sacrifice,
            cost,
        });
        Ok(upgraded)
    }

    fn known_ability(&self, id: &AbilityId) -> Result<&game2_core::Ability> {
        self.oracles
            .ability(id)
            .ok_or(game2_core::CombatError::UnknownAbilityId { id: *id }.into())
    }

    fn publish(&self, event: LifecycleEvent) {
        self.bus.publish(Event::Lifecycle(event));
    }
}
