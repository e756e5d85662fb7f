//! Read-mostly collaborators of the session.
//!
//! Bundles the ability table, the level table and the RNG into an
//! [`OracleManager`] so the session can build a [`CombatEnv`] per round.
//! Level data and config are immutable; the ability table only grows, when
//! an upgrade mints a new ability.

use std::sync::Arc;

use game2_content::GameContent;
use game2_core::{
    Ability, AbilityId, AbilityOracle, AbilityRegistry, CombatEnv, GameConfig, LevelOracle,
    RngOracle, Sha256Rng,
};

pub struct OracleManager {
    pub(crate) abilities: AbilityRegistry,
    pub(crate) levels: Arc<dyn LevelOracle>,
    pub(crate) rng: Arc<dyn RngOracle>,
    pub(crate) config: GameConfig,
    reward_pool: Vec<Ability>,
    starters: Vec<(AbilityId, u32)>,
}

impl OracleManager {
    pub fn new(
        abilities: AbilityRegistry,
        levels: Arc<dyn LevelOracle>,
        rng: Arc<dyn RngOracle>,
        config: GameConfig,
    ) -> Self {
        Self {
            abilities,
            levels,
            rng,
            config,
            reward_pool: Vec::new(),
            starters: Vec::new(),
        }
    }

    /// Oracles over loaded content, drawing with the SHA-256 RNG.
    pub fn from_content(content: GameContent) -> Self {
        let mut oracles = Self::new(
            content.abilities.registry(),
            Arc::new(content.levels),
            Arc::new(Sha256Rng),
            content.config,
        );
        oracles.reward_pool = content.abilities.reward_pool();
        oracles.starters = content.abilities.starter_grants();
        oracles
    }

    pub fn with_reward_pool(mut self, pool: Vec<Ability>) -> Self {
        for ability in &pool {
            self.abilities.register(*ability);
        }
        self.reward_pool = pool;
        self
    }

    pub fn with_starters(mut self, starters: Vec<(AbilityId, u32)>) -> Self {
        self.starters = starters;
        self
    }

    pub fn combat_env(&self) -> CombatEnv<'_> {
        CombatEnv::new(&self.abilities, self.rng.as_ref(), &self.config)
    }

    pub fn ability(&self, id: &AbilityId) -> Option<&Ability> {
        self.abilities.ability(id)
    }

    pub fn register_ability(&mut self, ability: Ability) -> AbilityId {
        self.abilities.register(ability)
    }

    pub fn levels(&self) -> &dyn LevelOracle {
        self.levels.as_ref()
    }

    pub fn rng(&self) -> &dyn RngOracle {
        self.rng.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn reward_pool(&self) -> &[Ability] {
        &self.reward_pool
    }

    pub fn starters(&self) -> &[(AbilityId, u32)] {
        &self.starters
    }
}
