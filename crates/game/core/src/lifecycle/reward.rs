use crate::env::{REWARD_ABILITY_DRAW_INDEX, RngOracle};
use crate::state::Ability;

/// Picks the ability granted for completing a quest.
///
/// One draw over the pool at the reward index of the final round's seed.
/// Returns `None` for an empty pool.
pub fn draw_reward_ability(pool: &[Ability], seed: &[u8], rng: &dyn RngOracle) -> Option<Ability> {
    let last = pool.len().checked_sub(1)?;
    let pick = rng.draw(seed, REWARD_ABILITY_DRAW_INDEX, 0, last as u64);
    pool.get(pick as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Sha256Rng;
    use crate::state::{Effect, Element};

    #[test]
    fn empty_pool_grants_nothing() {
        assert_eq!(draw_reward_ability(&[], b"seed", &Sha256Rng), None);
    }

    #[test]
    fn draw_is_reproducible_and_from_pool() {
        let pool: Vec<Ability> = (1..=5)
            .map(|amount| Ability::new(Some(Effect::attack(Element::Ice, amount))))
            .collect();

        let first = draw_reward_ability(&pool, b"seed", &Sha256Rng).unwrap();
        let second = draw_reward_ability(&pool, b"seed", &Sha256Rng).unwrap();

        assert_eq!(first, second);
        assert!(pool.contains(&first));
    }
}
