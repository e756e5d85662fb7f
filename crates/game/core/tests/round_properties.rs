//! Round-level properties checked through the public API.
//!
//! Each test plays whole rounds (or whole battles) against the real
//! SHA-256 RNG, or a forced-target RNG where a specific draw matters.

use game2_core::{
    Ability, AbilityId, AbilityRegistry, BattleConfig, BattleState, Biome, CombatEnv,
    CombatEvent, Effect, Element, EnemyStats, EnergyColor, GameConfig, Level, NullSink, PlayerId,
    RngOracle, RoundOutcome, Sha256Rng, compute_round_seed, new_battle, resolve_round,
    rotate_deck,
};

/// Every target draw lands on `target`; gold draws use the real hash.
struct ForcedTarget {
    target: u64,
}

impl RngOracle for ForcedTarget {
    fn hash(&self, seed: &[u8], index: u64) -> [u8; 32] {
        Sha256Rng.hash(seed, index)
    }

    fn draw(&self, seed: &[u8], index: u64, min: u64, max: u64) -> u64 {
        if index < GameConfig::HAND_SIZE as u64 {
            self.target.clamp(min, max)
        } else {
            Sha256Rng.draw(seed, index, min, max)
        }
    }
}

struct Arena {
    registry: AbilityRegistry,
    config: BattleConfig,
    state: BattleState,
    game: GameConfig,
}

impl Arena {
    /// Battle whose loadout is `abilities` padded with empty abilities.
    fn new(abilities: &[Ability], enemies: &[EnemyStats]) -> Self {
        let mut registry = AbilityRegistry::new();
        let empty = registry.register(Ability::default());
        let mut loadout = [empty; GameConfig::LOADOUT_SIZE];
        for (slot, ability) in abilities.iter().enumerate() {
            loadout[slot] = registry.register(*ability);
        }
        let game = GameConfig::default();
        let (_, config, state) = new_battle(
            Level::new(Biome::Grasslands, 1),
            enemies,
            PlayerId::from_public_key(b"tester"),
            &loadout,
            &game,
        )
        .unwrap();

        Self {
            registry,
            config,
            state,
            game,
        }
    }

    fn env<'a>(&'a self, rng: &'a dyn RngOracle) -> CombatEnv<'a> {
        CombatEnv::new(&self.registry, rng, &self.game)
    }
}

fn strike(amount: u32) -> Ability {
    Ability::new(Some(Effect::attack(Element::Physical, amount)))
}

#[test]
fn scenario_single_enemy_continues() {
    let arena = Arena::new(&[strike(10)], &[EnemyStats::new(30, 5, 0)]);
    let rng = ForcedTarget { target: 0 };

    let report = resolve_round(
        &arena.config,
        arena.state,
        &arena.env(&rng),
        b"round",
        &mut NullSink,
    )
    .unwrap();

    assert_eq!(report.state.enemy_hp[0], 20);
    assert_eq!(report.state.player_hp, 95);
    assert_eq!(report.outcome, RoundOutcome::Continuing);
}

#[test]
fn scenario_overkill_is_reproducible_victory() {
    let arena = Arena::new(&[strike(10)], &[EnemyStats::new(5, 5, 0)]);
    let rng = ForcedTarget { target: 0 };

    let run = || {
        resolve_round(
            &arena.config,
            arena.state,
            &arena.env(&rng),
            b"fixed-seed",
            &mut NullSink,
        )
        .unwrap()
    };
    let first = run();

    assert_eq!(first.state.enemy_hp[0], 0);
    let RoundOutcome::Victory { gold } = first.outcome else {
        panic!("expected victory, got {:?}", first.outcome);
    };
    assert!((50..=200).contains(&gold));
    assert_eq!(run().outcome, first.outcome);
}

#[test]
fn scenario_deck_rotation() {
    assert_eq!(rotate_deck([0, 1, 2], [1, 2, 3], 7), [1, 3, 5]);
    // Equal offsets from adjacent slots would collide without stepping.
    assert_eq!(rotate_deck([0, 1, 2], [2, 1, 0], 7), [2, 3, 4]);
}

#[test]
fn determinism_holds_for_state_events_and_outcome() {
    let charge = Ability::new(Some(Effect::generate(EnergyColor::Blue)))
        .with_energy(EnergyColor::Blue, Effect::attack(Element::Fire, 3).aoe());
    let arena = Arena::new(
        &[strike(4), charge, Ability::new(Some(Effect::block(2)))],
        &[
            EnemyStats::new(20, 3, 1),
            EnemyStats::new(15, 2, 0),
            EnemyStats::new(12, 4, 2),
        ],
    );
    let rng = Sha256Rng;

    for round in 0..16 {
        let seed = compute_round_seed(&arena.config.id(), round);
        let mut first: Vec<CombatEvent> = Vec::new();
        let mut second: Vec<CombatEvent> = Vec::new();

        let a = resolve_round(&arena.config, arena.state, &arena.env(&rng), &seed, &mut first)
            .unwrap();
        let b = resolve_round(&arena.config, arena.state, &arena.env(&rng), &seed, &mut second)
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}

#[test]
fn hp_never_underflows_over_a_full_battle() {
    let arena = Arena::new(
        &[strike(9), strike(13), strike(200)],
        &[EnemyStats::new(7, 30, 0), EnemyStats::new(40, 45, 3)],
    );
    let rng = Sha256Rng;
    let id = arena.config.id();
    let mut state = arena.state;

    for round in 0..32 {
        let seed = compute_round_seed(&id, round);
        let report =
            resolve_round(&arena.config, state, &arena.env(&rng), &seed, &mut NullSink).unwrap();

        assert!(report.state.player_hp <= state.player_hp);
        for slot in 0..GameConfig::MAX_ENEMIES {
            assert!(report.state.enemy_hp[slot] <= state.enemy_hp[slot]);
        }
        if report.outcome.is_terminal() {
            return;
        }
        state = report.state;
        state.deck_indices =
            rotate_deck(state.deck_indices, arena.game.rotation_offsets, 7);
    }
}

#[test]
fn block_precedence_for_player_and_enemy() {
    // Player block equal to incoming damage: no HP loss.
    let arena = Arena::new(
        &[Ability::new(Some(Effect::block(6)))],
        &[EnemyStats::new(10, 6, 0)],
    );
    let report = resolve_round(
        &arena.config,
        arena.state,
        &arena.env(&Sha256Rng),
        b"s",
        &mut NullSink,
    )
    .unwrap();
    assert_eq!(report.state.player_hp, arena.state.player_hp);

    // Enemy block below damage: loses exactly the difference.
    let arena = Arena::new(&[strike(10)], &[EnemyStats::new(30, 0, 4)]);
    let report = resolve_round(
        &arena.config,
        arena.state,
        &arena.env(&ForcedTarget { target: 0 }),
        b"s",
        &mut NullSink,
    )
    .unwrap();
    assert_eq!(report.state.enemy_hp[0], 24);
}

#[test]
fn aoe_is_symmetric_whatever_the_draw() {
    let sweep = Ability::new(Some(Effect::attack(Element::Ice, 5).aoe()));
    let arena = Arena::new(
        &[sweep],
        &[
            EnemyStats::new(20, 0, 0),
            EnemyStats::new(20, 0, 0),
            EnemyStats::new(20, 0, 0),
        ],
    );

    for target in 0..3 {
        let rng = ForcedTarget { target };
        let mut events: Vec<CombatEvent> = Vec::new();
        resolve_round(&arena.config, arena.state, &arena.env(&rng), b"s", &mut events).unwrap();

        let hits: Vec<(u8, u64)> = events
            .iter()
            .filter_map(|event| match event {
                CombatEvent::PlayerAttacks(attack) if attack.slot == 0 => {
                    Some((attack.enemy, attack.damage))
                }
                _ => None,
            })
            .collect();
        assert_eq!(hits, vec![(0, 5), (1, 5), (2, 5)]);
    }
}

#[test]
fn energy_does_not_carry_between_rounds() {
    // Green charged in round one must not fire the bonus in round two.
    let charge = Ability::new(Some(Effect::generate(EnergyColor::Green)));
    let bonus = Ability::new(None).with_energy(EnergyColor::Green, Effect::block(50));
    let arena = Arena::new(&[charge, bonus], &[EnemyStats::new(100, 10, 0)]);
    let rng = Sha256Rng;

    let first = resolve_round(&arena.config, arena.state, &arena.env(&rng), b"1", &mut NullSink)
        .unwrap();
    assert_eq!(first.totals.player_block, 50);
    assert_eq!(first.state.player_hp, 100);

    // Hand without the generator: bonus slot stays silent.
    let mut state = first.state;
    state.deck_indices = [1, 2, 3];
    let second =
        resolve_round(&arena.config, state, &arena.env(&rng), b"2", &mut NullSink).unwrap();
    assert!(second.totals.energy.is_empty());
    assert_eq!(second.totals.player_block, 0);
    assert_eq!(second.state.player_hp, 90);
}

#[test]
fn defeat_wins_over_simultaneous_victory() {
    let arena = Arena::new(&[strike(100)], &[EnemyStats::new(10, 500, 0)]);
    let report = resolve_round(
        &arena.config,
        arena.state,
        &arena.env(&ForcedTarget { target: 0 }),
        b"s",
        &mut NullSink,
    )
    .unwrap();

    assert_eq!(report.state.enemy_hp[0], 0);
    assert_eq!(report.outcome, RoundOutcome::Defeat);
}

#[test]
fn unknown_ability_fails_loudly() {
    let mut arena = Arena::new(&[strike(1)], &[EnemyStats::new(10, 1, 0)]);
    arena.config.loadout.abilities[2] = AbilityId([9; 32]);

    let mut events: Vec<CombatEvent> = Vec::new();
    let result = resolve_round(
        &arena.config,
        arena.state,
        &arena.env(&Sha256Rng),
        b"s",
        &mut events,
    );

    assert!(result.is_err());
    assert!(events.is_empty());
}
