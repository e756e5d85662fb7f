use std::fs;

use game2_content::ContentFactory;
use game2_core::{Biome, GameConfig, Level, LevelOracle};
use tempfile::TempDir;

#[test]
fn bundled_content_is_consistent() {
    let content = ContentFactory::bundled()
        .load_all()
        .expect("bundled data should load");

    assert_eq!(content.config, GameConfig::default());

    let owned: u32 = content
        .abilities
        .starter_grants()
        .iter()
        .map(|(_, count)| count)
        .sum();
    assert!(owned >= GameConfig::LOADOUT_SIZE as u32);
    assert!(!content.abilities.reward_pool().is_empty());

    // Every biome starts at difficulty 1 and each level has a boss to quest for.
    for biome in [Biome::Grasslands, Biome::Desert, Biome::Tundra, Biome::Cave] {
        let max = content.levels.max_difficulty(biome).expect("biome has levels");
        for difficulty in 1..=max {
            let level = Level::new(biome, difficulty);
            assert!(content.levels.enemies(&level).is_some(), "{level:?}");
            assert!(content.levels.boss(&level).is_some(), "{level:?}");
        }
    }
}

#[test]
fn loads_from_custom_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "player_max_hp = 42\n").unwrap();
    fs::write(
        dir.path().join("abilities.ron"),
        r#"(starters: [(name: "jab", count: 7, ability: (effect: Some((effect_type: attack_phys, amount: 1))))])"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("levels.ron"),
        "(levels: [(biome: cave, difficulty: 1, enemies: [(hp: 5, attack: 1)])])",
    )
    .unwrap();

    let content = ContentFactory::new(dir.path()).load_all().unwrap();

    assert_eq!(content.config.player_max_hp, 42);
    assert_eq!(content.abilities.starter_grants().len(), 1);
    assert_eq!(content.levels.len(), 1);
    assert!(content.levels.boss(&Level::new(Biome::Cave, 1)).is_none());
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("levels.ron");
    fs::write(&path, "(levels: [(biome: swamp, difficulty: 1, enemies: [])])").unwrap();

    let err = ContentFactory::new(dir.path()).load_levels().unwrap_err();
    assert!(err.to_string().contains(&path.display().to_string()));
}
