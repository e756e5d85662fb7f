//! Game2 local client.
//!
//! Loads content, registers a player against an in-process session and
//! fast-forwards one battle, logging every bus event as JSON.
//!
//! ```bash
//! GAME2_SEED=alice GAME2_BIOME=desert RUST_LOG=debug cargo run -p game2-client
//! ```
mod config;

use anyhow::{Context, Result, bail};
use game2_content::{ContentFactory, GameContent};
use game2_core::{AbilityId, GameConfig, PlayerId, RoundOutcome};
use game2_runtime::{Event, EventBus, GameSession, OracleManager, Topic};
use tokio::sync::broadcast::{Receiver, error::RecvError};
use tokio::task::JoinHandle;

use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(?config, "Starting Game2 client");

    let factory = match &config.content_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    let content = factory
        .load_all()
        .with_context(|| format!("loading content from {}", factory.data_dir().display()))?;
    let loadout = starter_loadout(&content)?;

    let mut session = GameSession::with_bus(
        OracleManager::from_content(content),
        EventBus::with_capacity(config.event_capacity),
    );
    let loggers: Vec<JoinHandle<()>> = session
        .bus()
        .subscribe_multiple(&[Topic::Combat, Topic::Lifecycle])
        .into_iter()
        .map(|(topic, receiver)| tokio::spawn(log_events(topic, receiver)))
        .collect();

    let player = PlayerId::from_public_key(config.seed.as_bytes());
    session.register_player(player)?;
    let battle = session.start_battle(player, &loadout, config.level)?;

    let last = session.fast_forward(battle, config.max_rounds)?;
    match last.map(|report| report.outcome) {
        Some(RoundOutcome::Victory { gold }) => {
            let balance = session.account(&player)?.gold;
            tracing::info!(%battle, gold, balance, "battle won");
        }
        Some(RoundOutcome::Defeat) => tracing::info!(%battle, "battle lost"),
        Some(RoundOutcome::Continuing) | None => {
            let round = session.battle(&battle)?.round;
            tracing::info!(%battle, round, "battle still running after round limit");
        }
    }

    // Dropping the session closes the bus, letting the loggers drain and exit.
    drop(session);
    for logger in loggers {
        logger.await?;
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}

/// First seven starter copies, in catalog order.
fn starter_loadout(content: &GameContent) -> Result<Vec<AbilityId>> {
    let loadout: Vec<AbilityId> = content
        .abilities
        .starter_grants()
        .into_iter()
        .flat_map(|(id, count)| std::iter::repeat_n(id, count as usize))
        .take(GameConfig::LOADOUT_SIZE)
        .collect();

    if loadout.len() < GameConfig::LOADOUT_SIZE {
        bail!(
            "starter catalog grants {} abilities, a loadout needs {}",
            loadout.len(),
            GameConfig::LOADOUT_SIZE
        );
    }
    Ok(loadout)
}

async fn log_events(topic: Topic, mut receiver: Receiver<Event>) {
    loop {
        match receiver.recv().await {
            Ok(event) => match serde_json::to_string(&event) {
                Ok(json) => tracing::info!(?topic, "{json}"),
                Err(e) => tracing::warn!(?topic, "Failed to encode event: {}", e),
            },
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(?topic, skipped, "event logger lagged");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
