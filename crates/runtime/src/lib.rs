//! Session orchestration around the deterministic combat core.
//!
//! This crate plays the part of the battle contract for local play and
//! tests: it keeps player accounts, running battles and pending quests,
//! settles round outcomes, and fans events out to subscribers.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts [`GameSession`], the entry point for every operation
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] bundles the content-backed read-only collaborators
//! - [`repository`] holds accounts, battles and quests that change during play
pub mod api;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use events::{BusSink, CombatNotice, Event, EventBus, LifecycleEvent, Topic};
pub use oracle::OracleManager;
pub use repository::{BattleRecord, FIRST_DIFFICULTY, PlayerAccount};
pub use session::GameSession;
