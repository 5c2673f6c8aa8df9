//! # team-clash
//!
//! A turn-based exhibition combat engine for a small fixed roster of
//! teams: pick an attacker, pick a target, resolve the attack, watch
//! health totals change with a persistent log.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: no rendering, no audio, no timing. The presentation
//!    layer reads `GameState` and dispatches the `Game` mutators; effects
//!    are fire-and-forget off the returned `AttackReport`.
//!
//! 2. **Injected randomness**: resolution draws through `RandomSource`,
//!    so outcomes are deterministic under a seed and scriptable in tests.
//!
//! 3. **Tolerant persistence**: snapshots are JSON; import migrates old
//!    or lightly malformed documents to safe defaults instead of
//!    rejecting them.
//!
//! ## Modules
//!
//! - `core`: teams, roster, selection machine, config, RNG, log, state
//! - `combat`: the tier table and attack resolution
//! - `game`: the controller owning all state mutation
//! - `persist`: snapshot save/load/export/import with migration
//! - `error`: the error taxonomy

pub mod combat;
pub mod core;
pub mod error;
pub mod game;
pub mod persist;

// Re-export commonly used types
pub use crate::core::{
    EventLog, GameConfig, GameRng, GameState, KnockoutRule, LogEntry, RandomSource,
    ScriptedDraws, SelectionPhase, SelectionState, Settings, Team, TeamId, TeamRegistry,
};

pub use crate::combat::{AttackOutcome, Tier};
pub use crate::error::GameError;
pub use crate::game::{AttackReport, Game};
pub use crate::persist::{
    FileStore, MemoryStore, PersistenceManager, SnapshotStore, StorageError, ValidationError,
};
