//! Core engine types: teams, selection, configuration, RNG, log, state.
//!
//! These are the building blocks the `Game` controller composes. Nothing
//! here touches rendering, audio, or storage.

pub mod config;
pub mod log;
pub mod registry;
pub mod rng;
pub mod selection;
pub mod state;
pub mod team;

pub use config::{GameConfig, KnockoutRule, DEFAULT_MAX_HP, DEFAULT_RESPAWN_HP, DEFAULT_TEAM_COUNT};
pub use log::{EventLog, LogEntry, LOG_CAP};
pub use registry::TeamRegistry;
pub use rng::{GameRng, RandomSource, ScriptedDraws};
pub use selection::{SelectionPhase, SelectionState};
pub use state::{GameState, Settings};
pub use team::{Team, TeamId, XP_PER_HIT};
