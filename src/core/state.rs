//! Game state aggregate.
//!
//! `GameState` is the unit of save/export/import: the roster, the
//! in-progress selection, the event log, and the passthrough settings.
//! All mutation goes through the owning `Game` controller - there is no
//! ambient global state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::GameConfig;
use super::log::EventLog;
use super::registry::TeamRegistry;
use super::selection::SelectionState;
use super::team::{Team, TeamId};

/// Settings for the audio/embed collaborators.
///
/// The engine persists these but interprets nothing beyond the two known
/// fields. Unknown fields are preserved verbatim so a newer presentation
/// layer's settings survive a round-trip through an older core. On
/// import, fields merge onto these defaults rather than replacing them
/// wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Sound effects enabled.
    pub sfx: bool,

    /// User-supplied music-embed identifier. Opaque passthrough.
    pub playlist_url: String,

    /// Unrecognized settings fields, preserved across save/load.
    #[serde(flatten)]
    pub extra: FxHashMap<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx: true,
            playlist_url: String::new(),
            extra: FxHashMap::default(),
        }
    }
}

/// Aggregate root: everything a snapshot captures.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    /// The team roster.
    pub teams: TeamRegistry,

    /// The pending attacker/target pick.
    pub selection: SelectionState,

    /// Persistent record of resolved actions.
    pub log: EventLog,

    /// Opaque collaborator settings.
    pub settings: Settings,
}

impl GameState {
    /// Create the default initial state for a configuration.
    ///
    /// Teams are numbered from 1 and named "Team 1".."Team N".
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut teams = TeamRegistry::new();
        for n in 1..=config.team_count as u32 {
            teams.add(Team::with_stats(
                TeamId::new(n),
                format!("Team {n}"),
                config.start_hp,
                config.max_hp,
                0,
                "",
            ));
        }

        Self {
            teams,
            selection: SelectionState::new(),
            log: EventLog::new(),
            settings: Settings::default(),
        }
    }

    /// Assemble a state from restored parts.
    #[must_use]
    pub fn from_parts(
        teams: TeamRegistry,
        selection: SelectionState,
        log: EventLog,
        settings: Settings,
    ) -> Self {
        Self {
            teams,
            selection,
            log,
            settings,
        }
    }
}
