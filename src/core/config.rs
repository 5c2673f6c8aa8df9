//! Game configuration.
//!
//! The engine never hardcodes roster size, health values, or the
//! knockout policy - games configure them at startup.

use serde::{Deserialize, Serialize};

/// Default roster size.
pub const DEFAULT_TEAM_COUNT: usize = 4;

/// Default starting and maximum health.
pub const DEFAULT_MAX_HP: i32 = 100;

/// Health a team respawns with under `KnockoutRule::Respawn` defaults.
pub const DEFAULT_RESPAWN_HP: i32 = 50;

/// What happens when a team's hp reaches zero.
///
/// Two variants of this game exist; neither is hardcoded:
/// - `Persist`: hp stays at 0 and the team remains an eligible attacker
///   and target. This is the default.
/// - `Respawn`: the team immediately comes back at the configured hp,
///   as in the earlier prototype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnockoutRule {
    /// Zero-hp teams stay at zero; no revival.
    Persist,
    /// Zero-hp teams come back at `hp`.
    Respawn {
        /// Health restored on knockout.
        hp: i32,
    },
}

impl Default for KnockoutRule {
    fn default() -> Self {
        Self::Persist
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use team_clash::core::{GameConfig, KnockoutRule};
///
/// let config = GameConfig::new(4)
///     .with_max_hp(100)
///     .with_knockout_rule(KnockoutRule::Respawn { hp: 50 });
///
/// assert_eq!(config.team_count, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of teams in the roster (at least 1).
    pub team_count: usize,

    /// Starting health for every team.
    pub start_hp: i32,

    /// Health ceiling for every team.
    pub max_hp: i32,

    /// Policy applied when a team reaches zero hp.
    pub knockout: KnockoutRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TEAM_COUNT)
    }
}

impl GameConfig {
    /// Create a configuration with default health values.
    #[must_use]
    pub fn new(team_count: usize) -> Self {
        assert!(team_count > 0, "Must have at least 1 team");

        Self {
            team_count,
            start_hp: DEFAULT_MAX_HP,
            max_hp: DEFAULT_MAX_HP,
            knockout: KnockoutRule::default(),
        }
    }

    /// Set starting health.
    #[must_use]
    pub fn with_start_hp(mut self, hp: i32) -> Self {
        self.start_hp = hp;
        self
    }

    /// Set the health ceiling.
    #[must_use]
    pub fn with_max_hp(mut self, max_hp: i32) -> Self {
        assert!(max_hp >= 1, "max_hp must be at least 1");
        self.max_hp = max_hp;
        self
    }

    /// Set the knockout rule.
    #[must_use]
    pub fn with_knockout_rule(mut self, rule: KnockoutRule) -> Self {
        self.knockout = rule;
        self
    }
}
