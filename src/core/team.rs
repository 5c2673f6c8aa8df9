//! Team identity and stats.
//!
//! Every contestant in the arena is a `Team` with a stable `TeamId`,
//! a mutable display name, clamped health, and an xp counter that
//! accumulates as attacks land.

use serde::{Deserialize, Serialize};

/// Experience awarded to the attacker for every landed (non-miss) attack.
pub const XP_PER_HIT: u32 = 10;

/// Unique identifier for a team.
///
/// Ids are stable for the life of a session and across save/load.
///
/// ```
/// use team_clash::core::TeamId;
///
/// let id = TeamId::new(3);
/// assert_eq!(id.raw(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team({})", self.0)
    }
}

/// One contestant: health, name, xp, and an opaque sprite reference.
///
/// Invariants maintained by every mutator:
/// - `0 <= hp <= max_hp`
/// - `max_hp >= 1`
///
/// The `sprite` field is an asset reference for the rendering layer;
/// the engine stores it and round-trips it but never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Stable unique identifier.
    pub id: TeamId,

    /// Mutable display label.
    pub name: String,

    /// Current health, always in `[0, max_hp]`.
    hp: i32,

    /// Health ceiling, always `>= 1`.
    max_hp: i32,

    /// Experience accumulated from landed attacks.
    pub xp: u32,

    /// Opaque visual-asset reference.
    pub sprite: String,
}

impl Team {
    /// Create a team at full health.
    ///
    /// `max_hp` is floored at 1.
    ///
    /// ```
    /// use team_clash::core::{Team, TeamId};
    ///
    /// let team = Team::new(TeamId::new(1), "Red", 100);
    /// assert_eq!(team.hp(), 100);
    /// assert_eq!(team.max_hp(), 100);
    /// ```
    pub fn new(id: TeamId, name: impl Into<String>, max_hp: i32) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            id,
            name: name.into(),
            hp: max_hp,
            max_hp,
            xp: 0,
            sprite: String::new(),
        }
    }

    /// Create a team with explicit hp, max_hp, xp, and sprite.
    ///
    /// Values are clamped so the team invariants hold: `max_hp` is
    /// floored at 1 and `hp` is clamped into `[0, max_hp]`.
    pub fn with_stats(
        id: TeamId,
        name: impl Into<String>,
        hp: i32,
        max_hp: i32,
        xp: u32,
        sprite: impl Into<String>,
    ) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            id,
            name: name.into(),
            hp: hp.clamp(0, max_hp),
            max_hp,
            xp,
            sprite: sprite.into(),
        }
    }

    /// Set the sprite reference.
    #[must_use]
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    /// Current health.
    #[must_use]
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Health ceiling.
    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Apply a health delta, clamping into `[0, max_hp]`.
    ///
    /// Damage is a negative delta, healing positive. Returns the new hp.
    ///
    /// ```
    /// use team_clash::core::{Team, TeamId};
    ///
    /// let mut team = Team::new(TeamId::new(1), "Red", 100);
    /// assert_eq!(team.apply_delta(-999), 0);
    /// assert_eq!(team.apply_delta(40), 40);
    /// assert_eq!(team.apply_delta(999), 100);
    /// ```
    pub fn apply_delta(&mut self, delta: i32) -> i32 {
        self.hp = self.hp.saturating_add(delta).clamp(0, self.max_hp);
        self.hp
    }

    /// Set hp directly, clamped into `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: i32) -> i32 {
        self.hp = hp.clamp(0, self.max_hp);
        self.hp
    }

    /// Reinitialize to the given values, clearing xp.
    pub fn reset(&mut self, hp: i32, max_hp: i32) {
        self.max_hp = max_hp.max(1);
        self.hp = hp.clamp(0, self.max_hp);
        self.xp = 0;
    }

    /// Is this team at zero health?
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.hp == 0
    }
}
