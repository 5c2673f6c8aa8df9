//! Team roster with lookup and clamped mutation.
//!
//! The `TeamRegistry` owns the ordered roster. All health mutation goes
//! through it and is clamped, so `0 <= hp <= max_hp` holds for every team
//! at all times. Roster order is significant: it is preserved in
//! snapshots and by iteration.

use serde::{Deserialize, Serialize};

use super::team::{Team, TeamId};
use crate::error::GameError;

/// Ordered roster of teams.
///
/// Teams are fixed for the life of a session: they are created at game
/// start (or restored from a snapshot) and never destroyed. The roster
/// tolerates any positive count, four by default.
///
/// ## Example
///
/// ```
/// use team_clash::core::{Team, TeamId, TeamRegistry};
///
/// let mut registry = TeamRegistry::new();
/// registry.add(Team::new(TeamId::new(1), "Red", 100));
///
/// assert_eq!(registry.get(TeamId::new(1)).unwrap().name, "Red");
/// assert_eq!(registry.apply_delta(TeamId::new(1), -30).unwrap(), 70);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the default roster: `count` teams named "Team 1".."Team N",
    /// all at full health.
    #[must_use]
    pub fn with_defaults(count: usize, max_hp: i32) -> Self {
        let teams = (1..=count as u32)
            .map(|n| Team::new(TeamId::new(n), format!("Team {n}"), max_hp))
            .collect();
        Self { teams }
    }

    /// Add a team to the end of the roster.
    ///
    /// Panics if a team with the same ID already exists.
    pub fn add(&mut self, team: Team) {
        if self.contains(team.id) {
            panic!("Team with ID {:?} already in roster", team.id);
        }
        self.teams.push(team);
    }

    /// Get a team by ID.
    #[must_use]
    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Get a mutable team by ID.
    pub fn get_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    /// Look up a team, signalling an unknown id as an error.
    pub fn find(&self, id: TeamId) -> Result<&Team, GameError> {
        self.get(id).ok_or(GameError::TeamNotFound(id))
    }

    /// Apply a health delta to a team, clamped into `[0, max_hp]`.
    ///
    /// Damage is a negative delta, healing positive. Returns the new hp,
    /// or `GameError::TeamNotFound` for an unknown id.
    pub fn apply_delta(&mut self, id: TeamId, delta: i32) -> Result<i32, GameError> {
        let team = self
            .get_mut(id)
            .ok_or(GameError::TeamNotFound(id))?;
        Ok(team.apply_delta(delta))
    }

    /// Rename a team.
    pub fn rename(&mut self, id: TeamId, name: impl Into<String>) -> Result<(), GameError> {
        let team = self
            .get_mut(id)
            .ok_or(GameError::TeamNotFound(id))?;
        team.name = name.into();
        Ok(())
    }

    /// Award xp to a team.
    pub fn award_xp(&mut self, id: TeamId, amount: u32) -> Result<(), GameError> {
        let team = self
            .get_mut(id)
            .ok_or(GameError::TeamNotFound(id))?;
        team.xp = team.xp.saturating_add(amount);
        Ok(())
    }

    /// Reinitialize every team to the given values, clearing xp.
    pub fn reset_all(&mut self, hp: i32, max_hp: i32) {
        for team in &mut self.teams {
            team.reset(hp, max_hp);
        }
    }

    /// Check if a team ID is in the roster.
    #[must_use]
    pub fn contains(&self, id: TeamId) -> bool {
        self.teams.iter().any(|t| t.id == id)
    }

    /// Get the number of teams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Iterate over teams in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }
}
