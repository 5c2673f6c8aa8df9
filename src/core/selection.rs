//! Attacker/target selection state machine.
//!
//! Idle -> AttackerChosen -> ReadyToResolve, cycling for the life of the
//! session. Choosing an attacker always clears any previously chosen
//! target, since a new attacker invalidates the old pick. Choosing a
//! target equal to the attacker is rejected with state unchanged.

use serde::{Deserialize, Serialize};

use super::team::TeamId;
use crate::error::GameError;

/// Where the selection machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// No attacker chosen.
    Idle,
    /// Attacker chosen, waiting for a target.
    AttackerChosen,
    /// Attacker and a distinct target chosen; resolution may proceed.
    ReadyToResolve,
}

/// The in-progress attacker/target pick.
///
/// Invariant: if both ids are set, they differ.
///
/// ## Example
///
/// ```
/// use team_clash::core::{SelectionPhase, SelectionState, TeamId};
///
/// let mut selection = SelectionState::new();
/// selection.choose_attacker(TeamId::new(1));
/// selection.choose_target(TeamId::new(2)).unwrap();
/// assert_eq!(selection.phase(), SelectionPhase::ReadyToResolve);
///
/// selection.cancel();
/// assert_eq!(selection.phase(), SelectionPhase::Idle);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    attacker: Option<TeamId>,
    target: Option<TeamId>,
}

impl SelectionState {
    /// Create an idle selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a selection from saved ids, dropping invalid pairs.
    ///
    /// A target without an attacker, or a target equal to the attacker,
    /// cannot arise from legal transitions; such snapshots collapse to
    /// the nearest valid state instead of being rejected.
    #[must_use]
    pub fn from_parts(attacker: Option<TeamId>, target: Option<TeamId>) -> Self {
        match (attacker, target) {
            (Some(a), Some(t)) if a != t => Self {
                attacker: Some(a),
                target: Some(t),
            },
            (Some(a), _) => Self {
                attacker: Some(a),
                target: None,
            },
            (None, _) => Self::default(),
        }
    }

    /// The pending attacker, if chosen.
    #[must_use]
    pub fn attacker(&self) -> Option<TeamId> {
        self.attacker
    }

    /// The pending target, if chosen.
    #[must_use]
    pub fn target(&self) -> Option<TeamId> {
        self.target
    }

    /// Current phase of the machine.
    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        match (self.attacker, self.target) {
            (None, _) => SelectionPhase::Idle,
            (Some(_), None) => SelectionPhase::AttackerChosen,
            (Some(_), Some(_)) => SelectionPhase::ReadyToResolve,
        }
    }

    /// Choose the attacker. Valid from any phase; clears the target.
    pub fn choose_attacker(&mut self, id: TeamId) {
        self.attacker = Some(id);
        self.target = None;
    }

    /// Choose the target.
    ///
    /// Rejected, with state unchanged, if no attacker is chosen or if
    /// `id` equals the attacker.
    pub fn choose_target(&mut self, id: TeamId) -> Result<(), GameError> {
        let attacker = self.attacker.ok_or(GameError::NoAttacker)?;
        if attacker == id {
            return Err(GameError::SelfTarget(id));
        }
        self.target = Some(id);
        Ok(())
    }

    /// Return to idle from any phase.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Take the completed pick, resetting to idle.
    ///
    /// Returns `(attacker, target)` only from `ReadyToResolve`; any other
    /// phase is `GameError::SelectionIncomplete` with state unchanged.
    pub fn take_ready(&mut self) -> Result<(TeamId, TeamId), GameError> {
        match (self.attacker, self.target) {
            (Some(a), Some(t)) => {
                *self = Self::default();
                Ok((a, t))
            }
            _ => Err(GameError::SelectionIncomplete),
        }
    }
}
