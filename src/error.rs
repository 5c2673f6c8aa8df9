//! Error taxonomy for game actions.
//!
//! Nothing here is fatal: every error is local and recoverable by the
//! caller (retry, pick a different team, fall back to defaults).

use thiserror::Error;

use crate::core::TeamId;

/// Errors from game mutators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// An operation referenced a team id that is not in the roster.
    #[error("no team with id {0}")]
    TeamNotFound(TeamId),

    /// A target was chosen equal to the current attacker.
    #[error("{0} cannot target itself")]
    SelfTarget(TeamId),

    /// A target was chosen before any attacker.
    #[error("choose an attacker before a target")]
    NoAttacker,

    /// Resolution was requested without both an attacker and a target.
    #[error("attack is not ready to resolve")]
    SelectionIncomplete,
}
