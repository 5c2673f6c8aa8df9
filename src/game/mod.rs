//! Game controller: the single owner of `GameState`.
//!
//! All mutation goes through named methods on `Game`; the presentation
//! layer reads state and dispatches these calls. Resolution is a single
//! atomic step: the caller sequences any animation or sound effect
//! *before* `resolve_attack`, and keys fire-and-forget effects off the
//! returned `AttackReport`. The core never awaits anything, so no two
//! attacks can be mid-resolution at once and readers never observe an
//! intermediate hp value.

use serde::{Deserialize, Serialize};

use crate::combat::{self, AttackOutcome, Tier};
use crate::core::{
    GameConfig, GameRng, GameState, KnockoutRule, RandomSource, TeamId, XP_PER_HIT,
};
use crate::error::GameError;

/// Everything the presentation layer needs about one resolved attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    /// Who attacked.
    pub attacker: TeamId,
    /// Who was hit.
    pub target: TeamId,
    /// Tier and rolled damage.
    pub outcome: AttackOutcome,
    /// Target hp after clamped application (and after any respawn).
    pub target_hp: i32,
    /// Did the target reach zero hp from this attack?
    pub knocked_out: bool,
    /// Did the knockout rule revive the target?
    pub respawned: bool,
}

/// Owner of the game state and the only mutation path into it.
///
/// ## Example
///
/// ```
/// use team_clash::core::{GameConfig, ScriptedDraws, TeamId};
/// use team_clash::game::Game;
///
/// // Scripted draws: a Hit (0.5) for 4 damage.
/// let mut game = Game::with_rng(GameConfig::default(), ScriptedDraws::new(&[0.5], &[4]));
///
/// game.choose_attacker(TeamId::new(1)).unwrap();
/// game.choose_target(TeamId::new(2)).unwrap();
/// let report = game.resolve_attack().unwrap();
///
/// assert_eq!(report.outcome.damage, 4);
/// assert_eq!(report.target_hp, 96);
/// ```
pub struct Game<R: RandomSource = GameRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl Game<GameRng> {
    /// Create a game with a fresh default state and entropy-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            rng: GameRng::from_entropy(),
        }
    }

    /// Create a game with a fixed seed for reproducible sessions.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            rng: GameRng::new(seed),
        }
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game with an injected random source.
    #[must_use]
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let state = GameState::new(&config);
        Self { config, state, rng }
    }

    /// Resume a game from a restored state (loaded or imported).
    #[must_use]
    pub fn from_state(config: GameConfig, state: GameState, rng: R) -> Self {
        Self { config, state, rng }
    }

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Choose the attacker. Valid from any selection phase; clears any
    /// previously chosen target.
    pub fn choose_attacker(&mut self, id: TeamId) -> Result<(), GameError> {
        self.state.teams.find(id)?;
        self.state.selection.choose_attacker(id);
        Ok(())
    }

    /// Choose the target. Rejected with state unchanged if it equals the
    /// attacker or no attacker is chosen.
    pub fn choose_target(&mut self, id: TeamId) -> Result<(), GameError> {
        self.state.teams.find(id)?;
        self.state.selection.choose_target(id)
    }

    /// Abandon the pending selection. No persisted side effect.
    pub fn cancel(&mut self) {
        self.state.selection.cancel();
    }

    /// Resolve the pending attack.
    ///
    /// Only valid in `ReadyToResolve`. Draws the outcome, applies clamped
    /// damage, awards xp on a landed hit, applies the knockout rule,
    /// appends a log line, and unconditionally resets the selection to
    /// idle - win, loss, or miss all clear the pick.
    pub fn resolve_attack(&mut self) -> Result<AttackReport, GameError> {
        // Validate before committing so a rejected call leaves the
        // selection untouched.
        let (attacker_id, target_id) = match (
            self.state.selection.attacker(),
            self.state.selection.target(),
        ) {
            (Some(a), Some(t)) => (a, t),
            _ => return Err(GameError::SelectionIncomplete),
        };
        self.state.teams.find(attacker_id)?;
        self.state.teams.find(target_id)?;

        let (attacker_id, target_id) = self.state.selection.take_ready()?;

        let hp_before = self.state.teams.find(target_id)?.hp();
        let outcome = combat::resolve(&mut self.rng);
        let hp_after_damage = self.state.teams.apply_delta(target_id, -outcome.damage)?;

        if outcome.tier.is_hit() {
            self.state.teams.award_xp(attacker_id, XP_PER_HIT)?;
        }

        // A knockout is the transition to zero, not any hit landing on an
        // already-downed team.
        let knocked_out = hp_before > 0 && hp_after_damage == 0;
        let mut respawned = false;
        let mut target_hp = hp_after_damage;

        if knocked_out {
            if let KnockoutRule::Respawn { hp } = self.config.knockout {
                if let Some(target) = self.state.teams.get_mut(target_id) {
                    target_hp = target.set_hp(hp);
                    respawned = true;
                }
            }
        }

        let report = AttackReport {
            attacker: attacker_id,
            target: target_id,
            outcome,
            target_hp,
            knocked_out,
            respawned,
        };
        self.log_report(&report);

        Ok(report)
    }

    /// Rename a team.
    pub fn rename_team(&mut self, id: TeamId, name: impl Into<String>) -> Result<(), GameError> {
        self.state.teams.rename(id, name)
    }

    /// Apply an explicit heal (positive) or damage (negative) adjustment.
    ///
    /// Clamped like any other mutation; returns the new hp.
    pub fn adjust_hp(&mut self, id: TeamId, delta: i32) -> Result<i32, GameError> {
        self.state.teams.apply_delta(id, delta)
    }

    /// Reset every team to starting values, clear xp, the selection, and
    /// the log.
    pub fn reset(&mut self) {
        self.state
            .teams
            .reset_all(self.config.start_hp, self.config.max_hp);
        self.state.selection.cancel();
        self.state.log.clear();
        self.state.log.append(format!(
            "Game reset. All teams at {} HP and 0 XP.",
            self.config.start_hp
        ));
    }

    /// Replace the current state with a restored one.
    pub fn restore(&mut self, state: GameState) {
        self.state = state;
    }

    fn log_report(&mut self, report: &AttackReport) {
        let name = |id: TeamId| {
            self.state
                .teams
                .get(id)
                .map_or_else(|| id.to_string(), |t| t.name.clone())
        };
        let attacker = name(report.attacker);
        let target = name(report.target);
        let damage = report.outcome.damage;

        let message = if report.respawned {
            format!(
                "{attacker} KO'd {target} for {damage}! They respawn at {} HP.",
                report.target_hp
            )
        } else if report.knocked_out {
            format!("{attacker} hits {target} for {damage} and knocks them out!")
        } else {
            match report.outcome.tier {
                Tier::Miss => format!("{attacker} attacks {target}. Miss!"),
                Tier::Hit => format!(
                    "{attacker} hits {target} for {damage} (HP {}).",
                    report.target_hp
                ),
                Tier::Heavy => format!(
                    "{attacker} lands a heavy hit on {target} for {damage}! (HP {})",
                    report.target_hp
                ),
                Tier::Devastating => format!(
                    "{attacker} DEVASTATES {target} for {damage}!! (HP {})",
                    report.target_hp
                ),
            }
        };
        self.state.log.append(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptedDraws, SelectionPhase};

    fn game_with(draws: &[f64], ints: &[i32]) -> Game<ScriptedDraws> {
        Game::with_rng(GameConfig::default(), ScriptedDraws::new(draws, ints))
    }

    #[test]
    fn test_full_attack_cycle() {
        let mut game = game_with(&[0.5], &[4]);

        game.choose_attacker(TeamId::new(1)).unwrap();
        game.choose_target(TeamId::new(2)).unwrap();
        let report = game.resolve_attack().unwrap();

        assert_eq!(report.outcome.tier, Tier::Hit);
        assert_eq!(report.target_hp, 96);
        assert!(!report.knocked_out);

        // Selection resets to idle after any resolution.
        assert_eq!(game.state().selection.phase(), SelectionPhase::Idle);
        // Attacker earned xp for a landed hit.
        assert_eq!(game.state().teams.get(TeamId::new(1)).unwrap().xp, XP_PER_HIT);
        // The log recorded the action.
        assert_eq!(game.state().log.len(), 1);
    }

    #[test]
    fn test_miss_awards_no_xp_and_resets_selection() {
        let mut game = game_with(&[0.0], &[]);

        game.choose_attacker(TeamId::new(1)).unwrap();
        game.choose_target(TeamId::new(2)).unwrap();
        let report = game.resolve_attack().unwrap();

        assert_eq!(report.outcome.tier, Tier::Miss);
        assert_eq!(report.outcome.damage, 0);
        assert_eq!(game.state().teams.get(TeamId::new(1)).unwrap().xp, 0);
        assert_eq!(game.state().teams.get(TeamId::new(2)).unwrap().hp(), 100);
        assert_eq!(game.state().selection.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn test_resolve_requires_ready_state() {
        let mut game = game_with(&[0.5], &[4]);

        assert_eq!(game.resolve_attack(), Err(GameError::SelectionIncomplete));

        game.choose_attacker(TeamId::new(1)).unwrap();
        assert_eq!(game.resolve_attack(), Err(GameError::SelectionIncomplete));
        // Rejection leaves the pending attacker in place.
        assert_eq!(game.state().selection.attacker(), Some(TeamId::new(1)));
    }

    #[test]
    fn test_self_target_rejected() {
        let mut game = game_with(&[0.5], &[4]);

        game.choose_attacker(TeamId::new(1)).unwrap();
        let err = game.choose_target(TeamId::new(1)).unwrap_err();

        assert_eq!(err, GameError::SelfTarget(TeamId::new(1)));
        assert_eq!(game.state().selection.phase(), SelectionPhase::AttackerChosen);
    }

    #[test]
    fn test_unknown_team_is_signalled() {
        let mut game = game_with(&[0.5], &[4]);

        assert_eq!(
            game.choose_attacker(TeamId::new(99)),
            Err(GameError::TeamNotFound(TeamId::new(99)))
        );
        assert_eq!(
            game.rename_team(TeamId::new(99), "Ghost"),
            Err(GameError::TeamNotFound(TeamId::new(99)))
        );
        assert_eq!(
            game.adjust_hp(TeamId::new(99), -5),
            Err(GameError::TeamNotFound(TeamId::new(99)))
        );
    }

    #[test]
    fn test_knockout_persists_by_default() {
        // Devastating hits until team 2 is down.
        let mut game = game_with(&[0.99], &[20]);

        for _ in 0..5 {
            game.choose_attacker(TeamId::new(1)).unwrap();
            game.choose_target(TeamId::new(2)).unwrap();
            game.resolve_attack().unwrap();
        }

        let downed = game.state().teams.get(TeamId::new(2)).unwrap();
        assert_eq!(downed.hp(), 0);
        assert!(downed.is_down());

        // Zero-hp teams remain eligible attackers and targets.
        game.choose_attacker(TeamId::new(2)).unwrap();
        game.choose_target(TeamId::new(1)).unwrap();
        assert!(game.resolve_attack().is_ok());

        game.choose_attacker(TeamId::new(1)).unwrap();
        game.choose_target(TeamId::new(2)).unwrap();
        let report = game.resolve_attack().unwrap();
        assert_eq!(report.target_hp, 0);
        assert!(!report.knocked_out, "already at zero, no knockout event");
    }

    #[test]
    fn test_knockout_only_on_transition_to_zero() {
        let mut game = game_with(&[0.99], &[20]);

        // Five devastating hits take team 2 from 100 to exactly 0; only
        // the fifth is the knockout.
        for round in 0..5 {
            game.choose_attacker(TeamId::new(1)).unwrap();
            game.choose_target(TeamId::new(2)).unwrap();
            let report = game.resolve_attack().unwrap();
            assert_eq!(report.knocked_out, round == 4, "round {round}");
        }

        // Further landed hits on the downed team are not knockouts.
        game.choose_attacker(TeamId::new(1)).unwrap();
        game.choose_target(TeamId::new(2)).unwrap();
        let report = game.resolve_attack().unwrap();
        assert!(report.outcome.damage > 0);
        assert_eq!(report.target_hp, 0);
        assert!(!report.knocked_out);
    }

    #[test]
    fn test_knockout_respawn_rule() {
        let config = GameConfig::default().with_knockout_rule(KnockoutRule::Respawn { hp: 50 });
        let mut game = Game::with_rng(config, ScriptedDraws::new(&[0.99], &[20]));

        // 100 hp, 20 per devastating hit: the fifth knocks out.
        for _ in 0..5 {
            game.choose_attacker(TeamId::new(1)).unwrap();
            game.choose_target(TeamId::new(2)).unwrap();
            game.resolve_attack().unwrap();
        }

        let team = game.state().teams.get(TeamId::new(2)).unwrap();
        assert_eq!(team.hp(), 50);

        let last = game.state().log.recent(1)[0].message.clone();
        assert!(last.contains("respawn"), "log line: {last}");
    }

    #[test]
    fn test_overkill_damage_clamps_at_zero() {
        let mut game = game_with(&[0.99], &[20]);
        game.adjust_hp(TeamId::new(2), -95).unwrap(); // down to 5

        game.choose_attacker(TeamId::new(1)).unwrap();
        game.choose_target(TeamId::new(2)).unwrap();
        let report = game.resolve_attack().unwrap();

        assert_eq!(report.target_hp, 0);
        assert!(report.knocked_out);
    }

    #[test]
    fn test_cancel_has_no_side_effect() {
        let mut game = game_with(&[0.5], &[4]);

        game.choose_attacker(TeamId::new(1)).unwrap();
        game.choose_target(TeamId::new(2)).unwrap();
        game.cancel();

        assert_eq!(game.state().selection.phase(), SelectionPhase::Idle);
        assert!(game.state().log.is_empty());
        for team in game.state().teams.iter() {
            assert_eq!(team.hp(), 100);
        }
    }

    #[test]
    fn test_adjust_hp_clamps_both_ways() {
        let mut game = game_with(&[], &[]);

        assert_eq!(game.adjust_hp(TeamId::new(1), -999).unwrap(), 0);
        assert_eq!(game.adjust_hp(TeamId::new(1), 30).unwrap(), 30);
        assert_eq!(game.adjust_hp(TeamId::new(1), 999).unwrap(), 100);
    }

    #[test]
    fn test_reset() {
        let mut game = game_with(&[0.5], &[4]);
        game.choose_attacker(TeamId::new(1)).unwrap();
        game.choose_target(TeamId::new(2)).unwrap();
        game.resolve_attack().unwrap();
        game.choose_attacker(TeamId::new(3)).unwrap();

        game.reset();

        assert_eq!(game.state().selection.phase(), SelectionPhase::Idle);
        for team in game.state().teams.iter() {
            assert_eq!(team.hp(), 100);
            assert_eq!(team.xp, 0);
        }
        // The log was cleared and holds only the reset line.
        assert_eq!(game.state().log.len(), 1);
        assert!(game.state().log.recent(1)[0].message.contains("reset"));
    }

    #[test]
    fn test_log_mentions_both_names() {
        let mut game = game_with(&[0.5], &[4]);
        game.rename_team(TeamId::new(1), "Crimson").unwrap();
        game.rename_team(TeamId::new(2), "Azure").unwrap();

        game.choose_attacker(TeamId::new(1)).unwrap();
        game.choose_target(TeamId::new(2)).unwrap();
        game.resolve_attack().unwrap();

        let line = &game.state().log.recent(1)[0].message;
        assert!(line.contains("Crimson"));
        assert!(line.contains("Azure"));
    }
}
