//! Attack resolution: a random draw mapped to an outcome tier and damage.
//!
//! Tiers partition `[0, 1)` with no gaps or overlaps, closed at the low
//! end and open at the high end:
//!
//! | draw range    | tier        | damage (inclusive, uniform) |
//! |---------------|-------------|-----------------------------|
//! | [0.00, 0.18)  | Miss        | 0                           |
//! | [0.18, 0.78)  | Hit         | 3-6                         |
//! | [0.78, 0.93)  | Heavy       | 7-12                        |
//! | [0.93, 1.00)  | Devastating | 14-20                       |
//!
//! The tier draw and the magnitude draw are independent, both taken from
//! the injected `RandomSource`, so resolution is pure and reproducible.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Tier thresholds: upper bound of Miss, Hit, Heavy.
const MISS_BOUND: f64 = 0.18;
const HIT_BOUND: f64 = 0.78;
const HEAVY_BOUND: f64 = 0.93;

/// Outcome class of an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// No damage.
    Miss,
    /// Ordinary hit, 3-6 damage.
    Hit,
    /// Heavy hit, 7-12 damage.
    Heavy,
    /// Devastating hit, 14-20 damage.
    Devastating,
}

impl Tier {
    /// Map a `[0,1)` draw to its tier.
    ///
    /// ```
    /// use team_clash::combat::Tier;
    ///
    /// assert_eq!(Tier::for_draw(0.0), Tier::Miss);
    /// assert_eq!(Tier::for_draw(0.5), Tier::Hit);
    /// assert_eq!(Tier::for_draw(0.85), Tier::Heavy);
    /// assert_eq!(Tier::for_draw(0.99), Tier::Devastating);
    /// ```
    #[must_use]
    pub fn for_draw(draw: f64) -> Self {
        if draw < MISS_BOUND {
            Tier::Miss
        } else if draw < HIT_BOUND {
            Tier::Hit
        } else if draw < HEAVY_BOUND {
            Tier::Heavy
        } else {
            Tier::Devastating
        }
    }

    /// Inclusive damage range for this tier.
    #[must_use]
    pub const fn damage_range(self) -> (i32, i32) {
        match self {
            Tier::Miss => (0, 0),
            Tier::Hit => (3, 6),
            Tier::Heavy => (7, 12),
            Tier::Devastating => (14, 20),
        }
    }

    /// Did this attack land?
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Tier::Miss)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Tier::Miss => "Miss",
            Tier::Hit => "Hit",
            Tier::Heavy => "Heavy",
            Tier::Devastating => "Devastating",
        };
        write!(f, "{label}")
    }
}

/// A resolved attack: its tier and rolled damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Outcome class.
    pub tier: Tier,
    /// Damage to apply, already rolled within the tier's range.
    pub damage: i32,
}

/// Resolve one attack from two independent draws.
///
/// The first draw picks the tier; the second picks the damage magnitude
/// uniformly within the tier's inclusive range. A miss takes no second
/// draw.
pub fn resolve(rng: &mut dyn RandomSource) -> AttackOutcome {
    let tier = Tier::for_draw(rng.next_draw());
    let damage = match tier.damage_range() {
        (0, 0) => 0,
        (lo, hi) => rng.next_int(lo, hi),
    };
    AttackOutcome { tier, damage }
}
