//! Attack resolution.

pub mod resolver;

pub use resolver::{resolve, AttackOutcome, Tier};
