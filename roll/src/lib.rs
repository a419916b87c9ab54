//! # roll
//!
//! A small dice-rolling calculator.
//!
//! Takes a single roll token like `3d6` (roll 3 dice with 6 sides each),
//! validates it against configurable limits, and prints one pseudo-random
//! result.
//!
//! Note the result is a single uniform draw over the full inclusive range
//! `[N, N*M]`, not the sum of `N` per-die draws, so the output distribution
//! is flat rather than bell-shaped.

pub mod cli;
pub mod dice;
pub mod parse;

pub(crate) const DEFAULT_MIN_DICE: u16 = 1;
pub(crate) const DEFAULT_MAX_DICE: u16 = 1000;
pub(crate) const DEFAULT_MIN_SIDES: u16 = 2;
pub(crate) const DEFAULT_MAX_SIDES: u16 = 100;
