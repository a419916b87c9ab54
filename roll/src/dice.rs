use crate::{
    parse::{RollError, RollToken},
    DEFAULT_MAX_DICE, DEFAULT_MAX_SIDES, DEFAULT_MIN_DICE, DEFAULT_MIN_SIDES,
};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

////////////////
// RollLimits //
////////////////

/// Inclusive bounds a [`RollToken`] must fall within before it can be rolled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RollLimits {
    pub min_dice: u16,
    pub max_dice: u16,
    pub min_sides: u16,
    pub max_sides: u16,
}

impl Default for RollLimits {
    fn default() -> Self {
        Self {
            min_dice: DEFAULT_MIN_DICE,
            max_dice: DEFAULT_MAX_DICE,
            min_sides: DEFAULT_MIN_SIDES,
            max_sides: DEFAULT_MAX_SIDES,
        }
    }
}

impl RollLimits {
    /// Bounds-check a parsed token, turning it into a rollable [`Roll`].
    pub fn validate(&self, token: RollToken) -> Result<Roll, RollError> {
        if !(self.min_dice..=self.max_dice).contains(&token.dice_count) {
            return Err(RollError::DiceCountOutOfRange {
                value: token.dice_count,
                min: self.min_dice,
                max: self.max_dice,
            });
        }
        if !(self.min_sides..=self.max_sides).contains(&token.side_count) {
            return Err(RollError::SideCountOutOfRange {
                value: token.side_count,
                min: self.min_sides,
                max: self.max_sides,
            });
        }

        Ok(Roll::new(token))
    }
}

//////////
// Roll //
//////////

/// A validated roll with its inclusive result range `[N, N*M]` precomputed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Roll {
    lo: u32,
    hi: u32,
}

impl Roll {
    fn new(token: RollToken) -> Self {
        let lo = token.dice_count as u32;
        let hi = (token.dice_count as u32) * (token.side_count as u32);
        Self { lo, hi }
    }

    #[inline]
    pub fn lo(&self) -> u32 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> u32 {
        self.hi
    }

    /// Draw one uniform result from `[lo, hi]`. One flat draw over the whole
    /// range, not a per-die sum.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
        Uniform::new_inclusive(self.lo, self.hi).sample(rng)
    }
}

///////////
// Tests //
///////////
