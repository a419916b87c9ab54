use std::{fmt, str::FromStr};

/// The separator between the dice count and the side count in a roll token.
pub const SEPARATOR: char = 'd';

/// The maximum number of digits allowed on either side of the separator.
const MAX_OPERAND_DIGITS: usize = 4;

//////////////////////
// parse::RollError //
//////////////////////

/// Everything that can go wrong between the command line and an actual roll.
///
/// Each variant is fatal and mutually exclusive; the variants are listed in
/// the order the checks run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RollError {
    NoArguments,
    TooManyArguments,
    MissingSeparator(String),
    MissingDiceCount(String),
    MissingSideCount(String),
    DiceCountNotNumeric(String),
    SideCountNotNumeric(String),
    DiceCountOutOfRange { value: u16, min: u16, max: u16 },
    SideCountOutOfRange { value: u16, min: u16, max: u16 },
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArguments => write!(f, "no arguments: expected a roll token like '3d6'"),
            Self::TooManyArguments => {
                write!(f, "too many arguments: expected exactly one roll token")
            }
            Self::MissingSeparator(token) => {
                write!(f, "missing '{}' separator in roll token: '{}'", SEPARATOR, token)
            }
            Self::MissingDiceCount(token) => {
                write!(f, "missing dice count in roll token: '{}'", token)
            }
            Self::MissingSideCount(token) => {
                write!(f, "missing side count in roll token: '{}'", token)
            }
            Self::DiceCountNotNumeric(operand) => {
                write!(f, "dice count is not a 1-4 digit number: '{}'", operand)
            }
            Self::SideCountNotNumeric(operand) => {
                write!(f, "side count is not a 1-4 digit number: '{}'", operand)
            }
            Self::DiceCountOutOfRange { value, min, max } => {
                write!(f, "dice count must be in the range [{},{}]: got {}", min, max, value)
            }
            Self::SideCountOutOfRange { value, min, max } => {
                write!(f, "side count must be in the range [{},{}]: got {}", min, max, value)
            }
        }
    }
}

//////////////////////
// parse::RollToken //
//////////////////////

/// A parsed-but-not-yet-bounds-checked roll request, e.g. `3d6` parses to
/// `RollToken { dice_count: 3, side_count: 6 }`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RollToken {
    pub dice_count: u16,
    pub side_count: u16,
}

impl RollToken {
    pub fn new(dice_count: u16, side_count: u16) -> Self {
        Self {
            dice_count,
            side_count,
        }
    }
}

fn parse_operand(operand: &str, err: impl Fn(String) -> RollError) -> Result<u16, RollError> {
    let ok = !operand.is_empty()
        && operand.len() <= MAX_OPERAND_DIGITS
        && operand.bytes().all(|b| b.is_ascii_digit());
    if !ok {
        return Err(err(operand.to_string()));
    }
    // 4 ascii digits max, can't overflow a u16
    operand
        .parse::<u16>()
        .map_err(|_| err(operand.to_string()))
}

impl FromStr for RollToken {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.to_lowercase();

        let (left, right) = token
            .split_once(SEPARATOR)
            .ok_or_else(|| RollError::MissingSeparator(token.clone()))?;

        if left.is_empty() {
            return Err(RollError::MissingDiceCount(token.clone()));
        }
        if right.is_empty() {
            return Err(RollError::MissingSideCount(token.clone()));
        }

        let dice_count = parse_operand(left, RollError::DiceCountNotNumeric)?;
        let side_count = parse_operand(right, RollError::SideCountNotNumeric)?;

        Ok(Self::new(dice_count, side_count))
    }
}

///////////
// Tests //
///////////

#[cfg(test)]
mod test {
    use super::*;
    use claim::assert_err;

    #[test]
    fn test_roll_token_from_str() {
        assert_eq!(RollToken::new(3, 6), RollToken::from_str("3d6").unwrap());
        assert_eq!(RollToken::new(12, 20), RollToken::from_str("12d20").unwrap());
        assert_eq!(
            RollToken::new(1000, 100),
            RollToken::from_str("1000d100").unwrap(),
        );
        // the token is lower-cased before splitting
        assert_eq!(RollToken::new(3, 6), RollToken::from_str("3D6").unwrap());
        // out-of-limits values still parse; limits are checked separately
        assert_eq!(RollToken::new(0, 6), RollToken::from_str("0d6").unwrap());
        assert_eq!(
            RollToken::new(9999, 9999),
            RollToken::from_str("9999d9999").unwrap(),
        );
    }

    #[test]
    fn test_roll_token_from_str_errors() {
        assert_eq!(
            RollToken::from_str("36"),
            Err(RollError::MissingSeparator("36".to_string())),
        );
        assert_eq!(
            RollToken::from_str("d6"),
            Err(RollError::MissingDiceCount("d6".to_string())),
        );
        assert_eq!(
            RollToken::from_str("3d"),
            Err(RollError::MissingSideCount("3d".to_string())),
        );
        assert_eq!(
            RollToken::from_str("xd6"),
            Err(RollError::DiceCountNotNumeric("x".to_string())),
        );
        assert_eq!(
            RollToken::from_str("-3d6"),
            Err(RollError::DiceCountNotNumeric("-3".to_string())),
        );
        assert_eq!(
            RollToken::from_str("3dy"),
            Err(RollError::SideCountNotNumeric("y".to_string())),
        );
        // operands are capped at 4 digits
        assert_eq!(
            RollToken::from_str("12345d6"),
            Err(RollError::DiceCountNotNumeric("12345".to_string())),
        );
        assert_eq!(
            RollToken::from_str("3d12345"),
            Err(RollError::SideCountNotNumeric("12345".to_string())),
        );
        // a second separator lands in the right operand
        assert_err!(RollToken::from_str("3d6d7"));
        assert_err!(RollToken::from_str(""));
        assert_err!(RollToken::from_str("3 d 6"));
    }
}
