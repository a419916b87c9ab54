use crate::{
    dice::{Roll, RollLimits},
    parse::{RollError, RollToken},
};
use pico_args;
use rand::SeedableRng;
use rand_xoshiro::Xoroshiro64Star;
use std::{fmt, str::FromStr};

///////////////////////////
// String parser helpers //
///////////////////////////

fn parse_opt<T>(label: &'static str, opt_s: Option<&str>) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    opt_s
        .map(T::from_str)
        .transpose()
        .map_err(|err| format!("invalid {label}: {err}"))
}

//////////////////////
// CLI Args Wrapper //
//////////////////////

pub struct Args(pico_args::Arguments);

impl Args {
    pub fn new(inner: pico_args::Arguments) -> Self {
        Self(inner)
    }

    pub fn from_env() -> Self {
        Self::new(pico_args::Arguments::from_env())
    }

    fn opt_value(&mut self, keys: impl Into<pico_args::Keys>) -> Result<Option<String>, String> {
        self.0
            .opt_value_from_fn(keys, |s| Result::<_, pico_args::Error>::Ok(s.to_owned()))
            .map_err(|err| err.to_string())
    }

    /// Consume the remaining free arguments after all options are parsed.
    fn into_free_values(self) -> Result<Vec<String>, String> {
        self.0
            .finish()
            .into_iter()
            .map(|os_str| {
                os_str
                    .into_string()
                    .map_err(|os_str| format!("argument is not valid utf-8: '{:?}'", os_str))
            })
            .collect()
    }

    fn maybe_help(&mut self, usage: &str) {
        if self.0.contains(["-h", "--help"]) {
            print!("{}", usage);
            std::process::exit(0);
        }
    }
}

///////////////////
// Command trait //
///////////////////

pub trait Command: Sized {
    const USAGE: &'static str;

    type Output: fmt::Display;

    fn try_from_cli_args(args: Args) -> Result<Self, String>;
    fn run(self) -> Result<Self::Output, String>;
}

/////////////////
// RollCommand //
/////////////////

#[derive(Clone, Debug)]
pub struct RollCommand {
    roll: Roll,
    seed: Option<u64>,
}

impl RollCommand {
    pub fn try_from_str_args(
        min_dice: Option<&str>,
        max_dice: Option<&str>,
        min_sides: Option<&str>,
        max_sides: Option<&str>,
        seed: Option<&str>,
        token: &str,
    ) -> Result<Self, String> {
        let defaults = RollLimits::default();
        let limits = RollLimits {
            min_dice: parse_opt("min dice", min_dice)?.unwrap_or(defaults.min_dice),
            max_dice: parse_opt("max dice", max_dice)?.unwrap_or(defaults.max_dice),
            min_sides: parse_opt("min sides", min_sides)?.unwrap_or(defaults.min_sides),
            max_sides: parse_opt("max sides", max_sides)?.unwrap_or(defaults.max_sides),
        };

        if limits.min_dice > limits.max_dice {
            return Err(format!(
                "the min dice count ({}) must not exceed the max dice count ({})",
                limits.min_dice, limits.max_dice,
            ));
        }
        if limits.min_sides > limits.max_sides {
            return Err(format!(
                "the min side count ({}) must not exceed the max side count ({})",
                limits.min_sides, limits.max_sides,
            ));
        }
        // a zero-sided die would make the result range [N, 0] empty
        if limits.min_sides < 1 {
            return Err(format!(
                "the min side count ({}) must be at least 1",
                limits.min_sides,
            ));
        }

        let seed = parse_opt("seed", seed)?;

        let token = RollToken::from_str(token).map_err(|err| err.to_string())?;
        let roll = limits.validate(token).map_err(|err| err.to_string())?;

        Ok(Self { roll, seed })
    }
}

impl Command for RollCommand {
    const USAGE: &'static str = "\
roll - roll N dice with M sides each

USAGE:
    roll [option ...] <NdM>

EXAMPLES:
    roll 3d6
    roll --seed 42 12d20

OPTIONS:
    · --min-dice n (default: 1)
      The smallest accepted dice count.

    · --max-dice n (default: 1000)
      The largest accepted dice count.

    · --min-sides m (default: 2)
      The smallest accepted side count.

    · --max-sides m (default: 100)
      The largest accepted side count.

    · --seed s
      Seed the random number generator for a reproducible roll. Without it
      the generator is seeded from OS entropy.
";

    type Output = RollOutput;

    fn try_from_cli_args(mut args: Args) -> Result<Self, String> {
        args.maybe_help(Self::USAGE);

        let min_dice = args.opt_value("--min-dice")?;
        let max_dice = args.opt_value("--max-dice")?;
        let min_sides = args.opt_value("--min-sides")?;
        let max_sides = args.opt_value("--max-sides")?;
        let seed = args.opt_value("--seed")?;

        // the argument-count checks come before any look at the token itself
        let free_values = args.into_free_values()?;
        let token = match free_values.as_slice() {
            [] => return Err(RollError::NoArguments.to_string()),
            [token] => token.as_str(),
            _ => return Err(RollError::TooManyArguments.to_string()),
        };

        Self::try_from_str_args(
            min_dice.as_deref(),
            max_dice.as_deref(),
            min_sides.as_deref(),
            max_sides.as_deref(),
            seed.as_deref(),
            token,
        )
    }

    fn run(self) -> Result<Self::Output, String> {
        let mut rng = match self.seed {
            Some(seed) => Xoroshiro64Star::seed_from_u64(seed),
            None => Xoroshiro64Star::from_entropy(),
        };

        Ok(RollOutput {
            result: self.roll.sample(&mut rng),
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RollOutput {
    result: u32,
}

impl fmt::Display for RollOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\nYou rolled a: {}\n\n", self.result)
    }
}

///////////
// Tests //
///////////

#[cfg(test)]
mod test {
    use super::*;
    use claim::{assert_err, assert_ok};
    use std::ffi::OsString;

    fn args(strs: &[&str]) -> Args {
        let os_strs = strs.iter().map(OsString::from).collect();
        Args::new(pico_args::Arguments::from_vec(os_strs))
    }

    #[test]
    fn test_argument_count_checked_first() {
        let err = RollCommand::try_from_cli_args(args(&[])).unwrap_err();
        assert_eq!(err, RollError::NoArguments.to_string());

        // two tokens fail on count even when both are malformed
        let err = RollCommand::try_from_cli_args(args(&["nope", "also-nope"])).unwrap_err();
        assert_eq!(err, RollError::TooManyArguments.to_string());

        let err = RollCommand::try_from_cli_args(args(&["3d6", "3d6"])).unwrap_err();
        assert_eq!(err, RollError::TooManyArguments.to_string());
    }

    #[test]
    fn test_token_errors_surface_as_messages() {
        let err = RollCommand::try_from_cli_args(args(&["36"])).unwrap_err();
        assert_eq!(err, RollError::MissingSeparator("36".to_string()).to_string());

        let err = RollCommand::try_from_cli_args(args(&["0d6"])).unwrap_err();
        assert_eq!(
            err,
            RollError::DiceCountOutOfRange {
                value: 0,
                min: 1,
                max: 1000,
            }
            .to_string(),
        );

        let err = RollCommand::try_from_cli_args(args(&["3d200"])).unwrap_err();
        assert_eq!(
            err,
            RollError::SideCountOutOfRange {
                value: 200,
                min: 2,
                max: 100,
            }
            .to_string(),
        );
    }

    #[test]
    fn test_limit_overrides() {
        // 3d200 passes once the side-count ceiling is raised
        assert_ok!(RollCommand::try_from_cli_args(args(&[
            "--max-sides", "500", "3d200",
        ])));

        assert_err!(RollCommand::try_from_cli_args(args(&[
            "--min-dice", "5", "3d6",
        ])));

        // inverted limit ranges are rejected up front
        assert_err!(RollCommand::try_from_cli_args(args(&[
            "--min-dice", "10", "--max-dice", "2", "3d6",
        ])));
        // a zero side floor would admit 3d0, whose result range [3, 0] is
        // empty; it must error up front instead of panicking at roll time
        let err = RollCommand::try_from_cli_args(args(&["--min-sides", "0", "3d0"]))
            .unwrap_err();
        assert_eq!(err, "the min side count (0) must be at least 1");
        // non-numeric option values are rejected by the option parser
        assert_err!(RollCommand::try_from_cli_args(args(&[
            "--min-sides", "two", "3d6",
        ])));
    }

    #[test]
    fn test_run_output_format() {
        let cmd =
            RollCommand::try_from_cli_args(args(&["--seed", "42", "3d6"])).unwrap();
        let out = cmd.run().unwrap().to_string();

        let result = out
            .strip_prefix("\n\nYou rolled a: ")
            .and_then(|rest| rest.strip_suffix("\n\n"))
            .and_then(|digits| digits.parse::<u32>().ok())
            .unwrap();
        assert!((3..=18).contains(&result));
    }

    #[test]
    fn test_run_seeded_is_deterministic() {
        let roll_once = || {
            RollCommand::try_from_cli_args(args(&["--seed", "7", "100d20"]))
                .unwrap()
                .run()
                .unwrap()
        };
        assert_eq!(roll_once(), roll_once());
    }
}
