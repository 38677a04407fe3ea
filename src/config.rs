//! Command-line configuration

use std::fmt;

pub const DEFAULT_FROM: f64 = -10.0;
pub const DEFAULT_TO: f64 = 10.0;
pub const DEFAULT_SAMPLES: usize = 200;
pub const MIN_SAMPLES: usize = 2;

pub const USAGE: &str = "\
Usage: curvetty [OPTIONS] [EXPRESSION]

Plot a function of x in the terminal.

Options:
  --from <number>       left end of the interval (default -10)
  --to <number>         right end of the interval (default 10)
  -n, --samples <n>     number of sample points (default 200)
  --table               print an x/f(x) table and exit
  --eval <number>       print f(x) at one point and exit (repeatable)
  -v, --verbose         log debug messages
  -h, --help            show this help
  --                    treat every later argument as the expression

Examples:
  curvetty \"sin(x) / x\"
  curvetty --from 0 --to 5 -n 11 --table \"2x^2 - 3\"
  curvetty --eval 2 --eval 3 \"abs(x - 2.5)\"";

/// What the binary should do once the formula is compiled
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Interactive,
    Table,
    Evaluate(Vec<f64>),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub expression: Option<String>,
    pub from: f64,
    pub to: f64,
    pub samples: usize,
    pub mode: Mode,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            expression: None,
            from: DEFAULT_FROM,
            to: DEFAULT_TO,
            samples: DEFAULT_SAMPLES,
            mode: Mode::Interactive,
            verbose: false,
        }
    }
}

/// Command-line errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(&'static str),
    InvalidNumber { flag: &'static str, value: String },
    NonFiniteBound(&'static str),
    EmptyInterval(f64),
    TooFewSamples(usize),
    ConflictingModes,
    ExtraExpression(String),
    MissingExpression,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue(flag) => write!(f, "Option '{}' needs a value", flag),
            ConfigError::InvalidNumber { flag, value } => {
                write!(f, "Invalid value '{}' for '{}'", value, flag)
            }
            ConfigError::NonFiniteBound(flag) => write!(f, "'{}' must be a finite number", flag),
            ConfigError::EmptyInterval(at) => {
                write!(f, "Interval is empty: --from and --to are both {}", at)
            }
            ConfigError::TooFewSamples(n) => {
                write!(f, "At least {} samples are needed, got {}", MIN_SAMPLES, n)
            }
            ConfigError::ConflictingModes => write!(f, "'--table' and '--eval' cannot be combined"),
            ConfigError::ExtraExpression(text) => {
                write!(f, "Only one expression is allowed, also got '{}'", text)
            }
            ConfigError::MissingExpression => {
                write!(f, "An expression is required with '--table' or '--eval'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Build a configuration from command-line arguments, excluding the
    /// program name.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut table = false;
        let mut points = Vec::new();
        let mut args = args.into_iter();
        let mut options_done = false;

        while let Some(arg) = args.next() {
            if options_done {
                config.set_expression(arg)?;
                continue;
            }

            match arg.as_str() {
                "-h" | "--help" => {
                    config.mode = Mode::Help;
                    return Ok(config);
                }
                "-v" | "--verbose" => config.verbose = true,
                "--table" => table = true,
                "--from" => config.from = number(&mut args, "--from")?,
                "--to" => config.to = number(&mut args, "--to")?,
                "--eval" => points.push(number(&mut args, "--eval")?),
                "-n" | "--samples" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--samples"))?;
                    config.samples = value.parse().map_err(|_| ConfigError::InvalidNumber {
                        flag: "--samples",
                        value,
                    })?;
                }
                "--" => options_done = true,
                // "-x" and "--x" are expressions, not flags
                flag if is_long_flag(flag) || is_short_flag(flag) => {
                    return Err(ConfigError::UnknownFlag(arg));
                }
                _ => config.set_expression(arg)?,
            }
        }

        if config.from == config.to {
            return Err(ConfigError::EmptyInterval(config.from));
        }
        if config.samples < MIN_SAMPLES {
            return Err(ConfigError::TooFewSamples(config.samples));
        }

        config.mode = match (table, points.is_empty()) {
            (true, false) => return Err(ConfigError::ConflictingModes),
            (true, true) => Mode::Table,
            (false, false) => Mode::Evaluate(points),
            (false, true) => Mode::Interactive,
        };

        if config.mode != Mode::Interactive && config.expression.is_none() {
            return Err(ConfigError::MissingExpression);
        }

        Ok(config)
    }

    fn set_expression(&mut self, text: String) -> Result<(), ConfigError> {
        if self.expression.is_some() {
            return Err(ConfigError::ExtraExpression(text));
        }
        self.expression = Some(text);
        Ok(())
    }
}

fn number<I>(args: &mut I, flag: &'static str) -> Result<f64, ConfigError>
where
    I: Iterator<Item = String>,
{
    let value = args.next().ok_or(ConfigError::MissingValue(flag))?;
    let parsed: f64 = value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { flag, value })?;

    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(ConfigError::NonFiniteBound(flag))
    }
}

/// `--name`-style flags made of letters and hyphens, other than `--x`.
fn is_long_flag(arg: &str) -> bool {
    arg.strip_prefix("--").is_some_and(|name| {
        name.starts_with(|c: char| c.is_ascii_alphabetic())
            && name.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
            && !name.eq_ignore_ascii_case("x")
    })
}

/// `-q`-style flags; a leading minus followed by expression text is not one.
fn is_short_flag(arg: &str) -> bool {
    let mut chars = arg.chars();
    chars.next() == Some('-')
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic() && c != 'x' && c != 'X')
        && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.mode, Mode::Interactive);
    }

    #[test]
    fn test_full_command_line() {
        let config = parse(&["--from", "0", "--to", "2.5", "-n", "11", "--table", "-v", "x^2"]).unwrap();
        assert_eq!(config.from, 0.0);
        assert_eq!(config.to, 2.5);
        assert_eq!(config.samples, 11);
        assert_eq!(config.mode, Mode::Table);
        assert!(config.verbose);
        assert_eq!(config.expression.as_deref(), Some("x^2"));
    }

    #[test]
    fn test_eval_points() {
        let config = parse(&["--eval", "1", "--eval", "-2", "-x"]).unwrap();
        assert_eq!(config.mode, Mode::Evaluate(vec![1.0, -2.0]));
        assert_eq!(config.expression.as_deref(), Some("-x"));
    }

    #[test]
    fn test_double_negation_expression() {
        let config = parse(&["--table", "--x"]).unwrap();
        assert_eq!(config.mode, Mode::Table);
        assert_eq!(config.expression.as_deref(), Some("--x"));

        let config = parse(&["--eval", "1", "--", "--x"]).unwrap();
        assert_eq!(config.mode, Mode::Evaluate(vec![1.0]));
        assert_eq!(config.expression.as_deref(), Some("--x"));

        let config = parse(&["--", "--sin(x)"]).unwrap();
        assert_eq!(config.expression.as_deref(), Some("--sin(x)"));
    }

    #[test]
    fn test_end_of_options() {
        let config = parse(&["--", "--table"]).unwrap();
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.expression.as_deref(), Some("--table"));

        assert_eq!(parse(&["--", "x", "-h"]).unwrap_err(), ConfigError::ExtraExpression("-h".to_string()));
        assert_eq!(parse(&["--tabel", "x"]).unwrap_err(), ConfigError::UnknownFlag("--tabel".to_string()));
    }

    #[test]
    fn test_help_short_circuits() {
        assert_eq!(parse(&["--bogus-later", "-h"]).unwrap_err(), ConfigError::UnknownFlag("--bogus-later".to_string()));
        assert_eq!(parse(&["-h", "--bogus"]).unwrap().mode, Mode::Help);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(&["--from"]).unwrap_err(), ConfigError::MissingValue("--from"));
        assert!(matches!(parse(&["--to", "abc"]).unwrap_err(), ConfigError::InvalidNumber { flag: "--to", .. }));
        assert_eq!(parse(&["--from", "inf"]).unwrap_err(), ConfigError::NonFiniteBound("--from"));
        assert_eq!(parse(&["--from", "1", "--to", "1"]).unwrap_err(), ConfigError::EmptyInterval(1.0));
        assert_eq!(parse(&["-n", "1"]).unwrap_err(), ConfigError::TooFewSamples(1));
        assert_eq!(parse(&["--table", "--eval", "1", "x"]).unwrap_err(), ConfigError::ConflictingModes);
        assert_eq!(parse(&["x", "2x"]).unwrap_err(), ConfigError::ExtraExpression("2x".to_string()));
        assert_eq!(parse(&["--table"]).unwrap_err(), ConfigError::MissingExpression);
        assert_eq!(parse(&["-q"]).unwrap_err(), ConfigError::UnknownFlag("-q".to_string()));
    }
}
