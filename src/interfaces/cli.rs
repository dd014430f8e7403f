//! Command line surface.
//!
//! ```text
//! label-perf <perf-value> <perf-unit-word>... <greater|less> <filename>
//! ```
//!
//! Arguments are positional only, so clap collects them verbatim and
//! [`Invocation::from_args`] splits them.

use crate::domain::errors::UsageError;
use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "usage: label-perf <perf value> <perf unit> <greater or less> <filename>";

pub const HELP: &str = "\
Take the file containing the program output and compare the performance
value contained in it to the user-supplied performance. We expect that the
performance number will appear in the format '<number> <units>'. The number
and the units should be separated by a single space. For instance, the file
could contain a line with the following words:

       239 micros/op

and the user could supply '200 micros/op greater perf.txt' as the arguments.

Then the program will find the matching performance string in the file
perf.txt, compare the performance to the user-supplied value of 200 micros/op,
and will output 'bad' if the contained performance value is greater than the
user-supplied one, and 'good' if it is less or equal.

Alternatively, we could give arguments like '700 MB/S less perf.txt'. In that
case, the program will output 'bad' if the performance value contained in the
file is smaller than 700 MB/S.

If there are multiple lines containing performance values in the file, the
program averages them before comparing to the user-supplied threshold. If no
line matches, the program outputs 'skip'.

Environment:
  LABEL_PERF_ON_MALFORMED  'fail' (default) or 'skip' non-numeric values
  LABEL_PERF_LOG_LEVEL     default log filter, written to stderr (default: warn)
  LABEL_PERF_CONFIG        optional TOML file with the same settings";

#[derive(Parser, Debug)]
#[command(
    name = "label-perf",
    author,
    version,
    about = "Label benchmark output good, bad or skip against a threshold",
    long_about = HELP,
    override_usage = "label-perf <perf-value> <perf-unit-word>... <greater|less> <filename>"
)]
pub struct Cli {
    /// <perf-value> <perf-unit-word>... <greater|less> <filename>
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_negative_numbers = true
    )]
    pub args: Vec<String>,
}

/// Positional arguments after splitting and validation.
///
/// The direction is kept raw; turning it into a `Threshold` reports an
/// unknown direction as its own error rather than a usage error.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub value: f64,
    pub unit: String,
    pub direction: String,
    pub path: PathBuf,
}

impl Invocation {
    /// Split `<value> <unit words>... <direction> <file>`.
    ///
    /// The unit label is the second argument joined with single spaces to
    /// every argument up to the direction. With exactly three arguments the
    /// unit label and the direction are the same argument.
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        if args.len() < 3 {
            return Err(UsageError::MissingArguments { given: args.len() });
        }

        let n = args.len();
        let value = args[0]
            .trim()
            .parse::<f64>()
            .map_err(|_| UsageError::InvalidThreshold {
                value: args[0].clone(),
            })?;

        let mut unit = args[1].clone();
        for word in args.iter().take(n - 2).skip(2) {
            unit.push(' ');
            unit.push_str(word);
        }

        let direction = args[n - 2].clone();
        let path = PathBuf::from(&args[n - 1]);
        if !path.exists() {
            return Err(UsageError::MissingFile { path });
        }

        Ok(Self {
            value,
            unit,
            direction,
            path,
        })
    }
}

/// Usage line followed by the long help, as printed on a usage error.
pub fn usage_text() -> String {
    format!("\n{}\n\n{}\n", USAGE, HELP)
}
