//! Command-line arguments.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::ColorChoice;

#[derive(Debug, Parser)]
#[command(
    name = "balance",
    version,
    about = "Check that (), [] and {} are balanced and properly nested",
    long_about = "Check that (), [] and {} are balanced and properly nested.\n\n\
                  With input (--input or positional arguments) the verdict is printed once and \
                  the exit status is 0 when valid, 1 when invalid. Without input an interactive \
                  prompt is started; type `exit` to quit."
)]
pub struct Cli {
    /// Text to validate, taken verbatim. A missing value means the empty string.
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = "",
        allow_hyphen_values = true
    )]
    pub input: Option<String>,

    /// Print verdicts as JSON objects.
    #[arg(long)]
    pub json: bool,

    /// When to use colors. Overrides the config file.
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Config file to use instead of `$XDG_CONFIG_HOME/balance/config.toml`.
    #[arg(long, env = "BALANCE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not read or write interactive history.
    #[arg(long)]
    pub no_history: bool,

    /// Text to validate; multiple arguments are joined with single spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// The input for one-shot mode, or `None` for interactive mode.
    ///
    /// `--input` wins over positional arguments.
    pub fn one_shot_input(&self) -> Option<String> {
        if let Some(input) = &self.input {
            return Some(input.clone());
        }
        if self.args.is_empty() {
            None
        } else {
            Some(self.args.join(" "))
        }
    }
}

/// Rewrite argv so `--input` is honoured wherever it appears.
///
/// One leading `--` is skipped while searching. The first `--input`, `-i` or
/// `--input=TEXT` takes the next argument verbatim (the empty string when none
/// follows) and is moved in front of everything else, so positionals and a
/// leading `--` can no longer swallow it. Without the flag, argv is unchanged.
pub fn normalize_args<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if args.is_empty() {
        return args;
    }

    let mut rest = args.split_off(1);
    let skip = usize::from(rest.first().is_some_and(|a| a == "--"));
    let found = rest
        .iter()
        .skip(skip)
        .position(is_input_flag)
        .map(|i| i + skip);

    if let Some(index) = found {
        let flag = rest.remove(index);
        let value = match flag.to_str().and_then(|s| s.strip_prefix("--input=")) {
            Some(inline) => OsString::from(inline),
            None if index < rest.len() => rest.remove(index),
            None => OsString::new(),
        };
        args.push("--input".into());
        args.push(value);
    }

    args.extend(rest);
    args
}

fn is_input_flag(arg: &OsString) -> bool {
    arg == "--input"
        || arg == "-i"
        || arg.to_str().is_some_and(|s| s.starts_with("--input="))
}
