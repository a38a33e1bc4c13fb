//! balance REPL: the command-line face of balance.
//!
//! Two modes, chosen by [`Cli::one_shot_input`]:
//!
//! - **One-shot**: validate the given input, print the verdict, exit 0 when
//!   valid and 1 when invalid.
//! - **Interactive**: read lines with rustyline and print a verdict for each
//!   until the user types `exit` (any case) or sends EOF.

pub mod cli;
pub mod config;
pub mod exit_codes;
pub mod paths;
pub mod render;

use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use balance_kernel::validate;

pub use cli::Cli;
pub use config::{ColorChoice, ReplConfig};
pub use render::{OutputFormat, Renderer};

/// What the REPL should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print this and read the next line.
    Continue(String),
    /// Leave the loop.
    Exit,
}

/// Per-line REPL logic, separated from the editor so it can be driven by tests.
#[derive(Debug, Clone, Default)]
pub struct Repl {
    renderer: Renderer,
}

impl Repl {
    pub fn new(renderer: Renderer) -> Self {
        Self { renderer }
    }

    /// Process a single line of input.
    pub fn process_line(&self, line: &str) -> Result<Step> {
        if line.eq_ignore_ascii_case("exit") {
            return Ok(Step::Exit);
        }

        let verdict = validate(line);
        tracing::debug!(?verdict, chars = line.chars().count(), "validated line");
        Ok(Step::Continue(self.renderer.render(&verdict, line)?))
    }
}

/// Banner printed once when interactive mode starts.
pub fn banner() -> String {
    let rule = "=================================";
    format!("{rule}\n   Bracket Validator\n{rule}\nValidates (), [], and {{}} brackets\n")
}

/// Resolve config and flags, then run one-shot or interactive mode.
///
/// Returns the process exit code.
pub fn dispatch(cli: Cli) -> Result<u8> {
    let mut config = ReplConfig::load(cli.config.as_deref())?;
    if let Some(color) = cli.color {
        config.color = color;
    }
    if cli.no_history {
        config.history = false;
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let renderer = Renderer::new(format, config.color.enabled());

    match cli.one_shot_input() {
        Some(input) => check_once(&input, &renderer),
        None => {
            run(&config, renderer)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Validate `input` once, print the verdict, and return the exit code.
pub fn check_once(input: &str, renderer: &Renderer) -> Result<u8> {
    let verdict = validate(input);
    tracing::debug!(?verdict, chars = input.chars().count(), "validated input");
    println!("{}", renderer.render(&verdict, input)?);

    Ok(if verdict.is_valid() {
        exit_codes::SUCCESS
    } else {
        exit_codes::INVALID
    })
}

/// Run the interactive REPL.
pub fn run(config: &ReplConfig, renderer: Renderer) -> Result<()> {
    println!("{}", banner());

    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;

    let history_path = config.history.then(paths::history_file);
    if let Some(ref path) = history_path {
        // Missing on first run.
        let _ = rl.load_history(path);
    }

    let repl = Repl::new(renderer);
    tracing::info!(history = history_path.is_some(), "interactive mode started");

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                match repl.process_line(&line)? {
                    Step::Continue(output) => println!("{output}"),
                    Step::Exit => {
                        println!("Goodbye!");
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => return Err(err).context("Failed to read line"),
        }
    }

    if let Some(ref path) = history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), %err, "failed to save history");
        }
    }

    tracing::info!("interactive mode finished");
    Ok(())
}
