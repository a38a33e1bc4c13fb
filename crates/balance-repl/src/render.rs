//! Turning a verdict into console text.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use balance_kernel::Verdict;

/// Label before the echoed input.
///
/// The caret line is indented by the label width plus the offending
/// position, landing at column `9 + position` directly under the character
/// rather than at `11 + position`, two columns to its right. Tabs before the
/// position are mirrored as tabs so they expand to the same stops;
/// double-width characters still count as one column.
const INPUT_LABEL: &str = "  Input: ";

const VALID_LINE: &str = "✓ Valid: All brackets are balanced and properly nested.";

/// How verdicts are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Multi-line human text with a caret marker.
    #[default]
    Human,
    /// One JSON object per verdict.
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    format: OutputFormat,
    color: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Render `verdict` for `input`. The result has no trailing newline.
    pub fn render(&self, verdict: &Verdict, input: &str) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(self.human(verdict, input)),
            OutputFormat::Json => {
                serde_json::to_string(verdict).context("Failed to serialize verdict")
            }
        }
    }

    fn human(&self, verdict: &Verdict, input: &str) -> String {
        match verdict {
            Verdict::Valid => format!("\n{}\n", self.green(VALID_LINE)),
            Verdict::Invalid { kind, position } => {
                let headline = format!("✗ Invalid: {kind}");
                let indent = caret_indent(input, *position);
                format!(
                    "\n{}\n  Position: {position}\n{INPUT_LABEL}{input}\n{indent}{}\n",
                    self.red(&headline),
                    self.red("^"),
                )
            }
        }
    }

    fn green(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn red(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Whitespace that lines a caret up under char `position` of the echoed input.
fn caret_indent(input: &str, position: usize) -> String {
    let mut indent = " ".repeat(INPUT_LABEL.len());
    indent.extend(
        input
            .chars()
            .take(position)
            .map(|ch| if ch == '\t' { '\t' } else { ' ' }),
    );
    indent
}
