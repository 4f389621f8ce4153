//! Output formatting for human and JSON modes
//!
//! Human rendering colors the verdict and agent statuses with `colored`;
//! the configured theme only selects the accent used for section
//! headings. JSON mode prints the raw result and ignores theming.

use colored::{ColoredString, Colorize};

use crate::config::Theme;
use crate::models::{AgentStatus, Verdict, VerificationResult};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Render a verification result to stdout
pub fn print_result(result: &VerificationResult, mode: OutputMode, theme: Theme) {
    match mode {
        OutputMode::Human => print!("{}", format_result(result, theme)),
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(result).unwrap_or_default());
        },
    }
}

/// Human rendering of a verification result
#[must_use]
pub fn format_result(result: &VerificationResult, theme: Theme) -> String {
    let mut out = String::new();
    let verdict = result.verdict();

    out.push_str(&format!("{} {}\n", heading("Verdict:", theme), verdict_label(verdict)));
    if result.final_verdict != verdict.to_string() {
        // The raw token can carry nuance beyond the binary label
        out.push_str(&format!("  ({})\n", result.final_verdict));
    }
    out.push_str(&format!("{} {}%\n", heading("Confidence:", theme), result.confidence_score));
    out.push_str(&format!("{} {}\n", heading("Summary:", theme), result.summary));

    if !result.agents.is_empty() {
        out.push_str(&format!("\n{}\n", heading("Agents:", theme)));
        for agent in &result.agents {
            out.push_str(&format!("  [{}] {}\n", status_label(agent.status), agent.name));
            out.push_str(&format!("      {}\n", agent.log));
        }
    }

    if !result.rag_sources.is_empty() {
        out.push_str(&format!("\n{}\n", heading("Sources:", theme)));
        for (index, source) in result.rag_sources.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", index + 1, source));
        }
    }

    if result.fixable() {
        out.push_str("\nRun 'truthforge fix' with the same inputs for a corrected solution,\n");
        out.push_str("or re-run verify with --fix.\n");
    }

    out
}

/// Render a corrected solution to stdout
pub fn print_fixed(text: &str, mode: OutputMode) {
    match mode {
        OutputMode::Human => {
            println!();
            println!("Corrected solution:");
            println!();
            println!("{text}");
        },
        OutputMode::Json => {
            println!("{}", serde_json::json!({ "fixed_solution": text }));
        },
    }
}

fn verdict_label(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Pass => "PASS".green().bold(),
        Verdict::Fail => "FAIL".red().bold(),
    }
}

fn status_label(status: AgentStatus) -> ColoredString {
    match status {
        AgentStatus::Danger => "danger".red(),
        AgentStatus::Warning => "warning".yellow(),
        AgentStatus::Success => "success".green(),
    }
}

fn heading(text: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Dark => text.cyan(),
        Theme::Light => text.blue(),
    }
}
