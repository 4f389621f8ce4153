//! Verify command - submit an answer for verification and render the verdict

use std::path::PathBuf;

use anyhow::Context;

use truthforge::client::ApiClient;
use truthforge::config::Theme;
use truthforge::models::VerificationRequest;
use truthforge::output::{self, OutputMode};
use truthforge::report;
use truthforge::session::Session;

use super::read_input;

/// Inputs to the verify command
#[derive(Debug)]
pub struct VerifyArgs {
    /// Claim or spec text, or `@file`
    pub spec: String,

    /// Answer text, or `@file`
    pub answer: String,

    /// Optional rules text, or `@file`
    pub rules: Option<String>,

    /// Request a corrected solution on a non-passing verdict
    pub fix: bool,

    /// Optional path for a flat text report of the result
    pub report: Option<PathBuf>,
}

/// Submit a verification request and render the outcome.
///
/// Exits with code 1 on a non-passing verdict so the tool composes in
/// scripts and CI.
pub fn verify(
    args: &VerifyArgs,
    api_url: &str,
    mode: OutputMode,
    theme: Theme,
) -> anyhow::Result<()> {
    let spec = read_input(&args.spec)?;
    let answer = read_input(&args.answer)?;
    let rules = args.rules.as_deref().map(read_input).transpose()?;

    let request = VerificationRequest::new(spec, answer, rules);
    request.validate()?;

    let client = ApiClient::new(api_url)?;
    let mut session = Session::new();

    let generation = session.begin_submit();
    log::debug!("submitting verification request (generation {generation})");

    let outcome = client.verify(&request);
    session.apply_result(generation, outcome.clone());
    outcome?;

    let result = session.result().context("no result recorded")?.clone();
    output::print_result(&result, mode, theme);

    if let Some(path) = &args.report {
        std::fs::write(path, report::render(&result))
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        if mode == OutputMode::Human {
            println!("\nReport written to {}", path.display());
        }
    }

    if args.fix
        && let Some(fix_generation) = session.begin_fix()
    {
        let fix_outcome = client.request_fix(&request);
        session.apply_fix(fix_generation, fix_outcome.clone());
        fix_outcome?;

        if let Some(text) = session.fixed_solution() {
            output::print_fixed(text, mode);
        }
    }

    if !result.verdict().passed() {
        std::process::exit(1);
    }

    Ok(())
}
