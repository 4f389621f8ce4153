//! Fix command - request a corrected solution for a failed answer

use truthforge::client::ApiClient;
use truthforge::models::VerificationRequest;
use truthforge::output::{self, OutputMode};

use super::read_input;

/// Request a corrected solution and render it
pub fn fix(
    spec: &str,
    answer: &str,
    rules: Option<&str>,
    api_url: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let spec = read_input(spec)?;
    let answer = read_input(answer)?;
    let rules = rules.map(read_input).transpose()?;

    let request = VerificationRequest::new(spec, answer, rules);
    request.validate()?;

    let client = ApiClient::new(api_url)?;
    let fixed = client.request_fix(&request)?;

    output::print_fixed(&fixed.fixed_solution, mode);
    Ok(())
}
