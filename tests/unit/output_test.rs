//! Tests for output formatting
//!
//! Color codes wrap the labels without altering the text, so substring
//! assertions hold in both colored and plain environments.

use truthforge::config::Theme;
use truthforge::models::{AgentLog, AgentStatus, VerificationResult};
use truthforge::output::{OutputMode, format_result};

fn failing_result() -> VerificationResult {
    VerificationResult {
        agents: vec![AgentLog {
            name: "Falsifier".to_string(),
            status: AgentStatus::Danger,
            log: "The claim is unsupported.".to_string(),
        }],
        final_verdict: "FAIL".to_string(),
        confidence_score: 40,
        summary: "S".to_string(),
        rag_sources: vec!["GDPR Art. 17: Right to erasure".to_string()],
    }
}

#[test]
fn output_mode_default_is_human() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn failing_result_shows_negative_verdict_and_fix_hint() {
    let out = format_result(&failing_result(), Theme::Dark);

    assert!(out.contains("FAIL"));
    assert!(out.contains("40%"));
    assert!(out.contains("S"));
    assert!(out.contains("Falsifier"));
    assert!(out.contains("danger"));
    assert!(out.contains("GDPR Art. 17"));
    assert!(out.contains("truthforge fix"));
}

#[test]
fn passing_result_shows_positive_verdict_without_fix_hint() {
    let result = VerificationResult {
        agents: vec![],
        final_verdict: "PASS".to_string(),
        confidence_score: 95,
        summary: "All good.".to_string(),
        rag_sources: vec![],
    };

    let out = format_result(&result, Theme::Dark);
    assert!(out.contains("PASS"));
    assert!(out.contains("95%"));
    assert!(!out.contains("truthforge fix"));
}

#[test]
fn nuanced_verdict_token_is_echoed() {
    let mut result = failing_result();
    result.final_verdict = "PASS (with reservations)".to_string();

    let out = format_result(&result, Theme::Light);
    assert!(out.contains("PASS (with reservations)"));
}

#[test]
fn result_serializes_for_json_mode() {
    let json = serde_json::to_string_pretty(&failing_result()).unwrap();
    assert!(json.contains("\"final_verdict\": \"FAIL\""));
    assert!(json.contains("\"confidence_score\": 40"));
    assert!(json.contains("\"rag_sources\""));
}
