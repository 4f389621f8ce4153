//! Tests for the report exporter

use truthforge::models::{AgentLog, AgentStatus, VerificationResult};
use truthforge::report;

fn two_agent_result() -> VerificationResult {
    VerificationResult {
        agents: vec![
            AgentLog {
                name: "Falsifier".to_string(),
                status: AgentStatus::Danger,
                log: "The mix is under-specified.".to_string(),
            },
            AgentLog {
                name: "Compliance".to_string(),
                status: AgentStatus::Warning,
                log: "Citing [EN 1992-1-1].".to_string(),
            },
        ],
        final_verdict: "FAIL".to_string(),
        confidence_score: 40,
        summary: "Civil engineering domain; the answer is non-compliant.".to_string(),
        rag_sources: vec![
            "EN 1992-1-1: Design of concrete structures".to_string(),
            "EN 206: Concrete specification".to_string(),
        ],
    }
}

#[test]
fn report_contains_verdict_summary_agents_and_sources() {
    let doc = report::render(&two_agent_result());

    assert!(doc.contains("Verdict: FAIL"));
    assert!(doc.contains("Confidence: 40%"));
    assert!(doc.contains("Civil engineering domain; the answer is non-compliant."));
    assert!(doc.contains("Falsifier: The mix is under-specified."));
    assert!(doc.contains("Compliance: Citing [EN 1992-1-1]."));
    assert!(doc.contains("1. EN 1992-1-1: Design of concrete structures"));
    assert!(doc.contains("2. EN 206: Concrete specification"));
}

#[test]
fn report_preserves_original_order() {
    let doc = report::render(&two_agent_result());

    let falsifier = doc.find("Falsifier:").unwrap();
    let compliance = doc.find("Compliance:").unwrap();
    assert!(falsifier < compliance);

    let first = doc.find("EN 1992-1-1: Design").unwrap();
    let second = doc.find("EN 206:").unwrap();
    assert!(first < second);
}

#[test]
fn report_without_agents_or_sources_still_renders() {
    let result = VerificationResult {
        agents: vec![],
        final_verdict: "PASS".to_string(),
        confidence_score: 95,
        summary: "Looks right.".to_string(),
        rag_sources: vec![],
    };

    let doc = report::render(&result);
    assert!(doc.contains("Verdict: PASS"));
    assert!(doc.contains("Confidence: 95%"));
    assert!(doc.contains("Looks right."));
    assert!(!doc.contains("Agent findings:"));
    assert!(!doc.contains("Sources:"));
}

#[test]
fn report_carries_a_generation_timestamp() {
    let doc = report::render(&two_agent_result());
    assert!(doc.contains("Generated: "));
}
