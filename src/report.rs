//! Report export
//!
//! Renders a verification result to a flat text document for local
//! archiving: verdict, confidence, summary, one `name: log` line per
//! agent and the cited sources, everything in service order. Pure
//! formatting; callers decide where the document goes.

use chrono::Utc;

use crate::models::VerificationResult;

/// Render a result as a flat text report
#[must_use]
pub fn render(result: &VerificationResult) -> String {
    let mut doc = String::new();

    doc.push_str("TruthForge Verification Report\n");
    doc.push_str(&format!("Generated: {}\n\n", Utc::now().to_rfc3339()));

    doc.push_str(&format!("Verdict: {}\n", result.final_verdict));
    doc.push_str(&format!("Confidence: {}%\n\n", result.confidence_score));

    doc.push_str("Summary:\n");
    doc.push_str(result.summary.trim_end());
    doc.push('\n');

    if !result.agents.is_empty() {
        doc.push_str("\nAgent findings:\n");
        for agent in &result.agents {
            doc.push_str(&format!("{}: {}\n", agent.name, agent.log));
        }
    }

    if !result.rag_sources.is_empty() {
        doc.push_str("\nSources:\n");
        for (index, source) in result.rag_sources.iter().enumerate() {
            doc.push_str(&format!("{}. {}\n", index + 1, source));
        }
    }

    doc
}
