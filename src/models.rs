//! Data model for verification requests and results
//!
//! Mirrors the JSON contract of the TruthForge service: a flat request of
//! three text fields, and a result carrying per-agent findings, a verdict
//! token, a confidence percentage and retrieval citations.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// A verification request: the claim, the answer under test, and any
/// user-supplied rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// The claim or spec the answer is checked against
    pub spec: String,

    /// The answer to verify
    pub answer: String,

    /// Rules or standards the answer must follow (empty when omitted)
    #[serde(default)]
    pub rules: String,
}

impl VerificationRequest {
    /// Create a request; `rules` defaults to empty when `None`
    #[must_use]
    pub fn new(spec: impl Into<String>, answer: impl Into<String>, rules: Option<String>) -> Self {
        Self {
            spec: spec.into(),
            answer: answer.into(),
            rules: rules.unwrap_or_default(),
        }
    }

    /// Check that the required fields are present.
    ///
    /// `spec` and `answer` must be non-blank; `rules` may be empty.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.spec.trim().is_empty() {
            return Err(ClientError::Validation("spec must not be empty".to_string()));
        }
        if self.answer.trim().is_empty() {
            return Err(ClientError::Validation("answer must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Reported status of a single backend agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AgentStatus {
    /// The agent found a blocking problem
    Danger,
    /// The agent is satisfied
    Success,
    /// The agent has reservations
    Warning,
}

impl From<String> for AgentStatus {
    // The service relays model-generated JSON verbatim; unknown status
    // strings (it has been seen emitting "warning/success") degrade to
    // Warning instead of failing the whole response.
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "danger" => Self::Danger,
            "success" => Self::Success,
            _ => Self::Warning,
        }
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Danger => write!(f, "danger"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// One agent's finding within a verification result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentLog {
    /// Agent identifier (e.g. "Falsifier", "Compliance")
    pub name: String,

    /// Severity reported by the agent
    pub status: AgentStatus,

    /// The agent's reasoning log
    pub log: String,
}

/// Result of a verification call, held until the next submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Per-agent findings, in service order
    #[serde(default)]
    pub agents: Vec<AgentLog>,

    /// Raw verdict token; any token containing "PASS" counts as passing
    pub final_verdict: String,

    /// Confidence percentage (0-100)
    pub confidence_score: u8,

    /// Service summary, including the detected domain
    pub summary: String,

    /// Retrieval citations supporting the verdict, in service order
    #[serde(default)]
    pub rag_sources: Vec<String>,
}

impl VerificationResult {
    /// Derive the pass/fail reading of the verdict token
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::from_token(&self.final_verdict)
    }

    /// Whether a corrected solution may be requested for this result
    #[must_use]
    pub fn fixable(&self) -> bool {
        !self.verdict().passed()
    }
}

/// Binary reading of the service's verdict token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The answer passed verification
    Pass,
    /// The answer did not pass (includes service "ERROR" verdicts)
    Fail,
}

impl Verdict {
    /// A token containing "PASS" is positive; anything else is negative
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.contains("PASS") {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Whether this is a passing verdict
    #[must_use]
    pub const fn passed(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// A corrected solution produced by the fix endpoint.
///
/// Only meaningful alongside the non-passing result that prompted it;
/// a new submission invalidates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedSolution {
    /// The corrected answer text (markdown)
    pub fixed_solution: String,
}
