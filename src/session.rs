//! Result-presentation state machine
//!
//! Holds the shared result state between submissions: `Idle` →
//! `Submitting` → `Resolved` | `Failed`, with a fix sub-state on a
//! resolved non-passing verdict. Every submission is tagged with a
//! monotonically increasing generation number; a response is applied
//! only if it belongs to the latest generation, so a stale response can
//! never overwrite a newer submission's state.
//!
//! State lives and dies with the process; nothing is persisted. All
//! states are transient - the session always accepts a new submission.

use crate::error::ClientError;
use crate::models::{FixedSolution, VerificationResult};

/// Generation number tagging an in-flight request
pub type Generation = u64;

/// Lifecycle of the displayed verification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No submission yet
    #[default]
    Idle,
    /// A verification request is in flight
    Submitting,
    /// A result arrived and is displayed
    Resolved,
    /// The last submission failed; no result is displayed
    Failed,
}

/// Sub-state of a fix request on a resolved result
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum FixState {
    #[default]
    NotRequested,
    Requested,
    Resolved(String),
    Failed,
}

/// In-memory session holding the current result and fix state
#[derive(Debug, Default)]
pub struct Session {
    generation: Generation,
    state: SessionState,
    result: Option<VerificationResult>,
    fix: FixState,
}

impl Session {
    /// Create an idle session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The displayed result, if any
    #[must_use]
    pub const fn result(&self) -> Option<&VerificationResult> {
        self.result.as_ref()
    }

    /// The displayed corrected solution, if any
    #[must_use]
    pub fn fixed_solution(&self) -> Option<&str> {
        match &self.fix {
            FixState::Resolved(text) => Some(text),
            _ => None,
        }
    }

    /// Begin a new submission.
    ///
    /// Clears any prior result and fixed solution and returns the
    /// generation number tagging this submission. Allowed from any
    /// state; an older in-flight request is thereby outdated.
    pub fn begin_submit(&mut self) -> Generation {
        self.generation += 1;
        self.state = SessionState::Submitting;
        self.result = None;
        self.fix = FixState::NotRequested;
        self.generation
    }

    /// Apply the outcome of a verification call.
    ///
    /// Returns `false` if the outcome was discarded because a newer
    /// submission started after `generation` was issued. A failed call
    /// leaves the session with no result, not stale data.
    pub fn apply_result(
        &mut self,
        generation: Generation,
        outcome: Result<VerificationResult, ClientError>,
    ) -> bool {
        if generation != self.generation {
            log::debug!("discarding stale verification response (generation {generation})");
            return false;
        }
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.state = SessionState::Resolved;
            },
            Err(_) => {
                self.result = None;
                self.state = SessionState::Failed;
            },
        }
        true
    }

    /// Whether a fix may be requested: a resolved, non-passing verdict
    #[must_use]
    pub fn can_request_fix(&self) -> bool {
        self.state == SessionState::Resolved
            && self.result.as_ref().is_some_and(VerificationResult::fixable)
    }

    /// Begin a fix request.
    ///
    /// Returns the generation tagging it, or `None` when the current
    /// state does not offer a fix.
    pub fn begin_fix(&mut self) -> Option<Generation> {
        if !self.can_request_fix() {
            return None;
        }
        self.fix = FixState::Requested;
        Some(self.generation)
    }

    /// Apply the outcome of a fix call, under the same generation guard
    /// as [`Self::apply_result`]. A new submission invalidates an
    /// in-flight fix.
    pub fn apply_fix(
        &mut self,
        generation: Generation,
        outcome: Result<FixedSolution, ClientError>,
    ) -> bool {
        if generation != self.generation {
            log::debug!("discarding stale fix response (generation {generation})");
            return false;
        }
        match outcome {
            Ok(fix) => self.fix = FixState::Resolved(fix.fixed_solution),
            Err(_) => self.fix = FixState::Failed,
        }
        true
    }
}
