//! Immutable view state.
//!
//! All UI-visible state lives in one `ViewState` value updated only through
//! the transitions below; there are no ambient mutable variables. Each
//! transition consumes the old state and returns the new one.

use crate::chain::types::{Address, Proposal};

/// Which write action is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Create,
    Vote,
    Execute,
}

/// Write-action phase: Idle → Submitting → Refreshing → Idle.
///
/// Advisory UI state. It is what disables actions while a write is in
/// flight; exclusion itself comes from the synchronizer's exclusive borrow.
/// There is no Cancelled state: once submitted, a write cannot be aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePhase {
    #[default]
    Idle,
    Submitting(WriteKind),
    Refreshing,
}

/// The complete displayed state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Connected account, if any.
    pub account: Option<Address>,
    /// Current proposal snapshot, replaced wholesale on every refresh.
    pub proposals: Vec<Proposal>,
    /// Draft description for the next created proposal.
    pub draft_description: String,
    /// In-flight write phase.
    pub phase: WritePhase,
    /// Most recent surfaced failure, cleared by the next successful refresh.
    pub last_error: Option<String>,
}

impl ViewState {
    /// Fresh, unconnected, empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the connected account.
    pub fn with_account(mut self, account: Address) -> Self {
        self.account = Some(account);
        self
    }

    /// Set the draft description.
    pub fn with_draft(mut self, draft: impl Into<String>) -> Self {
        self.draft_description = draft.into();
        self
    }

    /// Clear the draft description (after a settled create).
    pub fn draft_cleared(mut self) -> Self {
        self.draft_description.clear();
        self
    }

    /// Replace the snapshot wholesale and clear any surfaced error.
    pub fn with_snapshot(mut self, proposals: Vec<Proposal>) -> Self {
        self.proposals = proposals;
        self.last_error = None;
        self
    }

    /// Degrade to an empty snapshot (a refresh failed part-way; partial
    /// lists are never shown).
    pub fn with_empty_snapshot(mut self) -> Self {
        self.proposals.clear();
        self
    }

    /// Record a surfaced failure.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.last_error = Some(error.into());
        self
    }

    /// Move to the given phase.
    pub fn with_phase(mut self, phase: WritePhase) -> Self {
        self.phase = phase;
        self
    }

    /// Whether a new submission may start.
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, WritePhase::Idle)
    }
}
