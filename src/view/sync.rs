//! The proposal view synchronizer.
//!
//! Read path: `refresh` fetches the proposal count, then each proposal by
//! index from 0 to count−1, and replaces the displayed list with the new
//! snapshot. A failure at any step degrades the list to empty (never
//! partial) and surfaces the cause.
//!
//! Write path: `submit_create` / `submit_vote` / `submit_execute` send a
//! mutating call through the connected session, wait for settlement, then
//! trigger exactly one refresh. Failures return the view to idle with the
//! reason surfaced.

use crate::chain::traits::{ChainError, GovernanceClient};
use crate::chain::types::{Address, Proposal, ProposalId, TxReceipt};
use crate::view::state::{ViewState, WriteKind, WritePhase};
use crate::wallet::session::Session;
use std::mem;
use thiserror::Error;

/// Result type for synchronizer operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Synchronizer errors, all surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A write was attempted without a connected wallet session.
    #[error("no wallet session; connect a wallet first")]
    NotConnected,

    /// A write was attempted while another one is in flight.
    #[error("another submission is already in flight")]
    Busy,

    /// `submit_create` was invoked with an empty draft description.
    #[error("proposal description must not be empty")]
    EmptyDescription,

    /// The refresh read path failed; the displayed list is now empty.
    #[error("refresh failed: {0}")]
    Read(#[source] ChainError),

    /// A mutating call failed before or during settlement.
    #[error("submission failed: {0}")]
    Write(#[source] ChainError),
}

/// Drives the proposal view against a governance contract.
///
/// Owns the view state exclusively; every operation takes `&mut self`, so a
/// single view can never race itself. The write phase additionally rejects
/// re-entrant submissions with [`SyncError::Busy`] and is what the UI reads
/// to disable actions.
pub struct Synchronizer<C> {
    chain: C,
    state: ViewState,
}

impl<C: GovernanceClient> Synchronizer<C> {
    /// Create a synchronizer with a fresh, empty view.
    pub fn new(chain: C) -> Self {
        Self {
            chain,
            state: ViewState::new(),
        }
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Mirror the connected account into the view (enables write actions in
    /// the rendered board).
    pub fn connect_account(&mut self, account: Address) {
        self.transition(|s| s.with_account(account));
    }

    /// Set the draft description for the next `submit_create`.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        let draft = draft.into();
        self.transition(|s| s.with_draft(draft));
    }

    fn transition(&mut self, f: impl FnOnce(ViewState) -> ViewState) {
        self.state = f(mem::take(&mut self.state));
    }

    /// Refresh the displayed snapshot. Requires no connected identity.
    ///
    /// Issues exactly count+1 reads when every read succeeds. On any
    /// failure the displayed list becomes empty, the cause is recorded on
    /// the state, and [`SyncError::Read`] is returned.
    pub async fn refresh(&mut self) -> SyncResult<()> {
        self.transition(|s| s.with_phase(WritePhase::Refreshing));
        let outcome = self.fetch_snapshot().await;
        match outcome {
            Ok(snapshot) => {
                tracing::debug!(proposals = snapshot.len(), "snapshot refreshed");
                self.transition(|s| s.with_snapshot(snapshot).with_phase(WritePhase::Idle));
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "refresh failed, degrading to empty list");
                self.transition(|s| {
                    s.with_empty_snapshot()
                        .with_error(error.to_string())
                        .with_phase(WritePhase::Idle)
                });
                Err(SyncError::Read(error))
            }
        }
    }

    async fn fetch_snapshot(&self) -> Result<Vec<Proposal>, ChainError> {
        let count = self.chain.proposal_count().await?;
        let mut snapshot = Vec::with_capacity(count as usize);
        for id in 0..count {
            snapshot.push(self.chain.proposal(id).await?);
        }
        Ok(snapshot)
    }

    /// Create a proposal from the current draft.
    ///
    /// Requires a connected session and a non-empty draft; performs no
    /// contract call otherwise. After settlement the draft is cleared and
    /// one refresh runs. A refresh failure after a settled write surfaces
    /// as [`SyncError::Read`].
    pub async fn submit_create(&mut self, session: &Session) -> SyncResult<TxReceipt> {
        let signer = session.signer().ok_or(SyncError::NotConnected)?;
        if !self.state.can_submit() {
            return Err(SyncError::Busy);
        }
        let description = self.state.draft_description.trim().to_string();
        if description.is_empty() {
            return Err(SyncError::EmptyDescription);
        }

        self.transition(|s| s.with_phase(WritePhase::Submitting(WriteKind::Create)));
        let outcome = self.chain.create_proposal(&description, signer).await;
        match outcome {
            Ok(receipt) => {
                tracing::info!(tx = %receipt.hash, "proposal creation settled");
                self.transition(ViewState::draft_cleared);
                self.refresh().await?;
                Ok(receipt)
            }
            Err(error) => Err(self.fail_write(error)),
        }
    }

    /// Vote for (`support = true`) or against a proposal, then refresh once.
    pub async fn submit_vote(
        &mut self,
        session: &Session,
        id: ProposalId,
        support: bool,
    ) -> SyncResult<TxReceipt> {
        let signer = session.signer().ok_or(SyncError::NotConnected)?;
        if !self.state.can_submit() {
            return Err(SyncError::Busy);
        }

        self.transition(|s| s.with_phase(WritePhase::Submitting(WriteKind::Vote)));
        let outcome = self.chain.vote(id, support, signer).await;
        match outcome {
            Ok(receipt) => {
                tracing::info!(tx = %receipt.hash, proposal = id, support, "vote settled");
                self.refresh().await?;
                Ok(receipt)
            }
            Err(error) => Err(self.fail_write(error)),
        }
    }

    /// Trigger execution of a resolved proposal, then refresh once.
    pub async fn submit_execute(
        &mut self,
        session: &Session,
        id: ProposalId,
    ) -> SyncResult<TxReceipt> {
        let signer = session.signer().ok_or(SyncError::NotConnected)?;
        if !self.state.can_submit() {
            return Err(SyncError::Busy);
        }

        self.transition(|s| s.with_phase(WritePhase::Submitting(WriteKind::Execute)));
        let outcome = self.chain.execute_proposal(id, signer).await;
        match outcome {
            Ok(receipt) => {
                tracing::info!(tx = %receipt.hash, proposal = id, "execution settled");
                self.refresh().await?;
                Ok(receipt)
            }
            Err(error) => Err(self.fail_write(error)),
        }
    }

    fn fail_write(&mut self, error: ChainError) -> SyncError {
        tracing::warn!(%error, "submission failed");
        self.transition(|s| {
            s.with_error(error.to_string())
                .with_phase(WritePhase::Idle)
        });
        SyncError::Write(error)
    }
}
