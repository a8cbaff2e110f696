//! Trait abstraction for governance contract operations.
//!
//! Enables mock implementations for unit testing. The contract's lifecycle
//! rules (tallying, quorum, deadlines, execution authorization) live behind
//! this boundary and are never re-implemented on the client side.

use super::types::{Proposal, ProposalId, TxHash, TxReceipt};
use crate::wallet::provider::RequestSigner;
use async_trait::async_trait;

/// Result type for contract operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Contract boundary errors.
///
/// Causes are distinguished so the presentation layer can report what
/// actually went wrong; callers that only care about degradation treat every
/// variant the same way.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// HTTP transport failure (connection refused, DNS, timeout at the
    /// protocol level).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The contract rejected the call during execution.
    #[error("contract call reverted: {0}")]
    Reverted(String),

    /// The endpoint answered with something we could not decode.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The transaction left the pool without being sealed into a block.
    #[error("transaction {0} dropped before settlement")]
    Dropped(TxHash),
}

/// Governance contract client.
///
/// Mirrors the contract's fixed function surface. The read methods require no
/// identity. Every write method submits through the given signer and does not
/// return until the call has settled on chain (or failed), so a returned
/// receipt always refers to a sealed transaction. No write can be cancelled
/// once submitted, and no client-side timeout is applied; waiting is delegated
/// to the contract execution environment.
#[async_trait]
pub trait GovernanceClient: Send + Sync {
    /// Read the total number of proposals ever created.
    async fn proposal_count(&self) -> ChainResult<u64>;

    /// Read one proposal by ordinal index.
    async fn proposal(&self, id: ProposalId) -> ChainResult<Proposal>;

    /// Create a new proposal and await settlement.
    async fn create_proposal(
        &self,
        description: &str,
        signer: &RequestSigner,
    ) -> ChainResult<TxReceipt>;

    /// Cast a vote for (`support = true`) or against a proposal and await
    /// settlement.
    async fn vote(
        &self,
        id: ProposalId,
        support: bool,
        signer: &RequestSigner,
    ) -> ChainResult<TxReceipt>;

    /// Trigger execution of a resolved proposal and await settlement.
    async fn execute_proposal(
        &self,
        id: ProposalId,
        signer: &RequestSigner,
    ) -> ChainResult<TxReceipt>;
}
