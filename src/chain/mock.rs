//! Mock governance client for testing.
//!
//! Applies real write semantics to an in-memory proposal table (append, bump
//! tallies, set executed) so that refresh-after-write is observable, records
//! every call for assertions, and injects failures on demand.

use super::traits::{ChainError, ChainResult, GovernanceClient};
use super::types::{Address, Proposal, ProposalId, TxHash, TxReceipt};
use crate::wallet::provider::RequestSigner;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Deadline assigned to proposals created through the mock.
const MOCK_DEADLINE: u64 = 1_800_000_000;

/// One recorded mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedWrite {
    pub from: Address,
    pub call: String,
}

#[derive(Default)]
struct MockState {
    proposals: Vec<Proposal>,
    count_calls: u64,
    proposal_calls: u64,
    writes: Vec<SubmittedWrite>,
    fail_count_read: bool,
    fail_proposal_read: Option<ProposalId>,
    fail_writes: Option<String>,
    next_block: u64,
}

/// Mock governance client for testing.
#[derive(Clone)]
pub struct MockGovernanceClient {
    state: Arc<Mutex<MockState>>,
}

impl MockGovernanceClient {
    /// Create a new mock with an empty proposal table.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Seed a proposal (for test setup). Ids are ordinal and assigned here.
    pub fn seed_proposal(
        &self,
        description: &str,
        votes_for: u64,
        votes_against: u64,
        deadline: u64,
        executed: bool,
    ) -> ProposalId {
        let mut state = self.state.lock().unwrap();
        let id = state.proposals.len() as ProposalId;
        state.proposals.push(Proposal {
            id,
            description: description.to_string(),
            votes_for,
            votes_against,
            deadline,
            executed,
        });
        id
    }

    /// Make `proposal_count` fail until cleared.
    pub fn fail_count_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_count_read = fail;
    }

    /// Make `proposal(id)` fail for the given index until cleared.
    pub fn fail_proposal_read(&self, id: Option<ProposalId>) {
        self.state.lock().unwrap().fail_proposal_read = id;
    }

    /// Make every write fail with the given revert reason until cleared.
    pub fn fail_writes(&self, reason: Option<&str>) {
        self.state.lock().unwrap().fail_writes = reason.map(str::to_string);
    }

    /// Number of `proposal_count` calls issued so far.
    pub fn count_calls(&self) -> u64 {
        self.state.lock().unwrap().count_calls
    }

    /// Number of `proposal(id)` calls issued so far.
    pub fn proposal_calls(&self) -> u64 {
        self.state.lock().unwrap().proposal_calls
    }

    /// Mutating calls recorded so far, in submission order.
    pub fn submitted_writes(&self) -> Vec<SubmittedWrite> {
        self.state.lock().unwrap().writes.clone()
    }

    fn settle_write(
        state: &mut MockState,
        signer: &RequestSigner,
        call: String,
    ) -> ChainResult<TxReceipt> {
        if let Some(reason) = &state.fail_writes {
            return Err(ChainError::Reverted(reason.clone()));
        }
        state.writes.push(SubmittedWrite {
            from: *signer.address(),
            call,
        });
        state.next_block += 1;
        let mut hash = [0u8; 32];
        hash[..8].copy_from_slice(&state.next_block.to_be_bytes());
        Ok(TxReceipt {
            hash: TxHash::from_bytes(&hash),
            block: state.next_block,
        })
    }
}

impl Default for MockGovernanceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GovernanceClient for MockGovernanceClient {
    async fn proposal_count(&self) -> ChainResult<u64> {
        let mut state = self.state.lock().unwrap();
        state.count_calls += 1;
        if state.fail_count_read {
            return Err(ChainError::Rpc {
                code: -32000,
                message: "count read failed".to_string(),
            });
        }
        Ok(state.proposals.len() as u64)
    }

    async fn proposal(&self, id: ProposalId) -> ChainResult<Proposal> {
        let mut state = self.state.lock().unwrap();
        state.proposal_calls += 1;
        if state.fail_proposal_read == Some(id) {
            return Err(ChainError::Rpc {
                code: -32000,
                message: format!("read of proposal {id} failed"),
            });
        }
        state
            .proposals
            .get(id as usize)
            .cloned()
            .ok_or_else(|| ChainError::Reverted(format!("unknown proposal {id}")))
    }

    async fn create_proposal(
        &self,
        description: &str,
        signer: &RequestSigner,
    ) -> ChainResult<TxReceipt> {
        let mut state = self.state.lock().unwrap();
        let receipt = Self::settle_write(&mut state, signer, format!("create({description})"))?;
        let id = state.proposals.len() as ProposalId;
        state.proposals.push(Proposal {
            id,
            description: description.to_string(),
            votes_for: 0,
            votes_against: 0,
            deadline: MOCK_DEADLINE,
            executed: false,
        });
        Ok(receipt)
    }

    async fn vote(
        &self,
        id: ProposalId,
        support: bool,
        signer: &RequestSigner,
    ) -> ChainResult<TxReceipt> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes.is_none() && state.proposals.get(id as usize).is_none() {
            return Err(ChainError::Reverted(format!("unknown proposal {id}")));
        }
        let receipt = Self::settle_write(&mut state, signer, format!("vote({id}, {support})"))?;
        let proposal = state
            .proposals
            .get_mut(id as usize)
            .expect("checked above");
        if support {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }
        Ok(receipt)
    }

    async fn execute_proposal(
        &self,
        id: ProposalId,
        signer: &RequestSigner,
    ) -> ChainResult<TxReceipt> {
        let mut state = self.state.lock().unwrap();
        match state.proposals.get(id as usize) {
            None if state.fail_writes.is_none() => {
                return Err(ChainError::Reverted(format!("unknown proposal {id}")));
            }
            Some(p) if p.executed && state.fail_writes.is_none() => {
                return Err(ChainError::Reverted(format!("proposal {id} already executed")));
            }
            _ => {}
        }
        let receipt = Self::settle_write(&mut state, signer, format!("execute({id})"))?;
        state
            .proposals
            .get_mut(id as usize)
            .expect("checked above")
            .executed = true;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> RequestSigner {
        RequestSigner::from_seed(&[9u8; 32]).unwrap()
    }

    #[tokio::test]
    async fn test_seed_and_read() {
        let mock = MockGovernanceClient::new();
        mock.seed_proposal("A", 4, 1, 100, false);

        assert_eq!(mock.proposal_count().await.unwrap(), 1);
        let p = mock.proposal(0).await.unwrap();
        assert_eq!(p.description, "A");
        assert_eq!(p.votes_for, 4);
        assert_eq!(mock.count_calls(), 1);
        assert_eq!(mock.proposal_calls(), 1);
    }

    #[tokio::test]
    async fn test_read_unknown_proposal_reverts() {
        let mock = MockGovernanceClient::new();
        let result = mock.proposal(5).await;
        assert!(matches!(result, Err(ChainError::Reverted(_))));
    }

    #[tokio::test]
    async fn test_create_appends_and_records_sender() {
        let mock = MockGovernanceClient::new();
        let signer = signer();

        let receipt = mock.create_proposal("raise quorum", &signer).await.unwrap();
        assert_eq!(receipt.block, 1);
        assert_eq!(mock.proposal_count().await.unwrap(), 1);

        let writes = mock.submitted_writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].from, *signer.address());
        assert_eq!(writes[0].call, "create(raise quorum)");
    }

    #[tokio::test]
    async fn test_vote_bumps_tallies() {
        let mock = MockGovernanceClient::new();
        let signer = signer();
        mock.seed_proposal("A", 0, 0, 100, false);

        mock.vote(0, true, &signer).await.unwrap();
        mock.vote(0, true, &signer).await.unwrap();
        mock.vote(0, false, &signer).await.unwrap();

        let p = mock.proposal(0).await.unwrap();
        assert_eq!(p.votes_for, 2);
        assert_eq!(p.votes_against, 1);
    }

    #[tokio::test]
    async fn test_execute_marks_executed_once() {
        let mock = MockGovernanceClient::new();
        let signer = signer();
        mock.seed_proposal("A", 3, 0, 100, false);

        mock.execute_proposal(0, &signer).await.unwrap();
        assert!(mock.proposal(0).await.unwrap().executed);

        let again = mock.execute_proposal(0, &signer).await;
        assert!(matches!(again, Err(ChainError::Reverted(_))));
    }

    #[tokio::test]
    async fn test_fault_injection() {
        let mock = MockGovernanceClient::new();
        let signer = signer();
        mock.seed_proposal("A", 0, 0, 100, false);

        mock.fail_count_reads(true);
        assert!(mock.proposal_count().await.is_err());
        mock.fail_count_reads(false);

        mock.fail_proposal_read(Some(0));
        assert!(mock.proposal(0).await.is_err());
        mock.fail_proposal_read(None);

        mock.fail_writes(Some("rejected signature"));
        let err = mock.vote(0, true, &signer).await.unwrap_err();
        assert!(err.to_string().contains("rejected signature"));
        assert!(mock.submitted_writes().is_empty());
    }
}
