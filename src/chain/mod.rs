//! Contract boundary.
//!
//! The governance contract is an opaque external collaborator reached through
//! a fixed five-function surface (two reads, three writes). This module holds
//! the boundary trait, the wire types, the JSON-RPC transport used in
//! production, and the mock used by tests.

pub mod mock;
pub mod rpc;
pub mod traits;
pub mod types;

pub use mock::MockGovernanceClient;
pub use rpc::RpcGovernanceClient;
pub use traits::{ChainError, ChainResult, GovernanceClient};
pub use types::{Address, Proposal, ProposalId, TxHash, TxReceipt};
