//! JSON-RPC transport for the governance contract.
//!
//! Reads map to `gov_getProposalsCount` / `gov_getProposal`. Writes are
//! Ed25519-signed call envelopes submitted via `gov_sendTransaction`, after
//! which settlement is awaited by polling `gov_getTransactionReceipt`. There
//! is no client-side timeout: waiting is delegated to the contract execution
//! environment, and an unresponsive endpoint surfaces as a transport error
//! rather than being retried here.

use super::traits::{ChainError, ChainResult, GovernanceClient};
use super::types::{Address, AddressParseError, Proposal, ProposalId, TxHash, TxReceipt};
use crate::wallet::provider::RequestSigner;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Interval between settlement polls.
const SETTLEMENT_POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    id: u64,
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct JsonRpcErrorDetail {
    code: i64,
    message: String,
}

/// The contract's `getProposal` record; the ordinal id is assigned by the
/// caller from the index it fetched under.
#[derive(Deserialize)]
struct ProposalRecord {
    description: String,
    votes_for: u64,
    votes_against: u64,
    deadline: u64,
    executed: bool,
}

/// Unsigned portion of a mutating call. Signed as canonical JSON bytes in
/// field declaration order.
#[derive(Serialize)]
struct CallPayload<'a> {
    from: String,
    to: String,
    method: &'a str,
    params: Value,
    nonce: u64,
}

#[derive(Serialize)]
struct SignedCall<'a> {
    #[serde(flatten)]
    payload: CallPayload<'a>,
    public_key: String,
    sig: String,
}

fn build_signed_call<'a>(
    contract: &Address,
    method: &'a str,
    params: Value,
    nonce: u64,
    signer: &RequestSigner,
) -> ChainResult<SignedCall<'a>> {
    let payload = CallPayload {
        from: signer.address().to_string(),
        to: contract.to_string(),
        method,
        params,
        nonce,
    };
    let message = serde_json::to_vec(&payload).map_err(|e| ChainError::Decode(e.to_string()))?;
    let sig = signer.sign(&message);
    Ok(SignedCall {
        payload,
        public_key: hex::encode(signer.public_key()),
        sig: hex::encode(sig),
    })
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum ReceiptStatus {
    Sealed,
    Reverted,
    Dropped,
}

#[derive(Deserialize)]
struct ReceiptRecord {
    block: u64,
    status: ReceiptStatus,
    #[serde(default)]
    reason: Option<String>,
}

/// JSON-RPC governance client.
pub struct RpcGovernanceClient {
    http: reqwest::Client,
    endpoint: String,
    contract: Address,
    next_id: AtomicU64,
}

impl RpcGovernanceClient {
    /// Create a client for the given endpoint and contract address.
    pub fn new(endpoint: &str, contract: &str) -> Result<Self, AddressParseError> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            contract: contract.parse()?,
            next_id: AtomicU64::new(1),
        })
    }

    /// Contract address this client is bound to.
    pub fn contract(&self) -> &Address {
        &self.contract
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> ChainResult<T> {
        let request = JsonRpcRequest {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            jsonrpc: "2.0",
            method,
            params,
        };
        let response: JsonRpcResponse = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;
        if let Some(err) = response.error {
            return Err(ChainError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        serde_json::from_value(response.result.unwrap_or(Value::Null))
            .map_err(|e| ChainError::Decode(e.to_string()))
    }

    async fn submit_and_settle(
        &self,
        method: &str,
        params: Value,
        signer: &RequestSigner,
    ) -> ChainResult<TxReceipt> {
        let call = build_signed_call(&self.contract, method, params, rand::random(), signer)?;
        let hash_text: String = self.call("gov_sendTransaction", json!([call])).await?;
        let hash: TxHash = hash_text
            .parse()
            .map_err(|e: AddressParseError| ChainError::Decode(e.to_string()))?;
        tracing::debug!(%hash, method, "transaction submitted, awaiting settlement");
        self.await_settlement(hash).await
    }

    /// Poll the receipt endpoint until the transaction is sealed, reverted,
    /// or dropped. Runs until the endpoint resolves the transaction.
    async fn await_settlement(&self, hash: TxHash) -> ChainResult<TxReceipt> {
        loop {
            let receipt: Option<ReceiptRecord> = self
                .call("gov_getTransactionReceipt", json!([hash.to_string()]))
                .await?;
            match receipt {
                None => tokio::time::sleep(SETTLEMENT_POLL_INTERVAL).await,
                Some(record) => match record.status {
                    ReceiptStatus::Sealed => {
                        tracing::info!(%hash, block = record.block, "transaction settled");
                        return Ok(TxReceipt {
                            hash,
                            block: record.block,
                        });
                    }
                    ReceiptStatus::Reverted => {
                        return Err(ChainError::Reverted(
                            record
                                .reason
                                .unwrap_or_else(|| "reverted without reason".to_string()),
                        ));
                    }
                    ReceiptStatus::Dropped => return Err(ChainError::Dropped(hash)),
                },
            }
        }
    }
}

#[async_trait]
impl GovernanceClient for RpcGovernanceClient {
    async fn proposal_count(&self) -> ChainResult<u64> {
        self.call(
            "gov_getProposalsCount",
            json!([self.contract.to_string()]),
        )
        .await
    }

    async fn proposal(&self, id: ProposalId) -> ChainResult<Proposal> {
        let record: ProposalRecord = self
            .call("gov_getProposal", json!([self.contract.to_string(), id]))
            .await?;
        Ok(Proposal {
            id,
            description: record.description,
            votes_for: record.votes_for,
            votes_against: record.votes_against,
            deadline: record.deadline,
            executed: record.executed,
        })
    }

    async fn create_proposal(
        &self,
        description: &str,
        signer: &RequestSigner,
    ) -> ChainResult<TxReceipt> {
        self.submit_and_settle("createProposal", json!([description]), signer)
            .await
    }

    async fn vote(
        &self,
        id: ProposalId,
        support: bool,
        signer: &RequestSigner,
    ) -> ChainResult<TxReceipt> {
        self.submit_and_settle("vote", json!([id, support]), signer)
            .await
    }

    async fn execute_proposal(
        &self,
        id: ProposalId,
        signer: &RequestSigner,
    ) -> ChainResult<TxReceipt> {
        self.submit_and_settle("executeProposal", json!([id]), signer)
            .await
    }
}
