//! Wallet session management.
//!
//! A session is created on explicit user action (connect), holds at most the
//! first account the provider returns, and is never torn down by this code:
//! there is no disconnect transition, only process exit. Connecting an
//! already-connected session returns the existing account unchanged.

use super::provider::{RequestSigner, WalletError, WalletProvider, WalletResult};
use crate::chain::types::Address;

struct SessionIdentity {
    account: Address,
    signer: RequestSigner,
}

/// Connected-or-absent wallet identity.
pub struct Session {
    identity: Option<SessionIdentity>,
}

impl Session {
    /// Create an unconnected session.
    pub fn new() -> Self {
        Self { identity: None }
    }

    /// Request account access from the provider and bind the first returned
    /// account. On failure the session stays unconnected and the error is
    /// returned for the caller to surface.
    pub async fn connect<P: WalletProvider>(&mut self, provider: &P) -> WalletResult<Address> {
        if let Some(identity) = &self.identity {
            return Ok(identity.account);
        }
        let accounts = provider.request_accounts().await?;
        let account = *accounts.first().ok_or(WalletError::NoAccounts)?;
        let signer = provider.signer(&account)?;
        tracing::info!(%account, "wallet session connected");
        self.identity = Some(SessionIdentity { account, signer });
        Ok(account)
    }

    /// Whether an account is connected.
    pub fn is_connected(&self) -> bool {
        self.identity.is_some()
    }

    /// The connected account, if any.
    pub fn account(&self) -> Option<Address> {
        self.identity.as_ref().map(|i| i.account)
    }

    /// The signing handle for the connected account, if any.
    pub fn signer(&self) -> Option<&RequestSigner> {
        self.identity.as_ref().map(|i| &i.signer)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
