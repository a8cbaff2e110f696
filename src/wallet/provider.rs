//! Wallet provider trait abstractions.
//!
//! `WalletProvider` plays the role of the browser's injected wallet: it grants
//! access to the user's accounts and hands out request-signing handles bound
//! to one of them. The production implementation reads a mnemonic wallet file;
//! `MockWalletProvider` backs the tests.

use crate::chain::types::Address;
use crate::wallet::keyring::{AgoraKeyring, KeyringError};
use async_trait::async_trait;
use ring::signature::{Ed25519KeyPair, KeyPair};
use std::fmt;
use std::path::{Path, PathBuf};

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Wallet provider errors.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// No wallet is available at all (the "wallet required" case). Surfaced
    /// to the user as a blocking error.
    #[error("no wallet available: {0}")]
    Unavailable(String),

    /// The wallet exists but holds no accounts.
    #[error("wallet holds no accounts")]
    NoAccounts,

    /// A signer was requested for an account this wallet does not hold.
    #[error("unknown account {0}")]
    UnknownAccount(Address),

    /// The wallet's mnemonic could not be parsed or expanded.
    #[error(transparent)]
    Keyring(#[from] KeyringError),

    /// The derived seed was rejected by the signing backend.
    #[error("signing key rejected: {0}")]
    KeyRejected(String),
}

/// Request-signing handle bound to one account.
///
/// Wraps the account's Ed25519 keypair. Obtained through a connected
/// `WalletProvider`; every mutating contract call is signed with one of these.
pub struct RequestSigner {
    keypair: Ed25519KeyPair,
    address: Address,
}

impl RequestSigner {
    /// Build a signer from a derived 32-byte Ed25519 seed.
    pub fn from_seed(seed: &[u8; 32]) -> WalletResult<Self> {
        let keypair = Ed25519KeyPair::from_seed_unchecked(seed)
            .map_err(|e| WalletError::KeyRejected(e.to_string()))?;
        let address = Address::from_public_key(keypair.public_key().as_ref());
        Ok(Self { keypair, address })
    }

    /// The account this signer is bound to.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The account's public key bytes.
    pub fn public_key(&self) -> Vec<u8> {
        self.keypair.public_key().as_ref().to_vec()
    }

    /// Sign a message with the account key.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.keypair.sign(message).as_ref().to_vec()
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Trait abstraction for wallet access.
///
/// Mirrors the injected-provider surface: request account access, then obtain
/// a signing handle bound to one of the returned accounts.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request account access. Returns the wallet's accounts, first one
    /// preferred. Fails with `WalletError::Unavailable` when no wallet
    /// exists.
    async fn request_accounts(&self) -> WalletResult<Vec<Address>>;

    /// Obtain a request-signing handle for one of this wallet's accounts.
    fn signer(&self, account: &Address) -> WalletResult<RequestSigner>;
}

/// Wallet backed by a mnemonic file on disk.
///
/// The file holds a BIP-39 phrase as written by `agora init`. A missing file
/// is reported as `Unavailable`, not created implicitly.
pub struct FileWallet {
    path: PathBuf,
}

impl FileWallet {
    /// Create a provider for the given wallet file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the wallet file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_signer(&self) -> WalletResult<RequestSigner> {
        if !self.path.exists() {
            return Err(WalletError::Unavailable(format!(
                "no wallet file at {} (run `agora init`)",
                self.path.display()
            )));
        }
        let mnemonic = std::fs::read_to_string(&self.path).map_err(|e| {
            WalletError::Unavailable(format!(
                "failed to read wallet file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let keyring = AgoraKeyring::from_mnemonic(&mnemonic)?;
        RequestSigner::from_seed(keyring.signing_seed())
    }
}

#[async_trait]
impl WalletProvider for FileWallet {
    async fn request_accounts(&self) -> WalletResult<Vec<Address>> {
        let signer = self.load_signer()?;
        Ok(vec![*signer.address()])
    }

    fn signer(&self, account: &Address) -> WalletResult<RequestSigner> {
        let signer = self.load_signer()?;
        if signer.address() != account {
            return Err(WalletError::UnknownAccount(*account));
        }
        Ok(signer)
    }
}

/// Mock wallet provider for testing.
pub struct MockWalletProvider {
    seeds: Vec<[u8; 32]>,
    available: bool,
}

impl MockWalletProvider {
    /// Create a mock wallet with one deterministic account.
    pub fn new() -> Self {
        Self::with_seeds(vec![[7u8; 32]])
    }

    /// Create a mock wallet from explicit signing seeds.
    pub fn with_seeds(seeds: Vec<[u8; 32]>) -> Self {
        Self {
            seeds,
            available: true,
        }
    }

    /// Create a mock that reports no wallet at all.
    pub fn unavailable() -> Self {
        Self {
            seeds: Vec::new(),
            available: false,
        }
    }
}

impl Default for MockWalletProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn request_accounts(&self) -> WalletResult<Vec<Address>> {
        if !self.available {
            return Err(WalletError::Unavailable("no wallet installed".to_string()));
        }
        let mut accounts = Vec::with_capacity(self.seeds.len());
        for seed in &self.seeds {
            accounts.push(*RequestSigner::from_seed(seed)?.address());
        }
        Ok(accounts)
    }

    fn signer(&self, account: &Address) -> WalletResult<RequestSigner> {
        for seed in &self.seeds {
            let signer = RequestSigner::from_seed(seed)?;
            if signer.address() == account {
                return Ok(signer);
            }
        }
        Err(WalletError::UnknownAccount(*account))
    }
}
