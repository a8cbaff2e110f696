//! Key derivation from the BIP-39 wallet mnemonic.
//!
//! The mnemonic is the single root of trust. The account signing key is
//! derived from it with HKDF-SHA256 under a versioned domain-separation salt,
//! so the same wallet file always yields the same on-chain identity.
//!
//! ```text
//! BIP-39 mnemonic
//!         │
//!         ▼
//! bip39::Mnemonic::to_seed("")  → [u8; 64]
//!         │
//!         ▼
//! HKDF-SHA256(salt="agora-master-v1", seed)
//!         │
//!         └─► HKDF expand("account-signing") → Ed25519 seed
//! ```
//!
//! All intermediate key material is zeroized; the mnemonic itself is never
//! stored here.

use bip39::Mnemonic;
use hkdf::Hkdf;
use sha2::Sha256;
use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

/// Domain separation salt for master key derivation (versioned for rotation)
const MASTER_SALT: &[u8] = b"agora-master-v1";

/// HKDF info strings for purpose-specific key derivation
mod purposes {
    pub const ACCOUNT_SIGNING: &[u8] = b"account-signing";
}

/// Errors that can occur during key derivation
#[derive(Debug, Error)]
pub enum KeyringError {
    /// Invalid BIP-39 mnemonic
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// HKDF expansion failed (should never happen with valid lengths)
    #[error("key derivation failed: {0}")]
    DerivationFailed(String),
}

/// Keyring holding the keys derived from the wallet mnemonic.
pub struct AgoraKeyring {
    /// Seed for the account Ed25519 signing key
    signing_seed: [u8; 32],
}

impl AgoraKeyring {
    /// Derive the keyring from a BIP-39 mnemonic phrase.
    ///
    /// Whitespace is normalized before parsing so that wallet files with
    /// trailing newlines or wrapped lines still load.
    pub fn from_mnemonic(mnemonic: &str) -> Result<Self, KeyringError> {
        let normalized = mnemonic.split_whitespace().collect::<Vec<_>>().join(" ");
        let parsed = Mnemonic::parse(&normalized)
            .map_err(|e| KeyringError::InvalidMnemonic(e.to_string()))?;

        let mut seed = parsed.to_seed("");
        let hk = Hkdf::<Sha256>::new(Some(MASTER_SALT), &seed);
        let mut signing_seed = [0u8; 32];
        let expanded = hk.expand(purposes::ACCOUNT_SIGNING, &mut signing_seed);
        seed.zeroize();
        expanded.map_err(|e| KeyringError::DerivationFailed(e.to_string()))?;

        Ok(Self { signing_seed })
    }

    /// Seed for the account Ed25519 signing key.
    pub fn signing_seed(&self) -> &[u8; 32] {
        &self.signing_seed
    }
}

impl Drop for AgoraKeyring {
    fn drop(&mut self) {
        self.signing_seed.zeroize();
    }
}

/// Generate a fresh 24-word mnemonic from OS entropy.
pub fn generate_mnemonic() -> Result<Zeroizing<String>, KeyringError> {
    use rand::RngCore;

    let mut entropy = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut entropy);
    let mnemonic = Mnemonic::from_entropy(&entropy)
        .map_err(|e| KeyringError::DerivationFailed(e.to_string()))?;
    entropy.zeroize();
    Ok(Zeroizing::new(mnemonic.to_string()))
}
