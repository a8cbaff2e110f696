//! Wallet provider boundary and session management.
//!
//! The wallet is the user's identity: a BIP-39 mnemonic from which the
//! account signing key is derived. `WalletProvider` abstracts where the
//! mnemonic lives (a wallet file in production, fixed seeds in tests);
//! `Session` holds the connected account, if any.

pub mod keyring;
pub mod provider;
pub mod session;

pub use keyring::AgoraKeyring;
pub use provider::{FileWallet, MockWalletProvider, RequestSigner, WalletError, WalletProvider};
pub use session::Session;
