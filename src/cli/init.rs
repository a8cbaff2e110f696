//! Create the wallet file.
//!
//! Generates a fresh 24-word mnemonic (or imports an existing one) and
//! writes it to the wallet file with owner-only permissions. The derived
//! account address is printed so the operator can fund it before proposing.

use super::config::{self, LoggingConfig};
use super::passphrase::{read_mnemonic, resolve_source};
use agora::wallet::keyring::{self, AgoraKeyring};
use agora::wallet::provider::RequestSigner;
use std::path::PathBuf;

pub async fn execute(
    wallet_file: Option<String>,
    import: bool,
    mnemonic_file: Option<String>,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    config::init_tracing(&LoggingConfig::default());

    let path = wallet_file
        .map(PathBuf::from)
        .unwrap_or_else(config::default_wallet_path);

    println!("🔐 Creating agora wallet");
    println!("Wallet file: {}", path.display());
    println!();

    if path.exists() && !force {
        return Err(format!(
            "Wallet file {} already exists. Pass --force to overwrite it.",
            path.display()
        )
        .into());
    }

    let mnemonic = if import {
        read_mnemonic(
            resolve_source(mnemonic_file),
            "Enter BIP-39 mnemonic to import: ",
        )?
    } else {
        keyring::generate_mnemonic()?
    };

    // Validate and derive the account before touching the filesystem.
    let keyring = AgoraKeyring::from_mnemonic(&mnemonic)?;
    let signer = RequestSigner::from_seed(keyring.signing_seed())?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, format!("{}\n", &*mnemonic))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
    }

    println!("✅ Wallet created");
    println!("Account: {}", signer.address());
    if !import {
        println!();
        println!("⚠️  Back up the mnemonic below. It is the only way to recover this wallet.");
        println!();
        println!("{}", &*mnemonic);
    }

    Ok(())
}
