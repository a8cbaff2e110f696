//! Show endpoint, contract, and wallet status.

use super::config;
use agora::wallet::{FileWallet, WalletProvider};

pub async fn execute(config_flag: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_init(config_flag)?;
    config::init_tracing(&cfg.logging);

    println!("📊 Agora status");
    println!();
    println!("Endpoint: {}", cfg.chain.endpoint);
    if cfg.chain.contract.trim_start_matches("0x").chars().all(|c| c == '0') {
        println!(
            "⚠️  Contract: {} (placeholder, edit the config)",
            cfg.chain.contract
        );
    } else {
        println!("Contract: {}", cfg.chain.contract);
    }
    println!();

    let wallet = FileWallet::new(cfg.wallet.wallet_file.clone());
    match wallet.request_accounts().await {
        Ok(accounts) => {
            println!("✅ Wallet: {}", wallet.path().display());
            println!("   Account: {}", accounts[0]);
        }
        Err(e) => {
            println!("❌ Wallet: {}", e);
            println!("   Create one with `agora init`.");
        }
    }

    Ok(())
}
