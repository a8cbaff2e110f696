//! Vote on an open proposal.

use super::config;
use agora::chain::RpcGovernanceClient;
use agora::view::{render_board, Synchronizer};
use agora::wallet::{FileWallet, Session};
use std::path::PathBuf;

pub async fn execute(
    id: u64,
    against: bool,
    config_flag: Option<String>,
    wallet_file: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_init(config_flag)?;
    config::init_tracing(&cfg.logging);

    let support = !against;

    let wallet_path = wallet_file
        .map(PathBuf::from)
        .unwrap_or_else(|| cfg.wallet.wallet_file.clone());
    let provider = FileWallet::new(wallet_path);
    let mut session = Session::new();
    let account = session.connect(&provider).await?;
    println!("🔑 Connected: {account}");

    let chain = RpcGovernanceClient::new(&cfg.chain.endpoint, &cfg.chain.contract)?;
    let mut sync = Synchronizer::new(chain);
    sync.connect_account(account);

    println!(
        "🗳️  Voting {} proposal {id}, awaiting settlement...",
        if support { "for" } else { "against" }
    );
    let receipt = sync.submit_vote(&session, id, support).await?;
    println!(
        "✅ Vote settled (tx {}, block {})",
        receipt.hash, receipt.block
    );
    println!();
    println!("{}", render_board(sync.state()));
    Ok(())
}
