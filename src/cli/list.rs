//! Fetch and display the proposal board.
//!
//! The read path needs no wallet: this command works before any session is
//! connected. A failed refresh still prints the (empty) board with the
//! failure on it, then reports the error.

use super::config;
use agora::chain::RpcGovernanceClient;
use agora::view::{render_board, Synchronizer};

pub async fn execute(config_flag: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_init(config_flag)?;
    config::init_tracing(&cfg.logging);

    let chain = RpcGovernanceClient::new(&cfg.chain.endpoint, &cfg.chain.contract)?;
    let mut sync = Synchronizer::new(chain);

    let outcome = sync.refresh().await;
    println!("{}", render_board(sync.state()));
    outcome.map_err(Into::into)
}
