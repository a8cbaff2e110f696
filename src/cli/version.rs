/// Display version information
pub fn execute() {
    println!("agora {}", env!("CARGO_PKG_VERSION"));
    println!("Wallet-backed client for on-chain governance proposals");
}
