use clap::{Parser, Subcommand};

pub mod config;
pub mod execute;
pub mod init;
pub mod list;
pub mod passphrase;
pub mod propose;
pub mod status;
pub mod version;
pub mod vote;

#[derive(Parser)]
#[command(name = "agora")]
#[command(author = "Agora Project")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wallet-backed client for on-chain governance proposals", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a wallet file (generates a fresh 24-word mnemonic)
    Init {
        /// Path for the wallet file (default: ~/.local/share/agora/wallet.mnemonic)
        #[arg(long)]
        wallet_file: Option<String>,

        /// Import an existing mnemonic instead of generating one
        /// (read from --mnemonic-file, AGORA_WALLET_MNEMONIC, or a prompt)
        #[arg(long)]
        import: bool,

        /// Path to a file containing the mnemonic to import
        #[arg(long, requires = "import")]
        mnemonic_file: Option<String>,

        /// Overwrite an existing wallet file
        #[arg(long)]
        force: bool,
    },

    /// Show endpoint, contract, and wallet status
    Status {
        /// Path to config file (default: ~/.local/share/agora/config.toml)
        #[arg(long)]
        config: Option<String>,
    },

    /// Fetch and display the proposal board (no wallet required)
    List {
        /// Path to config file (default: ~/.local/share/agora/config.toml)
        #[arg(long)]
        config: Option<String>,
    },

    /// Create a new proposal
    Propose {
        /// Proposal description text
        description: String,

        /// Path to config file (default: ~/.local/share/agora/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Path to the wallet file (overrides config)
        #[arg(long)]
        wallet_file: Option<String>,
    },

    /// Vote on an open proposal (in favor unless --against)
    Vote {
        /// Proposal id
        id: u64,

        /// Vote against instead of in favor
        #[arg(long)]
        against: bool,

        /// Path to config file (default: ~/.local/share/agora/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Path to the wallet file (overrides config)
        #[arg(long)]
        wallet_file: Option<String>,
    },

    /// Trigger execution of a resolved proposal
    Execute {
        /// Proposal id
        id: u64,

        /// Path to config file (default: ~/.local/share/agora/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Path to the wallet file (overrides config)
        #[arg(long)]
        wallet_file: Option<String>,
    },

    /// Display version information
    Version,
}

pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Init {
            wallet_file,
            import,
            mnemonic_file,
            force,
        } => init::execute(wallet_file, import, mnemonic_file, force).await,
        Commands::Status { config } => status::execute(config).await,
        Commands::List { config } => list::execute(config).await,
        Commands::Propose {
            description,
            config,
            wallet_file,
        } => propose::execute(description, config, wallet_file).await,
        Commands::Vote {
            id,
            against,
            config,
            wallet_file,
        } => vote::execute(id, against, config, wallet_file).await,
        Commands::Execute {
            id,
            config,
            wallet_file,
        } => execute::execute(id, config, wallet_file).await,
        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
