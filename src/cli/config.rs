//! Agora configuration file handling.
//!
//! Configuration is TOML, stored under the platform data directory next to
//! the wallet file. It holds deployment settings only: where the governance
//! endpoint lives, which contract to talk to, where the wallet file is, and
//! how to log. All governance parameters (deadlines, quorum, tallies) live in
//! the contract and are never configured here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Default log level
const DEFAULT_LOG_LEVEL: &str = "info";

/// Placeholder contract address written into generated configs.
const PLACEHOLDER_CONTRACT: &str = "0x0000000000000000000000000000000000000000";

/// Agora client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgoraConfig {
    /// Governance endpoint and contract
    pub chain: ChainConfig,

    /// Wallet file location
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chain-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Governance endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Deployed governance contract address (0x-prefixed hex)
    #[serde(default = "default_contract")]
    pub contract: String,
}

/// Wallet-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Path to the mnemonic wallet file
    #[serde(default = "default_wallet_path")]
    pub wallet_file: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    pub file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8545".to_string()
}

fn default_contract() -> String {
    PLACEHOLDER_CONTRACT.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Platform data directory for agora (`~/.local/share/agora` on Linux).
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("agora")
}

/// Default config file path.
pub fn default_config_path() -> PathBuf {
    default_data_dir().join("config.toml")
}

/// Default wallet file path.
pub fn default_wallet_path() -> PathBuf {
    default_data_dir().join("wallet.mnemonic")
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            wallet_file: default_wallet_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            contract: default_contract(),
        }
    }
}

impl Default for AgoraConfig {
    fn default() -> Self {
        Self {
            chain: ChainConfig::default(),
            wallet: WalletConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AgoraConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: AgoraConfig = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        Ok(config)
    }

    /// Write a commented default configuration file
    pub fn create_default(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
        fs::write(path, Self::generate_default_toml())
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;
        Ok(())
    }

    /// Generate default configuration content as a string with comments
    pub fn generate_default_toml() -> String {
        format!(
            r#"# Agora Client Configuration
#
# Deployment settings only. Governance parameters (deadlines, quorum,
# tallies) live in the contract and cannot be configured here.

[chain]
# Governance endpoint URL
endpoint = "{endpoint}"

# Replace with your deployed contract address!
contract = "{contract}"

[wallet]
# Path to the mnemonic wallet file (create one with `agora init`)
wallet_file = "{wallet}"

[logging]
# Log level: trace, debug, info, warn, error
level = "{level}"

# Optional log file (stderr if unset)
# file = "/var/log/agora.log"
"#,
            endpoint = default_endpoint(),
            contract = PLACEHOLDER_CONTRACT,
            wallet = default_wallet_path().display(),
            level = DEFAULT_LOG_LEVEL,
        )
    }
}

/// Resolve the config path (flag wins), creating a commented default file on
/// first use.
pub fn load_or_init(config_flag: Option<String>) -> Result<AgoraConfig, Box<dyn std::error::Error>> {
    let path = config_flag
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    if !path.exists() {
        println!("📝 No config file found. Creating default configuration...");
        AgoraConfig::create_default(&path)?;
        println!("   Created: {}", path.display());
    }
    AgoraConfig::load(&path)
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Safe to call more
/// than once; later calls are no-ops.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

    let result = match &logging.file {
        Some(path) => match fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .try_init(),
            Err(e) => {
                eprintln!("Warning: cannot open log file '{}': {}", path.display(), e);
                tracing_subscriber::fmt().with_env_filter(filter).try_init()
            }
        },
        None => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };
    // Already-initialized is fine (tests, repeated command dispatch).
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_toml_round_trips() {
        let config: AgoraConfig =
            toml::from_str(&AgoraConfig::generate_default_toml()).unwrap();
        assert_eq!(config.chain.endpoint, default_endpoint());
        assert_eq!(config.chain.contract, PLACEHOLDER_CONTRACT);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_create_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        AgoraConfig::create_default(&path).unwrap();
        assert!(path.exists());

        let config = AgoraConfig::load(&path).unwrap();
        assert_eq!(config.chain.endpoint, default_endpoint());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = AgoraConfig::load(&dir.path().join("absent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AgoraConfig = toml::from_str(
            r#"
[chain]
endpoint = "https://gov.example.org"
contract = "0x1111111111111111111111111111111111111111"
"#,
        )
        .unwrap();

        assert_eq!(config.chain.endpoint, "https://gov.example.org");
        assert_eq!(config.wallet.wallet_file, default_wallet_path());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_or_init_creates_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config =
            load_or_init(Some(path.to_string_lossy().to_string())).unwrap();
        assert!(path.exists());
        assert_eq!(config.chain.contract, PLACEHOLDER_CONTRACT);
    }
}
