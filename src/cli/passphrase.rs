//! Mnemonic source resolution for wallet import.
//!
//! Priority: explicit file > `AGORA_WALLET_MNEMONIC` environment variable >
//! interactive prompt. The mnemonic is kept in zeroizing storage while it is
//! in memory.

use zeroize::Zeroizing;

/// Environment variable consulted when no mnemonic file is given.
pub const MNEMONIC_ENV_VAR: &str = "AGORA_WALLET_MNEMONIC";

/// Where the mnemonic comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MnemonicSource {
    /// Read from a file (container-native)
    File(String),
    /// Read from `AGORA_WALLET_MNEMONIC`
    EnvVar,
    /// Prompt on the terminal (input hidden)
    Stdin,
}

/// Resolve the source for an imported mnemonic.
pub fn resolve_source(mnemonic_file: Option<String>) -> MnemonicSource {
    if let Some(file) = mnemonic_file {
        MnemonicSource::File(file)
    } else if std::env::var(MNEMONIC_ENV_VAR).is_ok() {
        MnemonicSource::EnvVar
    } else {
        MnemonicSource::Stdin
    }
}

/// Read the mnemonic from the resolved source.
pub fn read_mnemonic(
    source: MnemonicSource,
    prompt: &str,
) -> Result<Zeroizing<String>, Box<dyn std::error::Error>> {
    let raw = match source {
        MnemonicSource::File(path) => Zeroizing::new(
            std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read mnemonic file '{}': {}", path, e))?,
        ),
        MnemonicSource::EnvVar => Zeroizing::new(
            std::env::var(MNEMONIC_ENV_VAR)
                .map_err(|e| format!("Failed to read {}: {}", MNEMONIC_ENV_VAR, e))?,
        ),
        MnemonicSource::Stdin => Zeroizing::new(rpassword::prompt_password(prompt)?),
    };

    let trimmed = Zeroizing::new(raw.trim().to_string());
    if trimmed.is_empty() {
        return Err("Mnemonic is empty".into());
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_prefers_file() {
        let source = resolve_source(Some("/tmp/words.txt".to_string()));
        assert_eq!(source, MnemonicSource::File("/tmp/words.txt".to_string()));
    }

    #[test]
    fn test_read_from_file_trims() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "  alpha beta gamma  ").unwrap();

        let mnemonic = read_mnemonic(
            MnemonicSource::File(path.to_string_lossy().to_string()),
            "unused",
        )
        .unwrap();
        assert_eq!(&*mnemonic, "alpha beta gamma");
    }

    #[test]
    fn test_read_from_missing_file_fails() {
        let result = read_mnemonic(
            MnemonicSource::File("/nonexistent/words.txt".to_string()),
            "unused",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_mnemonic_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "\n\n").unwrap();

        let result = read_mnemonic(
            MnemonicSource::File(path.to_string_lossy().to_string()),
            "unused",
        );
        assert!(result.is_err());
    }
}
