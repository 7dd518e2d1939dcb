//! Connection plus signing identity, built from an explicit [`Config`].

use super::*;
use solana_sdk::signature::{read_keypair_file, Keypair, Signer};
use std::path::{Path, PathBuf};

/// Everything needed to build a [`Provider`]. Both fields are required;
/// they are optional here so a missing value is reported by
/// [`Provider::new`] as [`Error::MissingConfig`] rather than by the parser.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Cluster JSON-RPC endpoint (`ANCHOR_PROVIDER_URL`).
    pub provider_url: Option<String>,
    /// Path to a JSON keypair file (`ANCHOR_WALLET`).
    pub wallet: Option<PathBuf>,
    pub commitment: Commitment,
}

impl Config {
    /// Reads the Anchor provider environment variables. Unset and empty
    /// values both come back as `None`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            provider_url: var(PROVIDER_URL_ENV).filter(|v| !v.is_empty()),
            wallet: var(WALLET_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            commitment: Commitment::default(),
        }
    }
}

pub struct Provider {
    connection: rpc::Client,
    wallet: Keypair,
}

impl Provider {
    pub fn new(config: &Config) -> Result<Self> {
        let url = config
            .provider_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(Error::MissingConfig(PROVIDER_URL_ENV))?;
        let parsed = reqwest::Url::parse(url).map_err(|e| Error::InvalidProviderUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidProviderUrl {
                url: url.to_string(),
                reason: format!(
                    "unsupported scheme {}, expected http or https",
                    parsed.scheme()
                ),
            });
        }
        let wallet_path = config
            .wallet
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(Error::MissingConfig(WALLET_ENV))?;
        let wallet = load_keypair(wallet_path)?;
        let connection = rpc::Client::new_with_base_url(url.to_string(), config.commitment)?;
        tracing::debug!(url, wallet = %wallet_path.display(), "provider initialized");
        Ok(Self { connection, wallet })
    }

    pub fn public_key(&self) -> Pubkey {
        self.wallet.pubkey()
    }

    pub fn connection(&self) -> &rpc::Client {
        &self.connection
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("connection", &self.connection)
            .field("public_key", &self.public_key())
            .finish()
    }
}

fn load_keypair(path: &Path) -> Result<Keypair> {
    read_keypair_file(path).map_err(|e| Error::Keypair {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
