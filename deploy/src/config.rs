use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;

/// Network endpoints and constructor arguments for one canvas deployment.
///
/// Everything network-specific lives here rather than in the source; the resolver for a
/// first-time host bootstrap comes from the RESOLVER_ADDRESS environment variable and has
/// no default.
#[derive(Debug, Deserialize)]
pub struct DeployConfig {
    /// RPC endpoint of the target cluster
    pub rpc_url: String,
    /// Path to the deployer keypair file
    pub keypair_path: String,
    /// Canvas owner address
    pub owner: String,
    /// Redirect recipient address
    pub recipient: String,
    /// Underlying mint of the registered super token
    pub underlying_mint: String,
    /// Wrapped mint of the registered super token
    pub wrapped_mint: String,
    /// Lowest claimable tile id
    #[serde(default = "default_genesis_tile")]
    pub genesis_tile: u64,
    /// Floor price for a first tile claim
    #[serde(default = "default_base_price")]
    pub base_price: u64,
}

fn default_genesis_tile() -> u64 {
    1
}

fn default_base_price() -> u64 {
    5
}

impl DeployConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("reading deploy config {}", path.display()))?;
        let config = toml::from_str(&raw).with_context(|| format!("parsing deploy config {}", path.display()))?;
        Ok(config)
    }

    pub fn owner(&self) -> Result<Pubkey> {
        parse_pubkey("owner", &self.owner)
    }

    pub fn recipient(&self) -> Result<Pubkey> {
        parse_pubkey("recipient", &self.recipient)
    }

    pub fn underlying_mint(&self) -> Result<Pubkey> {
        parse_pubkey("underlying_mint", &self.underlying_mint)
    }

    pub fn wrapped_mint(&self) -> Result<Pubkey> {
        parse_pubkey("wrapped_mint", &self.wrapped_mint)
    }
}

/// Resolver address for a first-time host bootstrap. Absence is an error, not a default.
pub fn resolver_from_env() -> Result<Pubkey> {
    let raw = env::var("RESOLVER_ADDRESS").context("RESOLVER_ADDRESS is not set")?;
    parse_pubkey("RESOLVER_ADDRESS", &raw)
}

fn parse_pubkey(name: &str, raw: &str) -> Result<Pubkey> {
    Pubkey::from_str(raw.trim()).with_context(|| format!("{} is not a valid pubkey: {}", name, raw))
}
