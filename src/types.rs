pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000; // 10^9
pub const SOL_DECIMALS: u32 = 9;

pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_ENV: &str = "ANCHOR_WALLET";

pub const DEFAULT_PROGRAM: &str = "todo_dapp";
pub const ANCHOR_TOML: &str = "Anchor.toml";
pub const IDL_DIR: &str = "target/idl";

#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    #[default]
    Processed,
    Confirmed,
    Finalized,
}
