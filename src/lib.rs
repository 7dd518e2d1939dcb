use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

pub mod cli;
pub mod error;
pub mod idl;
pub mod provider;
pub mod rpc;
pub mod types;
pub mod utils;
pub mod workspace;

pub use error::Error;
pub use types::*;
pub use utils::*;
pub type Result<T = ()> = std::result::Result<T, Error>;
