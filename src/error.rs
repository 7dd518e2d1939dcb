use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing configuration: {0} is not set")]
    MissingConfig(&'static str),
    #[error("invalid provider url {url}: {reason}")]
    InvalidProviderUrl { url: String, reason: String },
    #[error("unable to read keypair {path}: {reason}")]
    Keypair { path: PathBuf, reason: String },
    #[error("no Anchor.toml found in {start} or any parent directory")]
    WorkspaceNotFound { start: PathBuf },
    #[error("program {0} not found in workspace")]
    ProgramNotFound(String),
    #[error("idl for program {0} has no address")]
    MissingProgramAddress(String),
    #[error("invalid idl {path}: {source}")]
    InvalidIdl {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("solana pubkey parse: {0}")]
    SolanaPubkeyParse(#[from] solana_sdk::pubkey::ParsePubkeyError),
    #[error("rpc error: {0}")]
    Rpc(#[from] super::rpc::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
