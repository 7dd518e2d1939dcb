//! Anchor IDL types.
//!
//! `anchor build` writes one JSON file per program to `target/idl/`. Two
//! layouts are in the wild: Anchor >= 0.30 puts the program address at the
//! top level and the name under `metadata`, older releases put the name at
//! the top level and the address (when deployed) under `metadata`. Both
//! deserialize into [`Idl`]; unknown fields are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Idl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub metadata: IdlMetadata,
    #[serde(default)]
    pub instructions: Vec<IdlInstruction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<IdlAccountDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<IdlErrorCode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdlMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discriminator: Vec<u8>,
    #[serde(default)]
    pub accounts: Vec<IdlInstructionAccount>,
    #[serde(default)]
    pub args: Vec<IdlField>,
}

/// An account expected by an instruction. Writability and signer flags are
/// spelled `writable`/`signer` in new IDLs and `isMut`/`isSigner` in old ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlInstructionAccount {
    pub name: String,
    #[serde(default, alias = "isMut")]
    pub writable: bool,
    #[serde(default, alias = "isSigner")]
    pub signer: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlField {
    pub name: String,
    /// Kept as raw JSON; primitive types are strings, composites are objects.
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlAccountDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discriminator: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlErrorCode {
    pub code: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl Idl {
    pub fn program_name(&self) -> Option<&str> {
        self.metadata.name.as_deref().or(self.name.as_deref())
    }

    pub fn program_version(&self) -> Option<&str> {
        self.metadata.version.as_deref().or(self.version.as_deref())
    }

    pub fn program_address(&self) -> Option<&str> {
        self.address.as_deref().or(self.metadata.address.as_deref())
    }

    pub fn instruction_names(&self) -> Vec<&str> {
        self.instructions.iter().map(|ix| ix.name.as_str()).collect()
    }
}

/// `TodoDapp`, `todoDapp`, `todo_dapp` and `todo-dapp` all normalize to `tododapp`.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
