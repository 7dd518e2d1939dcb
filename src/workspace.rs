//! Program registry for an Anchor workspace.
//!
//! The workspace root is the nearest directory holding `Anchor.toml`. Every
//! `target/idl/<program>.json` under it is one program. Files are indexed by
//! name once at startup; an IDL is only parsed when its program is requested.

use super::*;
use crate::idl::{normalize_name, Idl};
use crate::provider::Provider;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    /// Keyed by normalized file stem, paths in sorted order.
    programs: BTreeMap<String, Vec<PathBuf>>,
}

impl Workspace {
    /// Walks up from `start` until a directory containing `Anchor.toml` is found.
    pub fn discover(start: &Path) -> Result<Self> {
        let root = start
            .ancestors()
            .find(|dir| dir.join(ANCHOR_TOML).is_file())
            .ok_or_else(|| Error::WorkspaceNotFound {
                start: start.to_path_buf(),
            })?;
        Self::load(root)
    }

    /// Indexes the `.json` files under `root/target/idl`. A missing directory
    /// yields an empty registry.
    pub fn load(root: &Path) -> Result<Self> {
        let idl_dir = root.join(IDL_DIR);
        let mut paths = Vec::new();
        if idl_dir.is_dir() {
            for entry in std::fs::read_dir(&idl_dir)? {
                let path = entry?.path();
                if path.extension().and_then(|e| e.to_str()) == Some("json") {
                    paths.push(path);
                }
            }
        }
        paths.sort();

        let mut programs: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        for path in paths {
            let Some(key) = path.file_stem().and_then(|s| s.to_str()).map(normalize_name) else {
                continue;
            };
            programs.entry(key).or_default().push(path);
        }
        tracing::debug!(root = %root.display(), programs = programs.len(), "indexed workspace");
        Ok(Self {
            root: root.to_path_buf(),
            programs,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parses the named program's IDL and binds its address to `provider`.
    ///
    /// When several files normalize to the same name, the one whose stem is
    /// exactly `name` wins, otherwise the first in path order.
    pub fn program<'a>(&self, name: &str, provider: &'a Provider) -> Result<Program<'a>> {
        let candidates = self
            .programs
            .get(&normalize_name(name))
            .ok_or_else(|| Error::ProgramNotFound(name.to_string()))?;
        let path = candidates
            .iter()
            .find(|path| path.file_stem().and_then(|s| s.to_str()) == Some(name))
            .or_else(|| candidates.first())
            .ok_or_else(|| Error::ProgramNotFound(name.to_string()))?;
        if candidates.len() > 1 {
            tracing::warn!(
                program = name,
                chosen = %path.display(),
                candidates = candidates.len(),
                "several idl files match program name"
            );
        }

        let idl = read_idl(path)?;
        let address = idl
            .program_address()
            .ok_or_else(|| Error::MissingProgramAddress(name.to_string()))?;
        let id = Pubkey::from_str(address)?;
        Ok(Program { id, idl, provider })
    }
}

fn read_idl(path: &Path) -> Result<Idl> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| Error::InvalidIdl {
        path: path.to_path_buf(),
        source,
    })
}

/// A deployed program's address and interface, bound to a provider.
#[derive(Debug, Clone)]
pub struct Program<'a> {
    id: Pubkey,
    idl: Idl,
    provider: &'a Provider,
}

impl<'a> Program<'a> {
    pub fn id(&self) -> Pubkey {
        self.id
    }

    pub fn idl(&self) -> &Idl {
        &self.idl
    }

    pub fn name(&self) -> Option<&str> {
        self.idl.program_name()
    }

    pub fn provider(&self) -> &'a Provider {
        self.provider
    }
}
