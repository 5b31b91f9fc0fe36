//! Foundry artifact loading.
//!
//! Deployments read creation bytecode from the compiled artifacts under
//! `out/<Name>.sol/<Name>.json` (the `forge build` layout).

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy_primitives::{Bytes, hex};
use eyre::{WrapErr as _, eyre};
use serde_json::Value;

/// Handle to a directory of compiled Foundry artifacts.
#[derive(Debug, Clone)]
pub struct ContractArtifacts {
    out_dir: PathBuf,
}

impl ContractArtifacts {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    fn artifact_path(&self, contract: &str) -> PathBuf {
        self.out_dir
            .join(format!("{contract}.sol"))
            .join(format!("{contract}.json"))
    }

    /// Creation bytecode of `contract`, decoded from its artifact JSON.
    pub fn bytecode(&self, contract: &str) -> eyre::Result<Bytes> {
        let path = self.artifact_path(contract);
        let raw = fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read artifact {}", path.display()))?;
        extract_bytecode(&raw)
            .wrap_err_with(|| format!("malformed artifact {}", path.display()))
    }
}

fn extract_bytecode(json_str: &str) -> eyre::Result<Bytes> {
    let v: Value = serde_json::from_str(json_str)?;
    let object = v["bytecode"]["object"]
        .as_str()
        .ok_or_else(|| eyre!("no bytecode object"))?;
    let decoded = hex::decode(object.trim_start_matches("0x"))?;
    Ok(decoded.into())
}

/// Assemble the deploy payload: creation bytecode followed by the
/// ABI-encoded constructor arguments.
pub fn deploy_code(bytecode: Bytes, constructor_args: Vec<u8>) -> Bytes {
    bytecode
        .into_iter()
        .chain(constructor_args)
        .collect::<Vec<u8>>()
        .into()
}
