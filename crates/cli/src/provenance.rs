use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a written table.
pub struct Payload {
    pub command: String,
    pub params: Value,
}

impl Payload {
    pub fn new(command: impl Into<String>, params: Value) -> Self {
        Self {
            command: command.into(),
            params,
        }
    }
}

/// Write `<artifact>.provenance.json` with the git commit, crate version, callsite,
/// command, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": twobridge::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// Provenance block printed by `genus report`.
pub fn report_block() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "version": twobridge::VERSION,
        "command": "report",
        "params": {},
        "outputs": []
    })
}

/// `surfaces.csv` -> `surfaces.provenance.json`, next to the table.
fn provenance_path(artifact: &Path) -> PathBuf {
    if artifact.file_name().is_none() {
        return artifact.join("table.provenance.json");
    }
    artifact.with_extension("provenance.json")
}

/// Commit the tables were computed with: `GIT_COMMIT` at build time, then at run
/// time, then `git rev-parse HEAD`; `"unknown"` when none of them answers.
pub fn current_git_rev() -> String {
    let non_empty = |rev: String| (!rev.is_empty()).then_some(rev);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| head_commit().and_then(non_empty))
        .unwrap_or_else(|| "unknown".to_string())
}

fn head_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/tables/mu2.csv");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/tables/mu2.provenance.json"));
        assert_eq!(
            provenance_path(Path::new("sweep")),
            Path::new("sweep.provenance.json")
        );
    }

    #[test]
    fn git_rev_is_never_empty() {
        assert!(!current_git_rev().is_empty());
    }

    #[test]
    fn write_sidecar_records_command_and_params() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("surfaces.csv");
        fs::write(&artifact, "alpha,beta\n").unwrap();
        let payload = Payload::new("table", json!({"max_beta": 16, "mu": 2}));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "table");
        assert_eq!(parsed["params"]["max_beta"], 16);
        assert_eq!(parsed["version"], twobridge::VERSION);
    }

    #[test]
    fn report_block_has_no_outputs() {
        let block = report_block();
        assert!(block["outputs"].as_array().unwrap().is_empty());
    }
}
