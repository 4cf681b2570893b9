//! Provenance sidecars: every artifact `dir/name.ext` gets a
//! `dir/name.provenance.json` describing how it was produced.

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What produced an artifact: the command parameters and the files it read.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.inputs.push(input.as_ref().to_path_buf());
        self
    }
}

/// An input file as seen when the artifact was written. `bytes` is `None`
/// when the file could not be stat'ed.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct InputRecord {
    pub path: String,
    pub bytes: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Callsite {
    pub file: String,
    pub line: u32,
}

/// On-disk layout of a sidecar.
#[derive(Debug, Serialize, Deserialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub massprops_version: String,
    pub callsite: Callsite,
    pub params: Value,
    pub inputs: Vec<InputRecord>,
    pub output: String,
}

impl Sidecar {
    fn describe(artifact: &Path, payload: Payload, callsite: &Location<'_>) -> Self {
        let inputs = payload
            .inputs
            .iter()
            .map(|p| InputRecord {
                path: p.display().to_string(),
                bytes: fs::metadata(p).ok().map(|m| m.len()),
            })
            .collect();
        Self {
            code_rev: code_rev(),
            massprops_version: massprops::VERSION.to_string(),
            callsite: Callsite {
                file: callsite.file().to_string(),
                line: callsite.line(),
            },
            params: payload.params,
            inputs,
            output: artifact.display().to_string(),
        }
    }
}

/// Write the sidecar for `artifact` and return its path. The callsite
/// recorded is the caller of this function.
#[track_caller]
pub fn write_sidecar(artifact: impl AsRef<Path>, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = Sidecar::describe(artifact, payload, Location::caller());
    let path = sidecar_path(artifact);
    let body = serde_json::to_vec_pretty(&sidecar).context("serializing provenance")?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), inputs = sidecar.inputs.len(), "provenance_written");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Source revision: `GIT_COMMIT` at run time, then at build time, then
/// `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    let runtime = std::env::var("GIT_COMMIT").ok();
    let build = option_env!("GIT_COMMIT").map(str::to_string);
    runtime
        .into_iter()
        .chain(build)
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/points.csv")),
            Path::new("/tmp/output/points.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("runs/estimate")),
            Path::new("runs/estimate.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_inputs_params_and_output() {
        let dir = tempdir().unwrap();
        let mesh = dir.path().join("mesh.csv");
        fs::write(&mesh, "x,y,z\n0,0,0\n").unwrap();
        let artifact = dir.path().join("estimate.json");
        fs::write(&artifact, "{}").unwrap();

        let payload = Payload::new(json!({"proxy": "hull", "count": 10}))
            .with_input(&mesh)
            .with_input(dir.path().join("gone.csv"));
        let line = line!() + 1;
        let path = write_sidecar(&artifact, payload).unwrap();

        let parsed: Sidecar = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed.output, artifact.display().to_string());
        assert_eq!(parsed.params["count"], 10);
        assert_eq!(parsed.massprops_version, massprops::VERSION);
        assert_eq!(parsed.callsite.line, line);
        assert!(parsed.callsite.file.ends_with("provenance.rs"));
        assert_eq!(parsed.inputs[0].bytes, Some(12));
        assert_eq!(parsed.inputs[1].bytes, None);
        assert!(!parsed.code_rev.is_empty());
    }
}
