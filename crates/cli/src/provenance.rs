//! Provenance for ring reports: which build wrote them, from where, and with
//! which tolerances.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    pub written_by: Option<String>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: polyring::VERSION,
            written_by: None,
            params,
            outputs: Vec::new(),
        }
    }
}

/// Writes `<report>.provenance.json` beside `report` and returns its path.
/// The caller's `file:line` is recorded as `written_by`.
#[track_caller]
pub fn write_sidecar(report: &Path, params: Value) -> Result<PathBuf> {
    let at = Location::caller();
    let doc = Provenance {
        written_by: Some(format!("{}:{}", at.file(), at.line())),
        outputs: vec![report.display().to_string()],
        ..Provenance::new(params)
    };
    let path = report.with_extension("provenance.json");
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`,
/// else `"unknown"`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status.success().then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_beside_report() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("ring.json");
        std::fs::write(&report, "{}").unwrap();
        let path = write_sidecar(&report, json!({"cmd": "check", "eps_orient": 1e-9})).unwrap();
        assert_eq!(path, dir.path().join("ring.provenance.json"));

        let doc: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["outputs"][0], report.display().to_string());
        assert_eq!(doc["params"]["cmd"], "check");
        assert_eq!(doc["version"], polyring::VERSION);
        assert!(doc["written_by"].as_str().unwrap().contains("provenance.rs"));
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }

    #[test]
    fn report_without_extension() {
        let dir = tempdir().unwrap();
        let path = write_sidecar(&dir.path().join("ring"), json!({})).unwrap();
        assert_eq!(path, dir.path().join("ring.provenance.json"));
    }
}
