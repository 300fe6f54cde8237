use anyhow::{Context, Result};
use quadpts::PointSet;
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to an exported point set.
pub struct Payload {
    pub params: Value,
    pub summary: Value,
}

impl Payload {
    pub fn new<P: Serialize>(params: &P) -> Result<Self> {
        Ok(Self {
            params: serde_json::to_value(params)?,
            summary: Value::Null,
        })
    }

    /// Attach rule/dimension/count/weight-sum of the exported set.
    pub fn with_point_set(mut self, set: &PointSet) -> Self {
        self.summary = json!({
            "rule": set.rule(),
            "ndim": set.ndim(),
            "npts": set.npts(),
            "weight_sum": set.weight_sum(),
        });
        self
    }
}

/// Write `<stem>.provenance.json` next to `artifact`: code revision, crate
/// version, callsite, request parameters and the exported set's summary.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": code_rev(std::env::var("GIT_COMMIT").ok()),
        "quadpts_version": quadpts::VERSION,
        "callsite": { "file": callsite.file(), "line": callsite.line() },
        "params": payload.params,
        "point_set": payload.summary,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// `dir/le9.csv` -> `dir/le9.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("point_set"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// A non-empty `GIT_COMMIT` wins; otherwise ask git, falling back to `"unknown"`.
fn code_rev(from_env: Option<String>) -> String {
    match from_env {
        Some(rev) if !rev.is_empty() => rev,
        _ => git_head().unwrap_or_else(|| "unknown".to_string()),
    }
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadpts::{generate, RuleKind, RuleParams};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        let derived = sidecar_path(Path::new("/tmp/output/le9.parquet"));
        assert_eq!(derived, Path::new("/tmp/output/le9.provenance.json"));
        assert_eq!(sidecar_path(Path::new("w8")), Path::new("w8.provenance.json"));
    }

    #[test]
    fn code_rev_prefers_environment() {
        assert_eq!(code_rev(Some("abc123".into())), "abc123");
        // empty override falls through to git or "unknown", never ""
        assert!(!code_rev(Some(String::new())).is_empty());
        assert_eq!(code_rev(None), code_rev(Some(String::new())));
    }

    #[test]
    fn write_sidecar_records_point_set() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("w5.csv");
        fs::write(&artifact, "x,y,w\n").unwrap();
        let set = generate(RuleKind::W5, 2, 5, &RuleParams::with_w0(1.0)).unwrap();
        let payload = Payload::new(&json!({"rule": "W5", "w0": 1.0}))
            .unwrap()
            .with_point_set(&set);
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["point_set"]["rule"], "W5");
        assert_eq!(parsed["point_set"]["npts"], 5);
        assert_eq!(parsed["params"]["w0"], 1.0);
    }
}
