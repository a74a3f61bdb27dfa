use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for tracegraph
pub fn tracegraph() -> Command {
    cargo_bin_cmd!("tracegraph")
}

/// Write a graph document into `dir` and return its path
pub fn write_graph(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 1 -> 2 -> 3 costs 2, the direct edge 1 -> 3 costs 5, node 9 is isolated
#[allow(dead_code)]
pub fn write_detour_graph(dir: &TempDir) -> PathBuf {
    write_graph(
        dir,
        "detour.json",
        r#"{
  "nodes": [9],
  "edges": [
    { "from": 1, "to": 2, "weight": 1 },
    { "from": 2, "to": 3, "weight": 1 },
    { "from": 1, "to": 3, "weight": 5 }
  ]
}"#,
    )
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout is not valid JSON")
}

/// Path as a string argument
#[allow(dead_code)]
pub fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}
