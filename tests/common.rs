use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for hopmap, isolated from any user config
#[allow(dead_code)]
pub fn hopmap(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("hopmap");
    cmd.env("HOPMAP_CONFIG_DIR", config_dir)
        .env_remove("HOPMAP_CONFIG")
        .env_remove("HOPMAP_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a graph document into `dir` and return its path
#[allow(dead_code)]
pub fn write_graph(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write graph fixture");
    path
}

#[allow(dead_code)]
pub const CHAIN: &str = r#"{"root": 0, "nodes": [[1], [0, 2], [1, 3], [2]]}"#;

#[allow(dead_code)]
pub const DISCONNECTED: &str = r#"{"root": 0, "nodes": [[1], [0], []]}"#;
