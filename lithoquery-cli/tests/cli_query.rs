//! Integration tests for the lithoquery binary.
//!
//! Each test runs the CLI with HOME pointed at a temporary directory so the
//! config file and log file stay isolated, and with a synthetic model
//! written next to it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const REGISTRY: &str = "0.0 0.0 0.0\n10.0 10.0 0.0\n0.0 0.0 10.0\n60.0 60.0 60.0\n";

/// Temporary home directory with a model under `~/model`.
struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let home = TempDir::new().expect("Failed to create temp dir");
        let sandbox = Self { home };
        fs::create_dir_all(sandbox.model_dir()).unwrap();
        fs::write(
            sandbox.model_dir().join("Icosahedron_Level7_LatLon_mod.txt"),
            REGISTRY,
        )
        .unwrap();
        sandbox
    }

    fn home(&self) -> &Path {
        self.home.path()
    }

    fn model_dir(&self) -> PathBuf {
        self.home().join("model")
    }

    fn write_node(&self, node: u32, density_bottom: f64, density_top: f64) {
        let text = format!(
            "node{n} LITHO1.0 3\n\
             6371000 13088.5 11262.2 3667.8 1304.7 84.6 11262.2 3667.8 1.0 IC0\n\
             50000 {bottom} 8100 4600 57822.5 600 8200 4700 1.0 LID-BOTTOM\n\
             10000 {top} 6500 3700 57822.5 600 6500 3700 1.0 LID-TOP\n",
            n = node,
            bottom = density_bottom,
            top = density_top,
        );
        fs::write(self.model_dir().join(format!("node{}.model", node)), text).unwrap();
    }

    fn write_standard_nodes(&self) {
        for node in 1..=3 {
            self.write_node(node, 3400.0, 2900.0);
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_lithoquery"))
            .args(args)
            .env("HOME", self.home())
            .env_remove("LITHOQUERY_MODEL_DIR")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute CLI command")
    }

    fn run_with_model(&self, args: &[&str]) -> Output {
        let model_dir = self.model_dir();
        let mut full: Vec<&str> = args.to_vec();
        full.extend(["--model-dir", model_dir.to_str().unwrap()]);
        self.run(&full)
    }
}

/// Assert a command succeeded.
fn assert_success(output: &Output, context: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!("{} failed:\nstdout: {}\nstderr: {}", context, stdout, stderr);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_profile_query_prints_layers() {
    let sandbox = Sandbox::new();
    sandbox.write_standard_nodes();

    let output = sandbox.run_with_model(&["query", "--lat", "2", "--lon", "3"]);
    assert_success(&output, "query profile");

    let text = stdout(&output);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3, "stdout: {}", text);
    assert!(lines[0].ends_with(" IC0"));
    assert!(lines[1].contains(" 3400.00 "));
    assert!(lines[2].ends_with(" LID-TOP"));
}

#[test]
fn test_point_query_prints_sample() {
    let sandbox = Sandbox::new();
    sandbox.write_standard_nodes();

    let output = sandbox.run_with_model(&["query", "--lat", "2", "--lon", "3", "--depth", "30"]);
    assert_success(&output, "query point");

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 1, "stdout: {}", text);
    assert!(text.starts_with("  30000. "));
    assert!(text.contains(" 3150.00 "));
    assert!(text.trim_end().ends_with("LID-BOTTOM LID-TOP"));
}

#[test]
fn test_shallow_query_skips_core() {
    let sandbox = Sandbox::new();
    sandbox.write_standard_nodes();

    let output = sandbox.run_with_model(&["query", "--lat", "2", "--lon", "3", "--shallow"]);
    assert_success(&output, "query shallow");

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 2);
    assert!(!text.contains("IC0"));
}

#[test]
fn test_model_dir_from_environment() {
    let sandbox = Sandbox::new();
    sandbox.write_standard_nodes();

    let output = Command::new(env!("CARGO_BIN_EXE_lithoquery"))
        .args(["query", "--lat", "2", "--lon", "3"])
        .env("HOME", sandbox.home())
        .env("LITHOQUERY_MODEL_DIR", sandbox.model_dir())
        .output()
        .expect("Failed to execute CLI command");
    assert_success(&output, "query with env model dir");
    assert_eq!(stdout(&output).lines().count(), 3);
}

#[test]
fn test_nodes_command_reports_weights() {
    let sandbox = Sandbox::new();
    sandbox.write_standard_nodes();

    let output = sandbox.run_with_model(&["nodes", "--lat", "0", "--lon", "0"]);
    assert_success(&output, "nodes");

    let text = stdout(&output);
    let lines: Vec<_> = text.lines().collect();
    assert!(lines[0].contains("DIST_KM"));
    assert!(lines[1].contains("1.000000"));
    assert_eq!(lines.len(), 4, "stdout: {}", text);
}

#[test]
fn test_missing_model_file_exits_with_error() {
    let sandbox = Sandbox::new();
    sandbox.write_node(1, 3400.0, 2900.0);
    sandbox.write_node(2, 3400.0, 2900.0);

    let output = sandbox.run_with_model(&["query", "--lat", "2", "--lon", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("Error: Query failed: Could not open"), "stderr: {}", err);
    assert!(err.contains("node3.model"));
}

#[test]
fn test_missing_ic0_exits_with_error() {
    let sandbox = Sandbox::new();
    sandbox.write_standard_nodes();
    fs::write(
        sandbox.model_dir().join("node2.model"),
        "node2 LITHO1.0 1\n10000 2900 6500 3700 57822.5 600 6500 3700 1.0 LID-TOP\n",
    )
    .unwrap();

    let output = sandbox.run_with_model(&["query", "--lat", "2", "--lon", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Missing IC0 layer in model of node(s) 2"));
}

#[test]
fn test_invalid_latitude_exits_with_error() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_with_model(&["query", "--lat", "95", "--lon", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid input"));
}

#[test]
fn test_config_init_then_show() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["config", "init"]);
    assert_success(&output, "config init");
    let config_path = sandbox.home().join(".lithoquery").join("config.ini");
    assert!(config_path.exists());

    let output = sandbox.run(&["config", "init"]);
    assert_success(&output, "second config init");
    assert!(stdout(&output).contains("already exists"));

    fs::write(&config_path, "[model]\nlevel = 5\n").unwrap();
    let output = sandbox.run(&["config", "show"]);
    assert_success(&output, "config show");
    assert!(stdout(&output).contains("level = 5"));
}

#[test]
fn test_config_path() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["config", "path"]);
    assert_success(&output, "config path");
    assert!(stdout(&output).trim_end().ends_with(".lithoquery/config.ini"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let sandbox = Sandbox::new();
    sandbox.write_standard_nodes();
    let config_dir = sandbox.home().join(".lithoquery");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.ini"), "[model]\nlevel = 12\n").unwrap();

    let output = sandbox.run_with_model(&["query", "--lat", "2", "--lon", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("model.level"));
}
