//! CLI integration tests for graphinfo.
//!
//! These tests run the binary against snapshot files written to a temporary
//! directory.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"
[[package]]
name = "P"
version = "1.0.0"

[[package.target]]
name = "T1"

[[package.target]]
name = "T2"

[[package.product]]
name = "exe"
type = "executable"
targets = ["T1"]

[[package.product]]
name = "autolib"
type = { library = "automatic" }
targets = ["T2"]

[[package.product]]
name = "helper"
type = "plugin"
targets = ["T2"]
"#;

/// Get the graphinfo binary command.
///
/// HOME points at an empty location so a developer's global config does not
/// leak into the tests.
fn graphinfo() -> Command {
    let mut cmd = Command::cargo_bin("graphinfo").unwrap();
    cmd.env("HOME", std::env::temp_dir().join("graphinfo-tests-empty-home"));
    cmd
}

/// Create a temporary directory holding a BuildGraph.toml.
fn project(snapshot: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("BuildGraph.toml"), snapshot).unwrap();
    tmp
}

fn describe_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = graphinfo()
        .arg("describe")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// graphinfo describe
// ============================================================================

#[test]
fn test_describe_finds_snapshot_in_cwd() {
    let tmp = project(SNAPSHOT);

    let value = describe_json(tmp.path(), &[]);

    let products = value["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "exe");
    assert_eq!(products[0]["type"], "executable");
    assert_eq!(products[0]["package"]["identity"], "P");
    assert_eq!(
        products[0]["LLBuildTargetNameByConfig"],
        serde_json::json!({ "debug": "exe-debug.exe", "release": "exe-release.exe" })
    );

    let targets = value["targets"].as_array().unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0]["LLBuildTargetNameByConfig"]["debug"], "T1-debug.module");
}

#[test]
fn test_describe_searches_parent_directories() {
    let tmp = project(SNAPSHOT);
    let nested = tmp.path().join("Sources").join("App");
    fs::create_dir_all(&nested).unwrap();

    let value = describe_json(&nested, &[]);

    assert_eq!(value["products"].as_array().unwrap().len(), 1);
}

#[test]
fn test_describe_explicit_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("graph.toml");
    fs::write(&path, SNAPSHOT).unwrap();

    let value = describe_json(tmp.path(), &[path.to_str().unwrap()]);

    assert_eq!(value["targets"].as_array().unwrap().len(), 2);
}

#[test]
fn test_describe_compact() {
    let tmp = project(SNAPSHOT);

    graphinfo()
        .args(["describe", "--compact"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"products\":["))
        .stdout(predicate::str::contains("\n  ").not());
}

#[test]
fn test_describe_toml() {
    let tmp = project(SNAPSHOT);

    graphinfo()
        .args(["describe", "--format", "toml"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[[products]]"))
        .stdout(predicate::str::contains("[[targets]]"))
        .stdout(predicate::str::contains("exe-release.exe"));
}

#[test]
fn test_describe_to_file() {
    let tmp = project(SNAPSHOT);
    let out = tmp.path().join("info.json");

    graphinfo()
        .args(["describe", "--output", out.to_str().unwrap()])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["products"][0]["name"], "exe");
}

#[test]
fn test_describe_project_config_selects_format() {
    let tmp = project(SNAPSHOT);
    fs::create_dir_all(tmp.path().join(".graphinfo")).unwrap();
    fs::write(
        tmp.path().join(".graphinfo/config.toml"),
        "[output]\nformat = \"toml\"\n",
    )
    .unwrap();

    graphinfo()
        .arg("describe")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[[products]]"));

    // CLI flag wins over config
    let value = describe_json(tmp.path(), &["--format", "json"]);
    assert_eq!(value["products"][0]["name"], "exe");
}

#[test]
fn test_describe_invalid_format() {
    let tmp = project(SNAPSHOT);

    graphinfo()
        .args(["describe", "--format", "yaml"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid output format"));
}

#[test]
fn test_describe_without_snapshot() {
    let tmp = TempDir::new().unwrap();

    graphinfo()
        .arg("describe")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find BuildGraph.toml"));
}

#[test]
fn test_describe_reports_graph_errors() {
    let tmp = project(
        r#"
[[package]]
name = "app"
dependencies = ["zlib"]
"#,
    );

    graphinfo()
        .args(["describe", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("`app` depends on `zlib`"))
        .stderr(predicate::str::contains("BuildGraph.toml\n"))
        .stderr(predicate::str::contains("  --> "))
        .stderr(predicate::str::contains("help: consider:"));
}

#[test]
fn test_describe_reports_cycle_along_edges() {
    let tmp = project(
        r#"
[[package]]
name = "a"
dependencies = ["c"]

[[package]]
name = "b"
dependencies = ["a"]

[[package]]
name = "c"
dependencies = ["b"]
"#,
    );

    graphinfo()
        .args(["describe", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycle: a -> c -> b -> a"));
}

#[test]
fn test_describe_uses_global_config() {
    let tmp = project(SNAPSHOT);
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".graphinfo")).unwrap();
    fs::write(
        home.path().join(".graphinfo/config.toml"),
        "[output]\nformat = \"toml\"\n",
    )
    .unwrap();

    graphinfo()
        .arg("describe")
        .env("HOME", home.path())
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[[products]]"));
}

#[test]
fn test_describe_reports_parse_errors() {
    let tmp = project("[[package]\nname = ");

    graphinfo()
        .arg("describe")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse build graph snapshot"));
}

// ============================================================================
// graphinfo configs / completions
// ============================================================================

#[test]
fn test_configs() {
    graphinfo()
        .arg("configs")
        .assert()
        .success()
        .stdout("debug\nrelease\n");
}

#[test]
fn test_configs_json() {
    graphinfo()
        .args(["configs", "--json"])
        .assert()
        .success()
        .stdout("[\"debug\",\"release\"]\n");
}

#[test]
fn test_completions() {
    graphinfo()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graphinfo"));
}
