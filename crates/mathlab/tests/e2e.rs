//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mathlab() -> Command {
    let mut cmd = Command::cargo_bin("mathlab").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("MATHLAB_DATA_DIR")
        .env_remove("MATHLAB_MAX_DEPTH");
    cmd
}

#[test]
fn help_flag() {
    mathlab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sierpinski"));
}

#[test]
fn version_flag() {
    mathlab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mathlab"));
}

#[test]
fn fractal_quiet_prints_leaf_count() {
    mathlab()
        .args(["fractal", "--depth", "2", "-q"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn fractal_depth_zero() {
    mathlab()
        .args(["fractal", "--depth", "0", "-q"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn fractal_text_output() {
    mathlab()
        .args(["fractal", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Triangles: 3"))
        .stdout(predicate::str::contains("[(0, 0) (2, 0) (1, 2)]"))
        .stdout(predicate::str::contains("[(2, 0) (4, 0) (3, 2)]"))
        .stdout(predicate::str::contains("[(1, 2) (3, 2) (2, 4)]"));
}

#[test]
fn fractal_json_output() {
    let out = mathlab()
        .args(["fractal", "--depth", "1", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["kind"], "fractalComputed");
    assert_eq!(value["triangles"].as_array().unwrap().len(), 3);
}

#[test]
fn fractal_custom_triangle() {
    mathlab()
        .args(["fractal", "--depth", "1", "--triangle", "-2,0,2,0,0,4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[(-2, 0) (0, 0) (-1, 2)]"));
}

#[test]
fn fractal_too_deep_fails_with_invalid_argument() {
    mathlab()
        .args(["fractal", "--depth", "4", "--max-depth", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("exceeds"));
}

#[test]
fn fractal_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fractal.json");
    mathlab()
        .args(["fractal", "--depth", "3", "-q", "--output"])
        .arg(&path)
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["triangles"].as_array().unwrap().len(), 27);
}

#[test]
fn graphs_quiet_counts() {
    mathlab()
        .args(["graphs", "--min", "-1", "--max", "1", "--step", "0.5", "-q"])
        .assert()
        .success()
        .stdout("5 5 2 2 3\n");
}

#[test]
fn graphs_json_output() {
    let out = mathlab()
        .args(["graphs", "--min", "-1", "--max", "1", "--step", "0.5", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["kind"], "graphsComputed");
    assert_eq!(value["inverse"][0].as_array().unwrap().len(), 2);
    assert_eq!(value["sqrt"][0], serde_json::json!({ "x": 0.0, "y": 0.0 }));
}

#[test]
fn graphs_zero_step_fails() {
    mathlab()
        .args(["graphs", "--step", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("step"));
}

#[test]
fn serve_answers_each_line() {
    let input = concat!(
        r#"{"kind":"computeFractal","triangle":{"p1":{"x":0,"y":0},"p2":{"x":4,"y":0},"p3":{"x":2,"y":4}},"depth":2}"#,
        "\n",
        "\n",
        r#"{"kind":"computeGraphs","range":{"min":-1,"max":1,"step":0}}"#,
        "\n",
        "garbage\n",
        r#"{"kind":"computeGraphs","range":{"min":0,"max":2,"step":1}}"#,
        "\n",
    );
    let out = mathlab()
        .arg("serve")
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let lines: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["kind"], "fractalComputed");
    assert_eq!(lines[0]["triangles"].as_array().unwrap().len(), 9);
    assert_eq!(lines[1]["kind"], "error");
    assert_eq!(lines[1]["error"], "invalidArgument");
    assert_eq!(lines[2]["kind"], "error");
    assert_eq!(lines[3]["kind"], "graphsComputed");
    assert_eq!(lines[3]["linear"].as_array().unwrap().len(), 3);
}

#[test]
fn profile_flow() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().to_str().unwrap();

    mathlab()
        .args(["profile", "show", "--data-dir", data_dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users yet"));

    mathlab()
        .args(["profile", "create", "ada", "--data-dir", data_dir])
        .assert()
        .success();

    for _ in 0..2 {
        mathlab()
            .args(["profile", "complete", "linear", "--data-dir", data_dir])
            .assert()
            .success();
    }
    mathlab()
        .args(["profile", "complete", "sierpinski", "--data-dir", data_dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/3"));

    mathlab()
        .args(["profile", "show", "--data-dir", data_dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("* ada"))
        .stdout(predicate::str::contains("[x]"))
        .stdout(predicate::str::contains("[~] 1/3"))
        .stdout(predicate::str::contains("1 completed"));

    mathlab()
        .args(["profile", "show", "-q", "--data-dir", data_dir])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn profile_errors() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().to_str().unwrap();

    mathlab()
        .args(["profile", "complete", "linear", "--data-dir", data_dir])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no user selected"));

    mathlab()
        .args(["profile", "select", "nobody", "--data-dir", data_dir])
        .assert()
        .code(2);

    mathlab()
        .args(["profile", "create", "ada", "--data-dir", data_dir])
        .assert()
        .success();
    mathlab()
        .args(["profile", "create", "ada", "--data-dir", data_dir])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
    mathlab()
        .args(["profile", "complete", "calculus", "--data-dir", data_dir])
        .assert()
        .code(2);
}

#[test]
fn corrupt_profile_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("mathlab_profile.json"), "{ not json").unwrap();
    mathlab()
        .args(["profile", "show"])
        .env("MATHLAB_DATA_DIR", dir.path())
        .assert()
        .code(4);
}

#[test]
fn bash_completion() {
    mathlab()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mathlab"));
}
