mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_translate_csv() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("shape.csv");
    common::write_shape_csv(&input, &[(0.0, 0.0), (10.0, 0.0)])?;

    let mut cmd = Command::new(cargo_bin!("affine-shape"));
    cmd.args(["apply", "--op", "translate", "--param", "dx=5", "--param", "dy=-5"])
        .arg(&input);

    cmd.assert()
        .success()
        .stdout("x,y\n5,-5\n15,-5\n");

    Ok(())
}

#[test]
fn test_cli_defaults_to_reference_shape() {
    let mut cmd = Command::new(cargo_bin!("affine-shape"));
    cmd.args(["apply", "--op", "scale"])
        .args(["--param", "kx=1", "--param", "ky=1"])
        .args(["--param", "cx=0", "--param", "cy=0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("x,y\n50,200\n150,80\n"))
        .stdout(predicate::str::ends_with("130,260\n"));
}

#[test]
fn test_cli_config_reference_shape() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"reference_shape": [[1, 2]]}"#)?;

    let mut cmd = Command::new(cargo_bin!("affine-shape"));
    cmd.arg("--config")
        .arg(&config)
        .args(["apply", "--op", "translate", "--param", "dx=1", "--param", "dy=1"]);

    cmd.assert().success().stdout("x,y\n2,3\n");

    Ok(())
}

#[test]
fn test_cli_unknown_op_fails() {
    let mut cmd = Command::new(cargo_bin!("affine-shape"));
    cmd.args(["apply", "--op", "skew", "--param", "dx=1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown op"));
}

#[test]
fn test_cli_missing_param_fails() {
    let mut cmd = Command::new(cargo_bin!("affine-shape"));
    cmd.args(["apply", "--op", "rotate", "--param", "angle=90"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing parameter: cx"));
}

#[test]
fn test_cli_malformed_csv_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("bad.csv");
    std::fs::write(&input, "x,y\n1,not_a_number\n")?;

    let mut cmd = Command::new(cargo_bin!("affine-shape"));
    cmd.args(["apply", "--op", "translate", "--param", "dx=0", "--param", "dy=0"])
        .arg(&input);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("CSV error"));

    Ok(())
}
