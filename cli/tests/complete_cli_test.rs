use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn completes_through_session_alias() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let session = dir.path().join("cell.yaml");
    fs::write(&session, "environment:\n  aliases:\n    Sys: System\n")?;

    let mut cmd = Command::cargo_bin("cellsense")?;
    cmd.args(["complete", "--session", session.to_str().unwrap(), "Sys.ve"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("version/0  function  version()\n"));

    Ok(())
}

#[test]
fn completes_map_fields_in_order() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let session = dir.path().join("cell.json");
    fs::write(&session, r#"{"bindings": {"map": {"foo": 1, "bar": 2}}}"#)?;

    let mut cmd = Command::cargo_bin("cellsense")?;
    cmd.args(["complete", "--session", session.to_str().unwrap(), "map."]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("bar  field  field\nfoo  field  field\n"));

    Ok(())
}

#[test]
fn json_output_carries_documentation() -> Result<(), Box<dyn Error>> {
    let output = Command::cargo_bin("cellsense")?
        .args(["complete", "--json", "leng"])
        .output()?;
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let first = &items[0];
    assert_eq!(first["label"], "length/1");
    assert_eq!(first["kind"], "function");
    assert_eq!(first["insert_text"], "length");
    assert!(first["documentation"].as_str().unwrap().starts_with("Returns the length of `list`."));

    Ok(())
}

#[test]
fn custom_manifest_without_stdlib() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let manifest = dir.path().join("acme.toml");
    fs::write(
        &manifest,
        r#"
name = "Acme"
doc = "Rockets and anvils."

[[functions]]
name = "launch"
arity = 1
signature = "launch(rocket)"
"#,
    )?;

    let mut cmd = Command::cargo_bin("cellsense")?;
    cmd.args(["complete", "--no-stdlib", "--manifest", manifest.to_str().unwrap(), ":"]);
    cmd.assert().success().stdout(predicate::eq("Acme  namespace  namespace\n"));

    let mut cmd = Command::cargo_bin("cellsense")?;
    cmd.args(["complete", "--no-stdlib", "--manifest", manifest.to_str().unwrap(), "Acme.la"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("launch/1  function  launch(rocket)\n"));

    Ok(())
}

#[test]
fn details_prints_documentation() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("cellsense")?;
    cmd.args(["details", "System.version"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("version/0 (function)\nversion()\n\nElixir version information."))
        .stdout(predicate::str::contains("version() :: String.t()"));

    Ok(())
}

#[test]
fn unresolvable_text_prints_nothing() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("cellsense")?;
    cmd.args(["complete", "x.Foo"]);
    cmd.assert().success().stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn reports_unsupported_session_format() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let session = dir.path().join("cell.ini");
    fs::write(&session, "bindings=none")?;

    let mut cmd = Command::cargo_bin("cellsense")?;
    cmd.args(["complete", "--session", session.to_str().unwrap(), "a"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load session"))
        .stderr(predicate::str::contains("unsupported file extension"));

    Ok(())
}

#[test]
fn reports_missing_manifest() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("nope.json");

    let mut cmd = Command::cargo_bin("cellsense")?;
    cmd.args(["complete", "--manifest", missing.to_str().unwrap(), "a"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load manifest"));

    Ok(())
}
