use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn validates_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("podlint")?;

    cmd.arg("tests/fixtures/pod.yml");
    cmd.assert().success().stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn reports_every_violation_in_document_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("podlint")?;

    cmd.arg("tests/fixtures/invalid_pod.yml");
    cmd.assert().failure().code(1).stderr(predicate::eq(
        "tests/fixtures/invalid_pod.yml:1 apiVersion has unsupported value 'v2'\n\
         tests/fixtures/invalid_pod.yml:4 name is required\n\
         tests/fixtures/invalid_pod.yml:8 image has invalid format 'nginx'\n\
         tests/fixtures/invalid_pod.yml:10 name has invalid format 'duplicate'\n\
         tests/fixtures/invalid_pod.yml:14 resources.limits.memory has invalid format '512MB'\n",
    ));

    Ok(())
}

#[test]
fn emits_json_diagnostics() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("podlint")?;

    cmd.arg("tests/fixtures/invalid_pod.yml")
        .arg("--format")
        .arg("json");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "apiVersion has unsupported value 'v2'",
        ))
        .stdout(predicate::str::contains("\"line\": 1"));

    Ok(())
}

#[test]
fn validates_every_document_in_a_stream() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("podlint")?;

    cmd.arg("tests/fixtures/multi_doc.yml");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "tests/fixtures/multi_doc.yml: apiVersion is required\n",
        ))
        .stderr(predicate::str::contains(
            "tests/fixtures/multi_doc.yml:11 kind has unsupported value 'Deployment'\n",
        ));

    Ok(())
}

#[test]
fn rejects_empty_documents() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("podlint")?;

    cmd.arg("tests/fixtures/empty.yml");
    cmd.assert().failure().code(1).stderr(predicate::str::contains(
        "cannot unmarshal file content: empty document",
    ));

    Ok(())
}

#[test]
fn file_doesnt_exist() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("podlint")?;

    cmd.arg("test/file/doesnt/exist");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read file"));

    Ok(())
}

#[test]
fn invalid_invocation_is_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("podlint")?;

    cmd.assert().failure().code(2);

    Ok(())
}
