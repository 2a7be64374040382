//! End-to-end tests of the `nestbase` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn nestbase(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nestbase"))
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

/// Write generator options with the given config block into `dir`.
fn write_options(dir: &Path, config: serde_json::Value) -> PathBuf {
    let options = serde_json::json!({
        "generator": {
            "name": "nestbase",
            "provider": { "value": "nestbase" },
            "config": config
        },
        "schemaPath": dir.join("prisma/schema.prisma"),
        "dmmf": { "datamodel": {
            "models": [
                { "name": "User", "fields": [
                    { "name": "id", "kind": "scalar", "type": "Int", "isRequired": true },
                    { "name": "role", "kind": "enum", "type": "Role", "isRequired": true },
                    { "name": "posts", "kind": "object", "type": "Post", "isRequired": true,
                      "isList": true, "relationName": "PostToUser" }
                ] },
                { "name": "Post", "fields": [
                    { "name": "id", "kind": "scalar", "type": "Int", "isRequired": true },
                    { "name": "author", "kind": "object", "type": "User", "isRequired": true,
                      "relationName": "PostToUser" }
                ] }
            ],
            "enums": [{ "name": "Role", "values": [{ "name": "USER" }] }]
        } }
    });
    let path = dir.join("options.json");
    fs::write(&path, serde_json::to_string_pretty(&options).unwrap()).unwrap();
    path
}

#[test]
fn test_generate_writes_files() {
    let dir = TempDir::new().unwrap();
    write_options(dir.path(), serde_json::json!({ "dryRun": "false" }));

    let output = nestbase(
        dir.path(),
        &["generate", "--input", "options.json", "--no-format"],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let post = fs::read_to_string(dir.path().join("base/post.ts")).unwrap();
    assert!(post.contains("import { User } from './user';"));
    let user = fs::read_to_string(dir.path().join("base/user.ts")).unwrap();
    assert!(user.contains("import { Role } from '@prisma/client';"));
    assert!(dir.path().join("base/index.ts").exists());
}

#[test]
fn test_dry_run_is_the_default() {
    let dir = TempDir::new().unwrap();
    write_options(dir.path(), serde_json::json!({}));

    let output = nestbase(
        dir.path(),
        &["generate", "--input", "options.json", "--no-format"],
    );

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("[dry-run] Would write"));
    assert!(!dir.path().join("base").exists());
}

#[test]
fn test_flags_override_document_and_file() {
    let dir = TempDir::new().unwrap();
    write_options(dir.path(), serde_json::json!({ "dryRun": "true" }));
    fs::write(
        dir.path().join("nestbase.toml"),
        "[generator]\noutput = \"./from-file\"\nmakeIndexFile = false\n",
    )
    .unwrap();

    let output = nestbase(
        dir.path(),
        &[
            "generate",
            "--input",
            "options.json",
            "--no-format",
            "--no-dry-run",
            "--output",
            "./from-cli",
        ],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("from-cli/user.ts").exists());
    assert!(!dir.path().join("from-cli/index.ts").exists());
    assert!(!dir.path().join("from-file").exists());
}

#[test]
fn test_invalid_option_prints_usage() {
    let dir = TempDir::new().unwrap();
    write_options(dir.path(), serde_json::json!({ "dryRun": "perhaps" }));

    let output = nestbase(
        dir.path(),
        &["generate", "--input", "options.json", "--no-format"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage : "));
    assert!(stderr.contains("\tseparateRelationFields = (false) <- [separate relation fields]"));
    assert!(stderr.contains(r#"Your Input : {"dryRun":"perhaps"}"#));
}

#[test]
fn test_missing_input_is_reported() {
    let dir = TempDir::new().unwrap();

    let output = nestbase(dir.path(), &["generate", "--input", "absent.json"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unexpected error occurred"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();

    assert!(nestbase(dir.path(), &["init"]).status.success());
    let content = fs::read_to_string(dir.path().join("nestbase.toml")).unwrap();
    assert!(content.contains("[generator]"));

    assert!(!nestbase(dir.path(), &["init"]).status.success());
    assert!(nestbase(dir.path(), &["init", "--force"]).status.success());
}

#[test]
fn test_manifest() {
    let dir = TempDir::new().unwrap();
    let output = nestbase(dir.path(), &["manifest"]);

    assert!(output.status.success());
    let manifest: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(manifest["defaultOutput"], "../generated/base");
    assert_eq!(manifest["requiresGenerators"][0], "prisma-client-js");
}
