//! End-to-end tests for the datasheet-lint CLI.
//!
//! Tests invoke the `datasheet-lint` binary as a subprocess and check its
//! report and exit code.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const CLEAN: &str = r#"---
title: Contact High School
source: https://www.cs.cornell.edu/~arb/data/contact-high-school/
license: CC-BY-4.0
network-type:
  - simplicial-complex
  - hypergraph
tags:
  - contact
attachments:
  revision-1:
    url: https://example.org/contact-high-school.txt.gz
    size: 2048
statistics:
  node-count: 327
---

Face-to-face contacts between students.
"#;

const MISSING_SOURCE: &str = r#"---
title: Karate Club
network-type:
  - hypergraph
attachments:
  revision-1:
    url: https://example.org/karate.txt.gz
---
"#;

fn lint() -> Command {
    Command::new(env!("CARGO_BIN_EXE_datasheet-lint"))
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn run(cmd: &mut Command) -> (Output, String) {
    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    (output, stdout)
}

#[test]
fn e2e_clean_file_exits_zero_and_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let clean = write(dir.path(), "clean.mdx", CLEAN);

    let (output, stdout) = run(lint().arg(&clean));
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.is_empty());
}

#[test]
fn e2e_batch_with_one_broken_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let clean = write(dir.path(), "clean.mdx", CLEAN);
    let broken = write(dir.path(), "broken.mdx", MISSING_SOURCE);

    let (output, stdout) = run(lint().arg(&clean).arg(&broken));
    assert_eq!(output.status.code(), Some(1));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Found 1 frontmatter issue(s):");
    assert_eq!(
        lines[1],
        format!("{}:1: Missing required key 'source'.", broken.display())
    );
}

#[test]
fn e2e_report_is_sorted_across_files() {
    let dir = TempDir::new().unwrap();
    let b = write(dir.path(), "b.mdx", "no frontmatter here\n");
    let a = write(dir.path(), "a.mdx", "---\n---\n");

    let (output, stdout) = run(lint().arg(&b).arg(&a));
    assert_eq!(output.status.code(), Some(1));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Found 4 frontmatter issue(s):");
    assert!(lines[1].starts_with(&a.display().to_string()));
    assert!(lines[1].ends_with("Missing required key 'network-type'."));
    assert!(lines[4].starts_with(&b.display().to_string()));
    assert!(lines[4].ends_with("Missing frontmatter block at top of file."));
}

#[test]
fn e2e_discovers_mdx_under_root() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "benson/clean.mdx", CLEAN);
    let nested = write(dir.path(), "benson/coauth/broken.mdx", MISSING_SOURCE);
    write(dir.path(), "benson/README.md", "---\n---\n");

    let (output, stdout) = run(lint().arg("--root").arg(dir.path()));
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("Found 1 frontmatter issue(s):"));
    assert!(stdout.contains(&nested.display().to_string()));
}

#[test]
fn e2e_empty_root_is_clean() {
    let dir = TempDir::new().unwrap();
    let (output, stdout) = run(lint().arg("--root").arg(dir.path()));
    assert!(output.status.success());
    assert!(stdout.is_empty());
}

#[test]
fn e2e_json_format() {
    let dir = TempDir::new().unwrap();
    let broken = write(
        dir.path(),
        "revisions.mdx",
        "---\ntitle: t\nsource: s\nnetwork-type: [hypergraph]\nattachments:\n  revision-2:\n    url: https://x/2\n---\n",
    );

    let (output, stdout) = run(lint().args(["--format", "json"]).arg(&broken));
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["total"], 2);
    assert_eq!(report["issues"][0]["line"], 5);
    assert_eq!(
        report["issues"][0]["message"],
        "Revisions must be consecutive. Found: [2], expected: [1]."
    );
    assert_eq!(
        report["issues"][1]["message"],
        "Revisions must start with revision-1."
    );
}

#[test]
fn e2e_unreadable_file_is_an_error_not_an_issue() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.mdx");

    let (output, stdout) = run(lint().arg(&missing));
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.mdx"));
}

#[test]
fn e2e_linting_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let broken = write(
        dir.path(),
        "scrambled.mdx",
        "---\nsource: s\ntitle: t\nnetwork-type: [hypergraph, cell-complex, bogus]\n---\n",
    );

    let (_, first) = run(lint().arg(&broken));
    let (_, second) = run(lint().arg(&broken));
    assert!(!first.is_empty());
    assert_eq!(first, second);
}
