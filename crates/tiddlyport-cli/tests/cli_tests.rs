//! End-to-end tests driving the `tiddlyport` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TIDDLERS: &str = r#"[
  {"title": "Contents", "text": "* [[Obsidian]]", "created": "20240101000000000", "modified": "20240101000000000"},
  {"title": "Obsidian", "text": "! Obsidian\n\n''Notes''", "tags": "Contents", "created": "20240101000000000", "modified": "20240101000000000"},
  {"title": "Typescript", "text": "Use //tsc//", "tags": "Obsidian", "created": "20240101000000000", "modified": "20240101000000000"}
]"#;

/// Scratch directory with an empty config file, so the user's own config
/// never leaks into a run
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        fs::write(dir.path().join("tiddlers.json"), TIDDLERS).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tiddlyport").unwrap();
        cmd.env_remove("RUST_LOG")
            .arg("-C")
            .arg(self.path("config.toml"));
        cmd
    }
}

#[test]
fn test_to_markdown_from_stdin() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("to-markdown")
        .write_stdin("! Title\n\nSome ''bold'' text")
        .assert()
        .success()
        .stdout("# Title\n\nSome **bold** text");
}

#[test]
fn test_to_wikitext_from_file() {
    let fx = Fixture::new();
    fs::write(fx.path("note.md"), "- one\n  - two").unwrap();

    fx.cmd()
        .arg("to-wikitext")
        .arg(fx.path("note.md"))
        .assert()
        .success()
        .stdout("* one\n** two");
}

#[test]
fn test_unterminated_fence_exits_nonzero() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("to-markdown")
        .write_stdin("```\nnever closed")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("to-wikitext")
        .write_stdin(vec![b'a', 0xff, b'\n'])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("UTF-8"));
}

#[test]
fn test_cited_quote_converts() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("to-markdown")
        .write_stdin("<<<\nQuoted\n<<< Someone\n")
        .assert()
        .success()
        .stdout("> Quoted\n> \u{2014} Someone\n");
}

#[test]
fn test_parse_prints_json_tree() {
    let fx = Fixture::new();
    let output = fx
        .cmd()
        .args(["parse", "wikitext"])
        .write_stdin("! Heading")
        .output()
        .unwrap();

    assert!(output.status.success());
    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["blocks"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_tree_lists_resolved_paths() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("tree")
        .arg(fx.path("tiddlers.json"))
        .args(["--toc", "Contents"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contents.md\tContents"))
        .stdout(predicate::str::contains("Obsidian/Obsidian.md\tObsidian"))
        .stdout(predicate::str::contains("Obsidian/Typescript.md\tTypescript"))
        .stdout(predicate::str::contains("\nObsidian/\n"));

    assert!(!fx.path("vault").exists());
}

#[test]
fn test_export_then_import() {
    let fx = Fixture::new();
    let vault = fx.path("vault");

    fx.cmd()
        .arg("export")
        .arg(fx.path("tiddlers.json"))
        .args(["--toc", "Contents"])
        .arg("-o")
        .arg(&vault)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 notes"));

    let typescript = fs::read_to_string(vault.join("Obsidian/Typescript.md")).unwrap();
    assert_eq!(typescript, "---\ntags: Obsidian\n---\nUse _tsc_");

    let json_out = fx.path("imported.json");
    fx.cmd()
        .arg("import")
        .arg(&vault)
        .arg("-o")
        .arg(&json_out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Imported 3 notes"));

    let imported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    let titles: Vec<&str> = imported
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["title"].as_str())
        .collect();
    assert_eq!(titles.len(), 3);
    assert!(titles.contains(&"Typescript"));
}

#[test]
fn test_export_without_front_matter() {
    let fx = Fixture::new();
    let vault = fx.path("vault");

    fx.cmd()
        .arg("export")
        .arg(fx.path("tiddlers.json"))
        .arg("--no-front-matter")
        .arg("-o")
        .arg(&vault)
        .assert()
        .success();

    // no --toc, so everything lands flat
    let typescript = fs::read_to_string(vault.join("Typescript.md")).unwrap();
    assert_eq!(typescript, "Use _tsc_");
}

#[test]
fn test_export_without_output_dir_fails() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("export")
        .arg(fx.path("tiddlers.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no output directory"));
}
