//! Integration tests for dirmap


use std::fs;

use dirmap::decode;
use harness::{TestTree, dirmap_cmd, run_dirmap};
use predicates::prelude::*;

fn read_reports(tree: &TestTree) -> (String, String) {
    let json = fs::read_to_string(tree.path().join("doc/project_structure.json"))
        .expect("JSON report should exist");
    let markdown = fs::read_to_string(tree.path().join("doc/project_structure.md"))
        .expect("markdown report should exist");
    (json, markdown)
}

#[test]
fn test_writes_both_reports() {
    let tree = TestTree::new();
    tree.add_file("src/main.rs", "fn main() {}");
    tree.add_file("README.md", "# readme");

    dirmap_cmd(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanning"))
        .stdout(predicate::str::contains("Generated files:"))
        .stdout(predicate::str::contains("project_structure.json"))
        .stdout(predicate::str::contains("project_structure.md"));

    let (json, markdown) = read_reports(&tree);
    let root = decode(&json).expect("JSON report should decode");
    assert!(root.is_dir());
    assert!(markdown.starts_with("# Project Structure\n\n## Complete Tree\n\n"));
    assert!(markdown.contains("  - 📁 **src/**"), "{}", markdown);
    assert!(markdown.contains("    - 📄 `main.rs` (12 bytes)"), "{}", markdown);
    assert!(markdown.contains("  - 📄 `README.md` (8 bytes)"), "{}", markdown);
}

#[test]
fn test_excluded_entries_absent_from_reports() {
    let tree = TestTree::new();
    tree.add_file("app.py", "print('hi')");
    tree.add_file("app.pyc", "compiled");
    tree.add_file(".env", "SECRET=1");
    tree.add_file("node_modules/left-pad/index.js", "module.exports = 1");
    tree.add_file(".git/HEAD", "ref: refs/heads/main");
    tree.add_file(".next/cache.json", "{}");
    tree.add_file(".github/workflows/ci.yml", "on: push");

    let (_stdout, _stderr, success) = run_dirmap(tree.path(), &[]);
    assert!(success);

    let (json, markdown) = read_reports(&tree);
    for excluded in ["app.pyc", ".env", "node_modules", "left-pad", "/.git/", ".next"] {
        assert!(!json.contains(excluded), "{} in JSON: {}", excluded, json);
        assert!(!markdown.contains(excluded), "{} in markdown: {}", excluded, markdown);
    }
    assert!(!markdown.contains("**.git/**"), "{}", markdown);
    assert!(markdown.contains("**.github/**"), "{}", markdown);
    assert!(markdown.contains("`ci.yml`"), "{}", markdown);
    assert!(markdown.contains("`app.py`"), "{}", markdown);
}

#[test]
fn test_plain_style_and_custom_headers() {
    let tree = TestTree::new();
    tree.add_file("notes.txt", "0123456789");
    let out = tree.add_dir("reports");

    let (_stdout, _stderr, success) = run_dirmap(
        tree.path(),
        &[
            "--style",
            "plain",
            "--title",
            "Layout",
            "--heading",
            "Files",
            "-o",
            out.to_str().unwrap(),
        ],
    );
    assert!(success);

    let markdown = fs::read_to_string(out.join("project_structure.md")).unwrap();
    let lines: Vec<&str> = markdown.lines().collect();
    assert_eq!(lines[0], "# Layout");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "## Files");
    assert_eq!(lines[3], "");
    assert!(lines[4].starts_with("- [dir] "), "{}", markdown);
    assert!(lines.contains(&"  - [dir] reports/"), "{}", markdown);
    assert!(lines.contains(&"  - [file] notes.txt (10 bytes)"), "{}", markdown);
    assert!(!tree.path().join("doc").exists());
}

#[test]
fn test_directories_listed_before_files() {
    let tree = TestTree::new();
    tree.add_file("a_file.txt", "x");
    tree.add_file("z_dir/inner.txt", "x");
    let out = tree.add_dir("out");

    let (_stdout, _stderr, success) =
        run_dirmap(tree.path(), &["--style", "plain", "-o", out.to_str().unwrap()]);
    assert!(success);

    let markdown = fs::read_to_string(out.join("project_structure.md")).unwrap();
    let dir_pos = markdown.find("[dir] z_dir/").unwrap();
    let file_pos = markdown.find("[file] a_file.txt").unwrap();
    assert!(dir_pos < file_pos, "{}", markdown);
}

#[test]
fn test_custom_exclude_flag() {
    let tree = TestTree::new();
    tree.add_file("target/debug/app", "bin");
    tree.add_file("src/lib.rs", "");

    let (_stdout, _stderr, success) = run_dirmap(tree.path(), &["-I", "target"]);
    assert!(success);

    let (json, _markdown) = read_reports(&tree);
    assert!(!json.contains("target"), "{}", json);
    assert!(json.contains("lib.rs"), "{}", json);
}

#[test]
fn test_max_depth_flag() {
    let tree = TestTree::new();
    tree.add_file("top.txt", "x");
    tree.add_file("level1/level2/deep.txt", "x");

    let (_stdout, _stderr, success) = run_dirmap(tree.path(), &["-L", "1"]);
    assert!(success);

    let (json, markdown) = read_reports(&tree);
    assert!(markdown.contains("level1"), "{}", markdown);
    assert!(!json.contains("deep.txt"), "{}", json);
}

#[test]
fn test_rerun_is_idempotent() {
    let tree = TestTree::new();
    tree.add_file("a/b.txt", "bb");
    tree.add_file("c.txt", "ccc");
    let out = TestTree::new();
    let out_dir = out.path().to_str().unwrap();

    assert!(run_dirmap(tree.path(), &["-o", out_dir]).2);
    let first = fs::read_to_string(out.path().join("project_structure.json")).unwrap();
    assert!(run_dirmap(tree.path(), &["-o", out_dir]).2);
    let second = fs::read_to_string(out.path().join("project_structure.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_single_file_root() {
    let tree = TestTree::new();
    let file = tree.add_file("only.txt", "hello");
    let out = tree.add_dir("out");

    let (_stdout, _stderr, success) = run_dirmap(
        tree.path(),
        &[file.to_str().unwrap(), "-o", out.to_str().unwrap()],
    );
    assert!(success);

    let json = fs::read_to_string(out.join("project_structure.json")).unwrap();
    let node = decode(&json).unwrap();
    assert!(node.is_file());
    assert_eq!(node.size_bytes(), Some(5));
}

#[test]
fn test_default_root_has_no_current_dir_component() {
    let tree = TestTree::new();
    tree.add_file("src/lib.rs", "");

    let (_stdout, _stderr, success) = run_dirmap(tree.path(), &[]);
    assert!(success);

    let (json, _markdown) = read_reports(&tree);
    assert!(!json.contains("/./"), "{}", json);
    let root = decode(&json).unwrap();
    assert_eq!(root.path().file_name(), tree.path().file_name());
}
