// End-to-end tests: drive the compiled binary against a temporary fixture
// tree and assert on the bytes left behind.
// Requires: assert_cmd, predicates, tempfile crates in [dev-dependencies]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn bless_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bless").unwrap();
    cmd.current_dir(root);
    cmd
}

/// resources/alpha/foo with diverging actual and expect contents, plus a
/// second module and a snapshot with no baseline yet.
fn fixture_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let resources = tmp.path().join("resources");
    fs::create_dir_all(resources.join("alpha")).unwrap();
    fs::create_dir_all(resources.join("beta")).unwrap();
    fs::write(resources.join("alpha/foo-actual.json.xz"), b"fresh foo").unwrap();
    fs::write(resources.join("alpha/foo-expect.json.xz"), b"stale foo").unwrap();
    fs::write(resources.join("beta/bar-actual.json.xz"), b"fresh bar").unwrap();
    fs::write(resources.join("beta/notes.txt"), b"not a snapshot").unwrap();
    tmp
}

fn read(root: &Path, rel: &str) -> Vec<u8> {
    fs::read(root.join(rel)).unwrap()
}

#[test]
fn confirming_copies_actual_over_expect() {
    let tmp = fixture_tree();

    bless_cmd(tmp.path())
        .args(["alpha", "foo"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Mod Glob: \"alpha\", Tag Glob: \"foo-actual.json.xz\""))
        .stdout(contains("foo-actual.json.xz"));

    assert_eq!(read(tmp.path(), "resources/alpha/foo-expect.json.xz"), b"fresh foo");
    assert_eq!(read(tmp.path(), "resources/alpha/foo-actual.json.xz"), b"fresh foo");
    // The other module was outside the glob and stays unblessed.
    assert!(!tmp.path().join("resources/beta/bar-expect.json.xz").exists());
}

#[test]
fn uppercase_y_also_confirms() {
    let tmp = fixture_tree();

    bless_cmd(tmp.path())
        .args(["alpha", "foo"])
        .write_stdin("Y\n")
        .assert()
        .success();

    assert_eq!(read(tmp.path(), "resources/alpha/foo-expect.json.xz"), b"fresh foo");
}

#[test]
fn declining_leaves_every_file_untouched() {
    let tmp = fixture_tree();

    bless_cmd(tmp.path())
        .args(["alpha", "foo"])
        .write_stdin("N\n")
        .assert()
        .success()
        .stdout(contains("Aborted"));

    assert_eq!(read(tmp.path(), "resources/alpha/foo-expect.json.xz"), b"stale foo");
    assert_eq!(read(tmp.path(), "resources/alpha/foo-actual.json.xz"), b"fresh foo");
}

#[test]
fn pressing_enter_declines() {
    let tmp = fixture_tree();

    bless_cmd(tmp.path())
        .args(["alpha", "foo"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Aborted"));

    assert_eq!(read(tmp.path(), "resources/alpha/foo-expect.json.xz"), b"stale foo");
}

#[test]
fn star_globs_bless_every_module() {
    let tmp = fixture_tree();

    bless_cmd(tmp.path())
        .args(["*", "*"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("resources/alpha/foo-actual.json.xz"))
        .stdout(contains("resources/beta/bar-actual.json.xz"));

    assert_eq!(read(tmp.path(), "resources/alpha/foo-expect.json.xz"), b"fresh foo");
    // A baseline is created where none existed.
    assert_eq!(read(tmp.path(), "resources/beta/bar-expect.json.xz"), b"fresh bar");
    // Non-snapshot files are never candidates.
    assert_eq!(read(tmp.path(), "resources/beta/notes.txt"), b"not a snapshot");
}

#[test]
fn no_match_is_a_quiet_no_op() {
    let tmp = fixture_tree();

    bless_cmd(tmp.path())
        .args(["gamma", "*"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Bless?"));

    assert_eq!(read(tmp.path(), "resources/alpha/foo-expect.json.xz"), b"stale foo");
}

#[test]
fn invalid_glob_fails_before_any_traversal() {
    let tmp = fixture_tree();

    bless_cmd(tmp.path())
        .args(["[", "*"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("bless::pattern"));

    assert_eq!(read(tmp.path(), "resources/alpha/foo-expect.json.xz"), b"stale foo");
}

#[test]
fn missing_resources_directory_is_fatal() {
    let tmp = TempDir::new().unwrap();

    bless_cmd(tmp.path())
        .args(["*", "*"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("bless::walk"));
}
