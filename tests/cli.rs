use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn aesthete(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("aesthete").unwrap();
    cmd.env("AESTHETE_DATA_DIR", data_dir)
        .env_remove("AESTHETE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn data_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn first_run_starts_a_draft_and_lists_it() {
    let dir = data_dir();

    aesthete(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Started a new draft."))
        .stdout(predicate::str::contains("Untitled Draft 1"));

    // Second run finds the stored draft and creates nothing
    aesthete(dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Started a new draft.").not())
        .stdout(predicate::str::contains("Untitled Draft 1"));

    assert!(dir.path().join("storage.json").exists());
}

#[test]
fn write_then_show_and_stats() {
    let dir = data_dir();

    aesthete(dir.path())
        .args(["write", "one\ntwo & three"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 words"));

    aesthete(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("one\ntwo & three"));

    aesthete(dir.path())
        .args(["show", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one<br>two &amp; three"));

    aesthete(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 words"))
        .stdout(predicate::str::contains("1 min read"));
}

#[test]
fn write_reads_stdin_when_no_text_given() {
    let dir = data_dir();

    aesthete(dir.path())
        .arg("write")
        .write_stdin("piped words here\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 words"));

    aesthete(dir.path())
        .args(["show", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("piped words here"));
}

#[test]
fn new_switch_and_rename() {
    let dir = data_dir();

    aesthete(dir.path())
        .arg("new")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Untitled Draft 2"));

    aesthete(dir.path())
        .args(["switch", "untitled draft 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to Untitled Draft 1"));

    aesthete(dir.path())
        .args(["rename", "untitled draft 1", "Chapter", "One"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed Untitled Draft 1 to Chapter One"));

    aesthete(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chapter One"))
        .stdout(predicate::str::contains("Untitled Draft 2"));

    aesthete(dir.path())
        .args(["switch", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Draft not found: nope"));
}

#[test]
fn delete_keeps_at_least_one_draft() {
    let dir = data_dir();

    aesthete(dir.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You must have at least one draft."));

    aesthete(dir.path()).arg("new").assert().success();

    aesthete(dir.path())
        .args(["rm", "untitled draft 2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Untitled Draft 2"))
        .stdout(predicate::str::contains("Now editing Untitled Draft 1"));
}

#[test]
fn goal_progress_and_celebration() {
    let dir = data_dir();

    aesthete(dir.path()).args(["write", "hello world"]).assert().success();

    aesthete(dir.path())
        .args(["goal", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal set to 3 words."))
        .stdout(predicate::str::contains("2/3 words"));

    aesthete(dir.path())
        .args(["write", "hello there world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal reached!"));

    // Reaching the goal clears it
    aesthete(dir.path())
        .arg("goal")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal reached!").not())
        .stdout(predicate::str::contains("3 words"));

    aesthete(dir.path())
        .args(["goal", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid word goal 'zero'"));
}

#[test]
fn find_and_replace() {
    let dir = data_dir();

    aesthete(dir.path())
        .args(["write", "the cat sat on the mat"])
        .assert()
        .success();

    aesthete(dir.path())
        .args(["find", "THE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matches: 2"));

    aesthete(dir.path())
        .args(["find", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0/0"));

    aesthete(dir.path())
        .args(["replace", "the", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced 1 occurrence."));

    aesthete(dir.path())
        .args(["replace", "at", "og", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced 3 occurrences."));

    aesthete(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("a cog sog on the mog"));
}

#[test]
fn export_markdown_to_stdout_and_file() {
    let dir = data_dir();

    aesthete(dir.path())
        .args(["write", "--html", "Some <b>bold</b> words"])
        .assert()
        .success();

    aesthete(dir.path())
        .args(["export", "markdown", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Some **bold** words"));

    let out = dir.path().join("out.txt");
    aesthete(dir.path())
        .args(["export", "text", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "Some bold words");

    aesthete(dir.path())
        .args(["export", "archive", "-o", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdout"));
}

#[test]
fn theme_and_typography_settings() {
    let dir = data_dir();

    aesthete(dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("theme       = light"));

    aesthete(dir.path())
        .args(["theme", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to sepia"));

    aesthete(dir.path())
        .args(["theme", "DARK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    aesthete(dir.path())
        .args(["theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for theme"));

    aesthete(dir.path())
        .args(["typography", "--font-size", "18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Font size set to 18px"))
        .stdout(predicate::str::contains("font size   = 18px"));
}

#[test]
fn config_get_and_set() {
    let dir = data_dir();

    aesthete(dir.path())
        .args(["config", "words_per_minute", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("words_per_minute set to 100"));

    aesthete(dir.path())
        .args(["config", "words_per_minute"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100"));

    aesthete(dir.path())
        .args(["config", "no_such_key"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown config key: no_such_key"));
}

#[test]
fn import_and_open_files() {
    let dir = data_dir();
    let notes = dir.path().join("notes.md");
    std::fs::write(&notes, "# Heading\n\nSome *text*").unwrap();

    aesthete(dir.path())
        .arg("import")
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported notes"));

    aesthete(dir.path())
        .arg("open")
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened"));

    aesthete(dir.path())
        .args(["show", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Heading</h1>"));

    let image = dir.path().join("picture.png");
    std::fs::write(&image, [0u8; 4]).unwrap();
    aesthete(dir.path())
        .arg("open")
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file"));
}
