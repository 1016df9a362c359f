//! End-to-end checks of the `slidegen` binary against a temp data dir.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn slidegen(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slidegen"))
        .arg("--config")
        .arg(data_dir.join("missing-config.toml"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_slidegen"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");
    let text = stdout(&output);
    for command in [
        "list", "render", "export", "present", "edit", "apply-all", "undo", "redo", "reset",
    ] {
        assert!(text.contains(command), "help is missing {}", command);
    }
}

#[test]
fn test_list_shows_starter_deck() {
    let dir = TempDir::new().unwrap();
    let output = slidegen(dir.path(), &["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().next().unwrap().starts_with("> 01"));
    assert!(text.contains("PRESENTATION TITLE"));
}

#[test]
fn test_add_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    assert!(slidegen(dir.path(), &["add"]).status.success());
    let text = stdout(&slidegen(dir.path(), &["list"]));
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().last().unwrap().starts_with("> 04"));
    assert!(text.contains("New Slide"));
}

#[test]
fn test_delete_last_slide_fails() {
    let dir = TempDir::new().unwrap();
    assert!(slidegen(dir.path(), &["delete", "1"]).status.success());
    assert!(slidegen(dir.path(), &["delete", "1"]).status.success());
    let output = slidegen(dir.path(), &["delete", "1"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_render_single_slide_html() {
    let dir = TempDir::new().unwrap();
    let output = slidegen(dir.path(), &["render", "--slide", "3"]);
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains("data-layout=\"big_number\""));
    assert!(html.contains("95%"));
}

#[test]
fn test_apply_all_theme() {
    let dir = TempDir::new().unwrap();
    assert!(slidegen(dir.path(), &["apply-all", "--theme", "bri"]).status.success());
    let html = stdout(&slidegen(dir.path(), &["render"]));
    assert_eq!(html.matches("theme-bri").count(), 3);
}

#[test]
fn test_export_writes_pdf() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.pdf");
    let output = slidegen(dir.path(), &["export", "--out", out.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(std::fs::read(&out).unwrap().starts_with(b"%PDF"));
    assert!(stdout(&output).contains("Exported 3 pages"));
}

#[test]
fn test_edit_title_and_points_of_chosen_slide() {
    let dir = TempDir::new().unwrap();
    let output = slidegen(dir.path(), &["edit", "--slide", "2", "title", "Roadmap"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(slidegen(dir.path(), &["edit", "add-point", "Ship it"]).status.success());

    let text = stdout(&slidegen(dir.path(), &["list"]));
    assert!(text.lines().nth(1).unwrap().starts_with("> 02"));
    assert!(text.contains("Roadmap"));

    let html = stdout(&slidegen(dir.path(), &["render", "--slide", "2"]));
    assert!(html.contains("Ship it"));
}

#[test]
fn test_edit_rejects_unknown_layout_and_missing_point() {
    let dir = TempDir::new().unwrap();
    let output = slidegen(dir.path(), &["edit", "layout", "hologram"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown layout"));

    let output = slidegen(dir.path(), &["edit", "set-point", "40", "x"]);
    assert!(!output.status.success());
}

#[test]
fn test_undo_and_redo_across_runs() {
    let dir = TempDir::new().unwrap();
    assert!(!slidegen(dir.path(), &["undo"]).status.success());

    assert!(slidegen(dir.path(), &["edit", "title", "Renamed"]).status.success());
    assert!(stdout(&slidegen(dir.path(), &["list"])).contains("Renamed"));

    assert!(slidegen(dir.path(), &["undo"]).status.success());
    let text = stdout(&slidegen(dir.path(), &["list"]));
    assert!(!text.contains("Renamed"));
    assert!(text.contains("PRESENTATION TITLE"));

    assert!(slidegen(dir.path(), &["redo"]).status.success());
    assert!(stdout(&slidegen(dir.path(), &["list"])).contains("Renamed"));
    assert!(!slidegen(dir.path(), &["redo"]).status.success());
}

#[test]
fn test_edit_table_rows() {
    let dir = TempDir::new().unwrap();
    let args = ["edit", "--slide", "1", "layout", "table"];
    assert!(slidegen(dir.path(), &args).status.success());
    let args = ["edit", "table", "--row", "Name, Value", "--row", "a, 1"];
    assert!(slidegen(dir.path(), &args).status.success());
    let html = stdout(&slidegen(dir.path(), &["render", "--slide", "1"]));
    assert!(html.contains("data-layout=\"table\""));
    assert!(html.contains(">Value<"));
}
