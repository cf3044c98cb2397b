mod common;

use assert_fs::prelude::*;
use common::{assert_contains_all, TestSite, SAMPLE_SCRIPT};
use predicates::prelude::*;

/// Integration tests for the gallerysync CLI
/// These tests run the compiled binary against temporary site layouts

#[test]
fn test_cli_help() {
    let site = TestSite::new();
    let output = site.run(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_contains_all(&stdout, &["sync", "list", "init"]);
}

#[test]
fn test_cli_version() {
    let site = TestSite::new();
    let output = site.run(&["--version"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("gallerysync"));
}

#[test]
fn test_bare_invocation_updates_script() {
    let site = TestSite::new()
        .with_images(&["b.png", "a.jpg", "c.txt"])
        .with_script(SAMPLE_SCRIPT);

    let output = site.run(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_contains_all(
        &stdout,
        &["Found 2 images", "assets/image/a.jpg", "successfully updated"],
    );

    let expected = "document.addEventListener('DOMContentLoaded', () => {\n    const images = [\n        'assets/image/a.jpg',\n        'assets/image/b.png'\n    ];\n\n    let current = 0;\n});\n";
    site.temp_dir
        .child("script.js")
        .assert(predicate::str::diff(expected));
}

#[test]
fn test_second_sync_reports_no_changes() {
    let site = TestSite::new()
        .with_images(&["a.png"])
        .with_script(SAMPLE_SCRIPT);

    assert!(site.run(&["sync"]).status.success());
    let after_first = site.script();

    let output = site.run(&["sync"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No changes needed."));
    assert_eq!(site.script(), after_first);
}

#[test]
fn test_missing_image_directory() {
    let site = TestSite::new().with_script(SAMPLE_SCRIPT);
    std::fs::remove_dir_all(site.root().join("assets")).expect("Failed to remove dir");

    let output = site.run(&["sync"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Image directory not found"));
    site.temp_dir
        .child("script.js")
        .assert(predicate::str::diff(SAMPLE_SCRIPT));
}

#[test]
fn test_missing_target_file_fails() {
    let site = TestSite::new().with_images(&["a.png"]);

    let output = site.run(&["sync"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("target file"));
}

#[test]
fn test_missing_declaration_warns() {
    let script = "const slides = [];\n";
    let site = TestSite::new().with_images(&["a.png"]).with_script(script);

    let output = site.run(&["sync"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No image list declaration found"));
    assert_eq!(site.script(), script);
}

#[test]
fn test_dry_run_keeps_script() {
    let site = TestSite::new()
        .with_images(&["a.png"])
        .with_script(SAMPLE_SCRIPT);

    let output = site.run(&["sync", "--dry-run"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("would be updated"));
    assert_eq!(site.script(), SAMPLE_SCRIPT);
}

#[test]
fn test_list_command() {
    let site = TestSite::new().with_images(&["z.gif", "m.WEBP", "notes.md"]);

    let output = site.run(&["list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_contains_all(&stdout, &["Found 2 images", "assets/image/m.WEBP", "assets/image/z.gif"]);
    assert!(!stdout.contains("notes.md"));
}

#[test]
fn test_list_missing_image_directory() {
    let site = TestSite::new();
    std::fs::remove_dir_all(site.root().join("assets")).expect("Failed to remove dir");

    let output = site.run(&["list"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Image directory not found"));
}

#[test]
fn test_crlf_script_round_trip() {
    let script = "a();\r\n    const images = [\r\n        'x'\r\n    ];\r\nb();\r\n";
    let site = TestSite::new().with_images(&["a.png"]).with_script(script);

    assert!(site.run(&["sync"]).status.success());

    assert_eq!(
        site.script(),
        "a();\r\n    const images = [\r\n        'assets/image/a.png'\r\n    ];\r\nb();\r\n"
    );
}

#[test]
fn test_root_override() {
    let site = TestSite::new()
        .with_images(&["a.png"])
        .with_script(SAMPLE_SCRIPT);
    let root = site.root().to_string_lossy().to_string();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_gallerysync"))
        .args(["sync", "--root", &root])
        .env("XDG_CONFIG_HOME", site.root().join(".config"))
        .output()
        .expect("Failed to execute gallerysync");

    assert!(output.status.success());
    assert!(site.script().contains("'assets/image/a.png'"));
}

#[test]
fn test_local_config_file() {
    let site = TestSite::new().with_script("const photos = [];\n");
    site.temp_dir
        .child("static/pics")
        .create_dir_all()
        .expect("Failed to create image dir");
    site.temp_dir
        .child("static/pics/one.PNG")
        .touch()
        .expect("Failed to create image");
    site.temp_dir
        .child("gallerysync.yml")
        .write_str(
            r#"
image_dir: "static/pics"
path_prefix: "/static/pics/"
extensions: [".png"]
declaration:
  variable: "photos"
  indent: "  "
"#,
        )
        .expect("Failed to write config");

    let output = site.run(&[]);

    assert!(output.status.success());
    assert_eq!(site.script(), "const photos = [\n  '/static/pics/one.PNG'\n];\n");
}

#[test]
fn test_init_writes_config() {
    let site = TestSite::new();
    let config_path = site.root().join("custom.yml");
    let config_arg = config_path.to_string_lossy().to_string();

    let output = site.run(&["init", "--config", &config_arg]);

    assert!(output.status.success());
    site.temp_dir
        .child("custom.yml")
        .assert(predicate::str::contains("image_dir: assets/image"));

    // Refuses to overwrite without --force
    let output = site.run(&["init", "--config", &config_arg]);
    assert!(!output.status.success());

    let output = site.run(&["init", "--config", &config_arg, "--force"]);
    assert!(output.status.success());
}

#[test]
fn test_error_handling_invalid_config() {
    let site = TestSite::new();
    site.temp_dir
        .child("invalid-config.yml")
        .write_str("invalid: yaml: content: [")
        .expect("Failed to write config");

    let output = site.run(&["--config", "invalid-config.yml", "sync"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse") || stderr.contains("config"));
}

#[test]
fn test_invalid_command() {
    let site = TestSite::new();
    let output = site.run(&["nonexistent-command"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error") || stderr.contains("unrecognized"));
}
