//! Common test utilities and helpers for gallerysync tests

#![allow(dead_code)]

use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::path::Path;
use std::process::{Command, Output};

/// A throwaway site layout: `assets/image/` plus an optional `script.js`
pub struct TestSite {
    pub temp_dir: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        temp_dir
            .child("assets/image")
            .create_dir_all()
            .expect("Failed to create image dir");
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn with_images(self, names: &[&str]) -> Self {
        for name in names {
            self.temp_dir
                .child("assets/image")
                .child(name)
                .touch()
                .expect("Failed to create image");
        }
        self
    }

    pub fn with_script(self, content: &str) -> Self {
        self.temp_dir
            .child("script.js")
            .write_str(content)
            .expect("Failed to write script");
        self
    }

    pub fn script(&self) -> String {
        std::fs::read_to_string(self.root().join("script.js")).expect("Failed to read script")
    }

    /// Run the compiled binary inside the site with an isolated config home
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_gallerysync"))
            .args(args)
            .current_dir(self.root())
            .env("XDG_CONFIG_HOME", self.root().join(".config"))
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute gallerysync")
    }
}

/// A script with an outdated gallery declaration
pub const SAMPLE_SCRIPT: &str = "document.addEventListener('DOMContentLoaded', () => {\n    const images = [\n        'assets/image/removed.png'\n    ];\n\n    let current = 0;\n});\n";

/// Assertion helpers for test validation
pub fn assert_contains_all(text: &str, expected: &[&str]) {
    for item in expected {
        assert!(
            text.contains(item),
            "Expected text to contain '{}', but it didn't. Text: {}",
            item,
            text
        );
    }
}
