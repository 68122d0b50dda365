//! Shared fixtures and a process-level harness for the CLI tests.

#![allow(dead_code)]

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Manifest fixture: three kept inputs, two discarded.
pub const MANIFEST: &str = r#"
[action]
name = "Install Upstream"
description = "Install Upstream with a reduced set of knobs"

[action.branding]
icon = "box"
color = "rainbow"

[wrapped]
slug = "acme/upstream-action"
tag_default_input = "source-tag"

[wrapped.with]
determinate = true

[inputs]
keep = ["extra-conf", "source-tag", "logger"]
discard = ["flakehub", "start-daemon"]
"#;

/// Source fixture matching `MANIFEST` exactly.
pub const SOURCE: &str = r#"{
    "name": "Upstream Installer",
    "description": "Installs upstream",
    "branding": {"icon": "package", "color": "purple"},
    "inputs": {
        "extra-conf": {"description": "Extra configuration", "required": false},
        "source-tag": {"description": "Tag to install", "default": "v0.0.0"},
        "logger": {"description": "Logger to use", "default": "full", "required": true},
        "flakehub": {"description": "Enable FlakeHub", "default": false},
        "start-daemon": {"description": "Start the daemon", "required": false}
    },
    "runs": {"using": "node20", "main": "dist/index.js"}
}"#;

/// README template fixture with all three markers.
pub const TEMPLATE: &str = "# Upstream wrapper

Pinned checkout: <!-- checkout_action_tag -->

Current release: <!-- version -->

## Inputs

<!-- table -->
";

pub struct TestHarness {
    dir: TempDir,
}

impl TestHarness {
    /// Temp dir populated with the standard manifest, source, and
    /// template fixtures.
    pub fn new() -> Self {
        let harness = Self {
            dir: TempDir::new().expect("create temp dir"),
        };
        harness.write("distill.toml", MANIFEST);
        harness.write("upstream.json", SOURCE);
        harness.write("README.tpl.md", TEMPLATE);
        harness
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read output")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// The binary under test with its working directory in the temp dir.
    pub fn distill(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("distill").expect("binary under test");
        cmd.current_dir(self.dir.path());
        cmd.args(args);
        cmd
    }

    /// `distill generate` with the standard fixture arguments.
    pub fn generate(&self, extra: &[&str]) -> Command {
        let mut args = vec![
            "generate",
            "--source",
            "upstream.json",
            "--action-out",
            "action.yml",
            "--readme-template",
            "README.tpl.md",
            "--readme-out",
            "README.md",
            "--release-tag",
            "v1.2.3",
            "--wrapped-ref",
            "deadbeef",
            "--checkout-tag",
            "v5",
        ];
        args.extend_from_slice(extra);
        self.distill(&args)
    }
}
