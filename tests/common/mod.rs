//! Shared testing utilities for modplan CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated workspace for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    original_cwd: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let original_cwd = env::current_dir().expect("Failed to get current directory");

        Self { root, work_dir, original_cwd }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `modplan` binary within the workspace.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `modplan` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("modplan").expect("Failed to locate modplan binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Write the root workspace manifest with the given members, in order.
    pub fn write_workspace(&self, members: &[&str]) {
        let entries =
            members.iter().map(|member| format!("\"{}\"", member)).collect::<Vec<_>>().join(", ");
        let content = format!("[workspace]\nmembers = [{}]\n", entries);
        fs::write(self.work_dir.join("workspace.toml"), content)
            .expect("Failed to write workspace.toml");
    }

    /// Write one member's module manifest.
    pub fn write_module(
        &self,
        name: &str,
        language_version: u32,
        dependencies: &[&str],
        main_class: Option<&str>,
    ) {
        let dir = self.work_dir.join(name);
        fs::create_dir_all(&dir).expect("Failed to create module directory");

        let deps =
            dependencies.iter().map(|dep| format!("\"{}\"", dep)).collect::<Vec<_>>().join(", ");
        let mut content = format!(
            "[module]\nlanguage_version = {}\ndependencies = [{}]\n",
            language_version, deps
        );
        if let Some(main) = main_class {
            content.push_str(&format!("\n[application]\nmain_class = \"{}\"\n", main));
        }

        fs::write(dir.join("module.toml"), content).expect("Failed to write module.toml");
    }

    /// Write the demo workspace: one base library, a trainer, and an
    /// executable demo module depending on both.
    pub fn write_demo_workspace(&self) {
        self.write_workspace(&["ll4j-huzpsb", "ll4j-train", "ll4j-demo"]);
        self.write_module("ll4j-huzpsb", 8, &[], None);
        self.write_module(
            "ll4j-train",
            8,
            &["ll4j-huzpsb"],
            Some("huzpsb.ll4j.samples.TestTrain"),
        );
        self.write_module(
            "ll4j-demo",
            8,
            &["ll4j-huzpsb", "ll4j-train"],
            Some("huzpsb.ll4j.samples.TestMinRt"),
        );
    }

    /// Run `action` with the process CWD switched to the workspace.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Restore original CWD first (in case we're still in the temp dir)
        let _ = env::set_current_dir(&self.original_cwd);
    }
}
