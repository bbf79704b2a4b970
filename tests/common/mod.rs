//! Shared testing utilities for tsmake CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the fake compiler script installed into test projects.
const FAKE_COMPILER: &str = "fake-tsc";

/// File the fake compiler records its argv into, one argument per line.
const RECORDED_ARGS: &str = "tsc-args.txt";

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("project");
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");

        Self { root, project_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Build a command for invoking the compiled `tsmake` binary in the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tsmake").expect("Failed to locate tsmake binary");
        cmd.current_dir(&self.project_dir);
        cmd
    }

    /// Write `tsmake.toml` with the given content.
    pub fn write_config(&self, content: &str) {
        fs::write(self.project_dir.join("tsmake.toml"), content)
            .expect("Failed to write tsmake.toml");
    }

    /// Install a fake compiler exiting with `exit_code` and write a config
    /// pointing at it.
    ///
    /// The script records its argv into `tsc-args.txt`, one argument per
    /// line, so tests can assert on the exact invocation.
    pub fn install_fake_compiler(&self, exit_code: i32) {
        self.install_fake_compiler_with_extra_files(exit_code, &[]);
    }

    /// Like `install_fake_compiler`, with `sources.extra_files` entries.
    pub fn install_fake_compiler_with_extra_files(&self, exit_code: i32, extra_files: &[&str]) {
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > {}\nexit {}\n",
            RECORDED_ARGS, exit_code
        );
        let script_path = self.project_dir.join(FAKE_COMPILER);
        fs::write(&script_path, script).expect("Failed to write fake compiler");
        let mut perms =
            fs::metadata(&script_path).expect("Failed to stat fake compiler").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to chmod fake compiler");

        let extras = extra_files
            .iter()
            .map(|file| format!("\"{}\"", file))
            .collect::<Vec<_>>()
            .join(", ");
        self.write_config(&format!(
            r#"[sources]
extra_files = [{}]

[compiler]
program = "./{}"
"#,
            extras, FAKE_COMPILER
        ));
    }

    /// Arguments the fake compiler was last invoked with.
    pub fn recorded_compiler_args(&self) -> Vec<String> {
        let content = fs::read_to_string(self.project_dir.join(RECORDED_ARGS))
            .expect("Fake compiler was never invoked");
        content.lines().map(|line| line.to_string()).collect()
    }

    /// Whether the fake compiler was invoked at all.
    pub fn compiler_was_invoked(&self) -> bool {
        self.project_dir.join(RECORDED_ARGS).exists()
    }

    /// Write a source file under `src/`.
    pub fn write_source(&self, name: &str, content: &str) {
        let src = self.project_dir.join("src");
        fs::create_dir_all(&src).expect("Failed to create src directory");
        fs::write(src.join(name), content).expect("Failed to write source file");
    }

    /// Write a static asset under `src/static/`, creating parent directories.
    pub fn write_static_asset(&self, relative_path: &str, content: &str) {
        let path = self.project_dir.join("src").join("static").join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create static asset directories");
        }
        fs::write(path, content).expect("Failed to write static asset");
    }

    /// Ensure `src/static/` exists even when no asset is written.
    pub fn create_static_dir(&self) {
        fs::create_dir_all(self.project_dir.join("src").join("static"))
            .expect("Failed to create static directory");
    }

    /// Path to the output directory.
    pub fn dist(&self) -> PathBuf {
        self.project_dir.join("dist")
    }

    /// Read a file from the output directory.
    pub fn read_dist_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dist().join(relative_path)).expect("Missing output file")
    }

    /// Snapshot of the output directory: sorted (relative path, contents).
    pub fn dist_snapshot(&self) -> Vec<(String, Vec<u8>)> {
        let mut entries = Vec::new();
        collect_files(&self.dist(), &self.dist(), &mut entries);
        entries.sort();
        entries
    }
}

#[allow(dead_code)]
fn collect_files(base: &Path, dir: &Path, entries: &mut Vec<(String, Vec<u8>)>) {
    for entry in fs::read_dir(dir).expect("Failed to read output directory") {
        let entry = entry.expect("Failed to read output directory entry");
        let path = entry.path();
        if path.is_dir() {
            collect_files(base, &path, entries);
        } else {
            let relative = path
                .strip_prefix(base)
                .expect("Output file outside output directory")
                .display()
                .to_string();
            let contents = fs::read(&path).expect("Failed to read output file");
            entries.push((relative, contents));
        }
    }
}
