use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway data directory plus a command builder pointed at it
pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn data_dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("quotebook").expect("Failed to find binary");
        cmd.arg("--data-dir")
            .arg(self.dir.path())
            .env_remove("RUST_LOG")
            .env_remove("QUOTEBOOK_PATH");
        cmd
    }

    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run command");
        assert!(
            output.status.success(),
            "{:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("Parse failed")
    }

    pub fn list_ids(&self) -> Vec<String> {
        self.json(&["list"])
            .as_array()
            .expect("Expected quote array")
            .iter()
            .map(|q| q["id"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
