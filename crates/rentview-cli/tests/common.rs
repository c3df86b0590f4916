use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn write_records(&self, name: &str, json: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, json).expect("write records file");
        path
    }

    #[allow(dead_code)]
    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.dir.path().join("config.toml"), toml).expect("write config");
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rentview").expect("binary builds");
        cmd.arg("--data-dir").arg(self.dir.path());
        cmd
    }
}
