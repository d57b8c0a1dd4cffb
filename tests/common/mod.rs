#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the scaffold-audit binary.
#[macro_export]
macro_rules! scaffold_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("scaffold-audit"))
    };
}

pub const VALID_PYPROJECT: &str = r#"[tool.poetry]
name = "safety-for-agentic-ai"
version = "0.1.0"

[tool.poetry.dependencies]
python = "^3.10"
garak = "^0.9"
huggingface_hub = "*"
vllm = "0.6.0"
datasets = "*"
wildguard = "*"
"#;

pub const VALID_COMPOSE: &str = "services:\n  guardrails:\n    image: nemo-guardrails:latest\n";

pub const REQUIRED_DIRS: [&str; 5] = [
    "notebooks",
    "notebooks/scripts",
    "notebooks/configs",
    "deploy",
    "docs",
];

/// Creates a temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture holding a scaffold that passes every check.
    pub fn complete() -> Self {
        let fixture = Self::new();
        for dir in REQUIRED_DIRS {
            fixture.create_dir(dir);
        }
        fixture.create_file("pyproject.toml", VALID_PYPROJECT);
        fixture.create_file("README.md", "# Safety for Agentic AI\n");
        fixture.create_file("LICENSE", "Apache-2.0\n");
        fixture.create_file("notebooks/README.md", "# Notebooks\n");
        for notebook in [
            "Step0_Setup",
            "Step1_Evaluation",
            "Step2_Safety_Post_Training",
            "Step3_Post_Training_Eval",
            "Step4_Run_Inference_with_NeMo_Guardrails_Docker",
        ] {
            fixture.create_file(&format!("notebooks/{notebook}.ipynb"), "{\"cells\": []}\n");
        }
        fixture.create_file("deploy/docker-compose.yaml", VALID_COMPOSE);
        fixture.create_file("deploy/docker-compose-guardrails.yaml", VALID_COMPOSE);
        fixture.create_file(
            "notebooks/configs/garak_base_config.yaml",
            "plugins:\n  probe_spec: all\n",
        );
        fixture.create_file(
            "notebooks/configs/deepseek_sft.yaml",
            "learning_rate: 0.0001\nepochs: 3\n",
        );
        fixture.create_file(
            "notebooks/scripts/serve.py",
            "def main():\n    print('serving')\n\n\nif __name__ == '__main__':\n    main()\n",
        );
        fixture.create_script("deploy/start.sh", true);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Creates a shell script, optionally marked executable.
    pub fn create_script(&self, relative_path: &str, executable: bool) {
        self.create_file(relative_path, "#!/bin/sh\necho ok\n");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mode = if executable { 0o755 } else { 0o644 };
            fs::set_permissions(
                self.dir.path().join(relative_path),
                fs::Permissions::from_mode(mode),
            )
            .expect("Failed to set permissions");
        }
    }

    /// Removes a file from the temp directory.
    pub fn remove_file(&self, relative_path: &str) {
        fs::remove_file(self.dir.path().join(relative_path)).expect("Failed to remove file");
    }

    /// Creates a scaffold-audit config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".scaffold-audit.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads and parses the JSON report.
    pub fn json_report(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.dir.path().join("audit_report.json"))
            .expect("Failed to read JSON report");
        serde_json::from_str(&content).expect("JSON report should parse")
    }

    /// Reads the text report.
    pub fn text_report(&self) -> String {
        fs::read_to_string(self.dir.path().join("audit_report.txt"))
            .expect("Failed to read text report")
    }
}
