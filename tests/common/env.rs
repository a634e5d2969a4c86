//! Test environment builder for isolated publisher runs.
//!
//! `git`, `gsutil`, and `yarn` are replaced by small shell scripts that
//! append each invocation to `calls.log` and exit with configurable codes.
//! The binary finds them through the `ASSET_PUBLISHER_*` tool overrides.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const ENV_OVERRIDES: &[&str] = &[
    "ASSET_PUBLISHER_BUCKET",
    "ASSET_PUBLISHER_PUBLIC_URL",
    "ASSET_PUBLISHER_CONSOLE_URL",
    "ASSET_PUBLISHER_CONSOLE_PROJECT",
    "ASSET_PUBLISHER_WEB_DIR",
    "ASSET_PUBLISHER_BUILD_OUTPUT",
    "ASSET_PUBLISHER_COLOR",
    "RUST_LOG",
];

/// Result of running the publisher binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories and fake tools
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    tools_dir: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn tool_path(&self, name: &str) -> PathBuf {
        self.tools_dir.join(name)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(path, content).expect("Failed to write project file");
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("ASSET_PUBLISHER_GIT", self.tool_path("git"))
            .env("ASSET_PUBLISHER_GSUTIL", self.tool_path("gsutil"))
            .env("ASSET_PUBLISHER_YARN", self.tool_path("yarn"));
        for key in ENV_OVERRIDES {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute asset-publisher");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Tool invocations so far, one line each
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.tools_dir.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn calls_to(&self, tool: &str) -> Vec<String> {
        let prefix = format!("{} ", tool);
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(&prefix))
            .collect()
    }
}

/// Builder for `TestEnv`
pub struct TestEnvBuilder {
    latest_tag: String,
    git_code: i32,
    published: Vec<String>,
    bucket: String,
    rm_code: i32,
    cp_code: i32,
    install_code: i32,
    build_code: i32,
    web_dir: bool,
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self {
            latest_tag: "v0.30.2".to_string(),
            git_code: 0,
            published: Vec::new(),
            bucket: "tilt-static-assets".to_string(),
            rm_code: 0,
            cp_code: 0,
            install_code: 0,
            build_code: 0,
            web_dir: true,
        }
    }
}

impl TestEnvBuilder {
    /// Tag printed by the fake `git describe`
    pub fn latest_tag(mut self, tag: &str) -> Self {
        self.latest_tag = tag.to_string();
        self
    }

    pub fn git_fails(mut self, code: i32) -> Self {
        self.git_code = code;
        self
    }

    /// Mark a version as already having an `index.html` in the default bucket
    pub fn published(mut self, version: &str) -> Self {
        self.published.push(version.to_string());
        self
    }

    pub fn rm_exit(mut self, code: i32) -> Self {
        self.rm_code = code;
        self
    }

    pub fn cp_exit(mut self, code: i32) -> Self {
        self.cp_code = code;
        self
    }

    pub fn install_exit(mut self, code: i32) -> Self {
        self.install_code = code;
        self
    }

    pub fn build_exit(mut self, code: i32) -> Self {
        self.build_code = code;
        self
    }

    pub fn without_web_dir(mut self) -> Self {
        self.web_dir = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let home_dir = TempDir::new().expect("Failed to create home dir");
        let tools_dir = home_dir.path().join("fake-tools");
        fs::create_dir_all(&tools_dir).expect("Failed to create tools dir");

        if self.web_dir {
            fs::create_dir_all(project_root.path().join("web").join("build"))
                .expect("Failed to create web dir");
        }

        let log = tools_dir.join("calls.log");
        let log = log.display();

        write_script(
            &tools_dir.join("git"),
            &format!(
                "echo \"git $*\" >> '{log}'\nif [ {code} -ne 0 ]; then exit {code}; fi\necho '{tag}'\n",
                log = log,
                code = self.git_code,
                tag = self.latest_tag,
            ),
        );

        let published: Vec<String> = self
            .published
            .iter()
            .map(|v| format!("gs://{}/{}/index.html", self.bucket, v))
            .collect();
        write_script(
            &tools_dir.join("gsutil"),
            &format!(
                r#"echo "gsutil $*" >> '{log}'
case "$1" in
  stat)
    for object in {published}; do
      if [ "$2" = "$object" ]; then exit 0; fi
    done
    exit 1
    ;;
  -m)
    case "$2" in
      rm) exit {rm} ;;
      cp) exit {cp} ;;
    esac
    ;;
esac
exit 0
"#,
                log = log,
                published = published.join(" "),
                rm = self.rm_code,
                cp = self.cp_code,
            ),
        );

        write_script(
            &tools_dir.join("yarn"),
            &format!(
                r#"echo "yarn $* @$(basename "$(pwd -P)") CI=${{CI-}}" >> '{log}'
echo "yarn says hello"
case "$1" in
  install) exit {install} ;;
  run) exit {build} ;;
esac
exit 0
"#,
                log = log,
                install = self.install_code,
                build = self.build_code,
            ),
        );

        TestEnv {
            project_root,
            home_dir,
            tools_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_asset-publisher")),
        }
    }
}

fn write_script(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{}", body)).expect("Failed to write fake tool");
    let mut perms = fs::metadata(path)
        .expect("Failed to stat fake tool")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to make fake tool executable");
}
