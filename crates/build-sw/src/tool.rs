use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::config::GenerateSwConfig;
use crate::error::{Error, Result};

const GENERATE_SW_JS: &str = include_str!("generate-sw.js");

/// What the tool reports after writing the service worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BuildReport {
    /// Number of precached files.
    pub count: u64,
    /// Total precached bytes.
    pub size: u64,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Something that writes a service worker from a [`GenerateSwConfig`].
pub trait GenerateSw {
    fn generate_sw(&self, config: &GenerateSwConfig) -> Result<BuildReport>;
}

/// Runs workbox-build's `generateSW` under node.
///
/// `workbox-build` is resolved from the working directory, so run this from
/// the web app's package root.
#[derive(Debug, Clone)]
pub struct Workbox {
    node: PathBuf,
    current_dir: Option<PathBuf>,
}

impl Workbox {
    pub fn new(node: impl Into<PathBuf>) -> Self {
        Self {
            node: node.into(),
            current_dir: None,
        }
    }

    /// Resolve `workbox-build` from `dir` instead of the working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl Default for Workbox {
    fn default() -> Self {
        Self::new("node")
    }
}

impl GenerateSw for Workbox {
    fn generate_sw(&self, config: &GenerateSwConfig) -> Result<BuildReport> {
        let input = serde_json::to_vec(config)?;

        let mut command = Command::new(&self.node);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let mut child = command
            .arg("-e")
            .arg(GENERATE_SW_JS)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                program: self.node.display().to_string(),
                source,
            })?;

        // Dropping stdin closes it so the script sees end of input. A tool
        // that died before reading is reported through its exit status.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&input) {
                Err(err) if err.kind() != io::ErrorKind::BrokenPipe => return Err(err.into()),
                _ => {}
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::Tool {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::service_worker_config;
    use std::fs;
    use std::path::Path;

    fn node_available() -> bool {
        Command::new("node")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Package root holding a stand-in `workbox-build` module.
    fn package_root(name: &str, module: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("build-sw-{}-{name}", std::process::id()));
        let module_dir = root.join("node_modules").join("workbox-build");
        fs::create_dir_all(&module_dir).unwrap();
        fs::write(module_dir.join("index.js"), module).unwrap();
        root
    }

    fn cleanup(root: &Path) {
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn workbox_receives_config_and_reports_back() {
        if !node_available() {
            eprintln!("node not on PATH, skipping");
            return;
        }
        let root = package_root(
            "ok",
            r#"
exports.generateSW = async (config) => ({
    count: config.runtimeCaching.length,
    size: config.maximumFileSizeToCacheInBytes,
    warnings: [config.swDest].concat(config.runtimeCaching.map((rule) =>
        [rule.options.cacheName,
         rule.urlPattern instanceof RegExp,
         rule.urlPattern.test('https://fonts.gstatic.com/s/a.woff2'),
         rule.urlPattern.test('/img/logo.svg')].join(' '))),
});
"#,
        );

        let result = Workbox::default()
            .current_dir(&root)
            .generate_sw(&service_worker_config("some/dir"));
        cleanup(&root);
        let report = result.expect("workbox run failed");

        assert_eq!(report.count, 3);
        assert_eq!(report.size, 41_943_040);
        assert_eq!(
            report.warnings,
            [
                "some/dir/service-worker.js",
                "hyperworker-google-fonts-stylesheets true false false",
                "hyperworker-google-fonts-webfonts true true false",
                "hyperworker-images true false true",
            ]
        );
    }

    #[test]
    fn rejected_generation_is_a_tool_error_with_stderr() {
        if !node_available() {
            eprintln!("node not on PATH, skipping");
            return;
        }
        let root = package_root(
            "rejects",
            "exports.generateSW = async () => { throw new Error('globDirectory missing'); };\n",
        );

        let result = Workbox::default()
            .current_dir(&root)
            .generate_sw(&service_worker_config("missing"));
        cleanup(&root);

        match result {
            Err(Error::Tool { status, stderr }) => {
                assert!(!status.success());
                assert!(stderr.contains("globDirectory missing"), "stderr: {stderr}");
            }
            other => panic!("expected tool error, got {other:?}"),
        }
    }

    #[test]
    fn early_exit_keeps_the_tool_stderr() {
        if !node_available() {
            eprintln!("node not on PATH, skipping");
            return;
        }
        let root = package_root(
            "exits",
            "process.stderr.write('workbox-build broken'); process.exit(3);\n",
        );

        let result = Workbox::default()
            .current_dir(&root)
            .generate_sw(&service_worker_config("public"));
        cleanup(&root);

        match result {
            Err(Error::Tool { status, stderr }) => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "workbox-build broken");
            }
            other => panic!("expected tool error, got {other:?}"),
        }
    }

    #[test]
    fn missing_node_is_a_spawn_error() {
        let workbox = Workbox::new("/nonexistent/bin/node");

        let err = workbox
            .generate_sw(&service_worker_config("public"))
            .unwrap_err();

        assert!(matches!(err, Error::Spawn { .. }));
        assert!(err.to_string().contains("/nonexistent/bin/node"));
    }

    #[test]
    fn report_warnings_default_to_empty() {
        let report: BuildReport = serde_json::from_str(r#"{"count":3,"size":900}"#).unwrap();

        assert_eq!(
            report,
            BuildReport {
                count: 3,
                size: 900,
                warnings: Vec::new(),
            }
        );
    }
}
