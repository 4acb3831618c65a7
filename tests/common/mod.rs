//! Common test utilities for Folio integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tiny_http::{Method, Response, Server, StatusCode};

/// Get a command for the folio binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn folio_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("folio").expect("Failed to find folio binary");
    cmd.env_remove("FOLIO_PROJECT").env_remove("FOLIO_LOG");
    cmd
}

/// Get a command for the folio binary running inside a project directory
#[allow(dead_code)]
pub fn folio_cmd_for_project(path: &Path) -> assert_cmd::Command {
    let mut cmd = folio_cmd();
    cmd.current_dir(path);
    cmd
}

/// A test project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new, empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a test project from a fixture site
    pub fn from_fixture(fixture_name: &str) -> Self {
        let project = Self::new();
        copy_dir_recursive(&fixture_path(fixture_name), &project.path)
            .expect("Failed to copy fixture site");
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Remove a file from the project
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to a fixture site
#[allow(dead_code)]
pub fn fixture_path(fixture_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join("sites")
        .join(fixture_name)
}

/// Recursively copy a directory
#[allow(dead_code)]
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !dst.exists() {
        std::fs::create_dir_all(dst)?;
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}

/// Serve `root` over plain HTTP on a loopback port
///
/// Each GET gets the file's content with status 200, or 404 when it does not
/// exist. Paths listed in `broken` get status 500. The server thread lives
/// until the test process exits.
#[allow(dead_code)]
pub fn serve_dir(root: PathBuf, broken: &[&str]) -> String {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let base = format!("http://{}/", server.server_addr());
    let broken: Vec<String> = broken.iter().map(|p| p.to_string()).collect();

    std::thread::spawn(move || {
        for req in server.incoming_requests() {
            if req.method() != &Method::Get {
                let _ = req.respond(Response::empty(StatusCode(405)));
                continue;
            }

            let path = req.url().trim_start_matches('/').to_string();
            if broken.contains(&path) {
                let _ = req.respond(Response::empty(StatusCode(500)));
                continue;
            }

            match std::fs::read_to_string(root.join(&path)) {
                Ok(body) => {
                    let _ = req.respond(Response::from_string(body).with_status_code(200));
                }
                Err(_) => {
                    let _ = req.respond(Response::empty(StatusCode(404)));
                }
            }
        }
    });

    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = TestProject::new();
        assert!(project.path.exists());
    }

    #[test]
    fn test_project_file_operations() {
        let project = TestProject::new();
        project.write_file("content/hero.md", "---\n---\n");
        assert!(project.file_exists("content/hero.md"));
        assert_eq!(project.read_file("content/hero.md"), "---\n---\n");
    }

    #[test]
    fn test_project_from_fixture() {
        let project = TestProject::from_fixture("portfolio");
        assert!(project.file_exists("content/manifest.json"));
        assert!(project.file_exists("content/projects/bernoulli.md"));
    }
}
