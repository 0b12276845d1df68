//! Subprocess runner for git invocations

use crate::error::{Error, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Runs a single git invocation and captures its stdout
///
/// [`GitClient`](crate::git::GitClient) is written against this seam so
/// tests can script exact argv/output sequences without a repository.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `git` with the given arguments and return its stdout
    async fn run(&self, args: &[&str]) -> Result<String>;
}

/// Production runner that spawns the `git` binary
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCommandRunner;

#[async_trait]
impl CommandRunner for GitCommandRunner {
    async fn run(&self, args: &[&str]) -> Result<String> {
        debug!("running: git {}", args.join(" "));

        let output = Command::new("git").args(args).output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::GitNotFound
            } else {
                Error::Io(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(Error::CommandFailed {
                command: format!("git {}", args.join(" ")),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr)
                    .trim_end()
                    .to_string(),
            })
        }
    }
}
