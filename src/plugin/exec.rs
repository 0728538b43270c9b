//! External compiler subprocess invocation.
//!
//! The bundled plugins feed source text to a compiler executable on stdin
//! and read the artifact from stdout. A non-zero exit carries the
//! compiler's diagnostic on stderr.

use crate::error::{MiddlewareError, Result};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Run `program` with `args`, writing `input` to its stdin and returning
/// its stdout as a string. Spawn failures and non-zero exits surface as
/// compile errors attributed to `plugin`.
pub async fn run(plugin: &'static str, program: &str, args: &[&str], input: &str) -> Result<String> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true); // Prevent zombie processes

    let mut child = cmd.spawn().map_err(|e| MiddlewareError::Compile {
        plugin,
        message: format!("Failed to spawn '{}': {}", program, e),
    })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes()).await?;
        stdin.shutdown().await?;
    }

    let output = child.wait_with_output().await?;

    if !output.status.success() {
        let diagnostic = String::from_utf8_lossy(&output.stderr);
        return Err(MiddlewareError::Compile {
            plugin,
            message: diagnostic.trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| MiddlewareError::Compile {
        plugin,
        message: format!("Compiler produced non-UTF-8 output: {}", e),
    })
}
