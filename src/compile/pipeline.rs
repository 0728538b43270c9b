//! Read, compile, optionally minify, and persist an artifact.
//!
//! Each step is a failure point with no rollback of prior writes. There is
//! no atomic rename and no locking across concurrent requests for the same
//! destination; the last write wins.

use super::compress::Minifier;
use crate::error::Result;
use crate::plugin::Compiler;
use std::path::Path;
use tracing::debug;

pub async fn compile_to(
    src: &Path,
    dest: &Path,
    plugin: &dyn Compiler,
    minifier: Option<&Minifier>,
) -> Result<()> {
    let source = tokio::fs::read_to_string(src).await?;

    let mut artifact = plugin.compile(&source).await?;

    if let Some(minifier) = minifier {
        artifact = minifier.minify(&artifact);
    }

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(dest, &artifact).await?;

    debug!(
        plugin = plugin.name(),
        src = %src.display(),
        dest = %dest.display(),
        bytes = artifact.len(),
        "artifact written"
    );

    Ok(())
}
