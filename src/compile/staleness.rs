//! Mtime-based staleness detection.
//!
//! Freshness is judged purely by modification times: a destination artifact
//! is stale only when the source mtime is strictly later. Equal mtimes count
//! as fresh, so collisions within the filesystem's timestamp resolution can
//! produce false negatives. No content hashing is performed.

use crate::error::Result;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Artifact is fresh; defer to normal file serving.
    PassThrough,
    /// Artifact is missing or stale; build it.
    Compile,
    /// Source file does not exist; not this middleware's concern.
    NotFound,
}

/// Decide whether `dest` must be rebuilt from `src`. `force` skips the
/// mtime comparison (but a missing source still wins).
pub async fn resolve(src: &Path, dest: &Path, force: bool) -> Result<Decision> {
    let src_meta = match tokio::fs::metadata(src).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Decision::NotFound),
        Err(e) => return Err(e.into()),
    };

    let dest_meta = match tokio::fs::metadata(dest).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Decision::Compile),
        Err(e) => return Err(e.into()),
    };

    if force {
        return Ok(Decision::Compile);
    }

    if src_meta.modified()? > dest_meta.modified()? {
        Ok(Decision::Compile)
    } else {
        Ok(Decision::PassThrough)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn set_mtime(path: &Path, mtime: SystemTime) {
        let file = fs::OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(mtime).unwrap();
    }

    #[tokio::test]
    async fn test_missing_source_is_not_found() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("style.sass");
        let dest = dir.path().join("style.css");

        let decision = resolve(&src, &dest, false).await.unwrap();
        assert_eq!(decision, Decision::NotFound);
    }

    #[tokio::test]
    async fn test_missing_source_wins_over_force() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("style.sass");
        let dest = dir.path().join("style.css");

        let decision = resolve(&src, &dest, true).await.unwrap();
        assert_eq!(decision, Decision::NotFound);
    }

    #[tokio::test]
    async fn test_missing_destination_compiles() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("style.sass");
        fs::write(&src, "body\n  color: red\n").unwrap();
        let dest = dir.path().join("style.css");

        let decision = resolve(&src, &dest, false).await.unwrap();
        assert_eq!(decision, Decision::Compile);
    }

    #[tokio::test]
    async fn test_fresh_destination_passes_through() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("style.sass");
        let dest = dir.path().join("style.css");
        fs::write(&src, "source").unwrap();
        fs::write(&dest, "artifact").unwrap();

        let now = SystemTime::now();
        set_mtime(&src, now - Duration::from_secs(60));
        set_mtime(&dest, now);

        let decision = resolve(&src, &dest, false).await.unwrap();
        assert_eq!(decision, Decision::PassThrough);
    }

    #[tokio::test]
    async fn test_stale_destination_compiles() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("style.sass");
        let dest = dir.path().join("style.css");
        fs::write(&src, "source").unwrap();
        fs::write(&dest, "artifact").unwrap();

        let now = SystemTime::now();
        set_mtime(&dest, now - Duration::from_secs(60));
        set_mtime(&src, now);

        let decision = resolve(&src, &dest, false).await.unwrap();
        assert_eq!(decision, Decision::Compile);
    }

    #[tokio::test]
    async fn test_equal_mtimes_are_fresh() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("style.sass");
        let dest = dir.path().join("style.css");
        fs::write(&src, "source").unwrap();
        fs::write(&dest, "artifact").unwrap();

        let now = SystemTime::now();
        set_mtime(&src, now);
        set_mtime(&dest, now);

        let decision = resolve(&src, &dest, false).await.unwrap();
        assert_eq!(decision, Decision::PassThrough);
    }

    #[tokio::test]
    async fn test_force_compiles_fresh_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("style.sass");
        let dest = dir.path().join("style.css");
        fs::write(&src, "source").unwrap();
        fs::write(&dest, "artifact").unwrap();

        let now = SystemTime::now();
        set_mtime(&src, now - Duration::from_secs(60));
        set_mtime(&dest, now);

        let decision = resolve(&src, &dest, true).await.unwrap();
        assert_eq!(decision, Decision::Compile);
    }
}
