//! Request-scoped temporary files.
//!
//! A `StagedFile` owns one on-disk temporary: either the uploaded payload
//! written under a freshly generated random name, or an optimizer output
//! adopted after the fact. The file is removed when `remove` is called or,
//! failing that, when the guard drops, so no code path can leak a temporary
//! past the request that created it.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use tokio::fs;

/// Number of random bytes in a staged filename. Collision resistance across
/// concurrent uploads is the requirement, not unpredictability.
const FILENAME_RANDOM_BYTES: usize = 32;

/// Generate a collision-resistant random filename with the given extension.
pub fn random_filename(extension: &str) -> String {
    let mut bytes = [0u8; FILENAME_RANDOM_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    format!("{}.{}", URL_SAFE_NO_PAD.encode(bytes), extension)
}

/// Scoped temporary file under the staging root.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    armed: bool,
}

impl StagedFile {
    /// Write `data` to a new randomly named file under `root`.
    pub async fn create(root: &Path, extension: &str, data: &[u8]) -> std::io::Result<Self> {
        fs::create_dir_all(root).await?;

        let path = root.join(random_filename(extension));
        fs::write(&path, data).await?;

        tracing::debug!(path = %path.display(), size_bytes = data.len(), "Staged upload");

        Ok(StagedFile { path, armed: true })
    }

    /// Take ownership of an existing file (e.g. an optimizer output) so it is
    /// cleaned up like any other staged file.
    pub fn adopt(path: PathBuf) -> Self {
        StagedFile { path, armed: true }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component, e.g. `dGVzdA.mp4`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Delete the file now. Consumes the guard; the `Drop` fallback is only
    /// for paths that error out before reaching this.
    pub async fn remove(mut self) -> std::io::Result<()> {
        self.armed = false;
        fs::remove_file(&self.path).await
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = std::fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "Failed to clean up staged file"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn random_filename_is_url_safe_and_long() {
        let name = random_filename("mp4");
        assert!(name.ends_with(".mp4"));
        let stem = name.strip_suffix(".mp4").unwrap();
        // 32 bytes in unpadded base64url
        assert_eq!(stem.len(), 43);
        assert!(stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn random_filenames_do_not_collide() {
        let a = random_filename("mp4");
        let b = random_filename("mp4");
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn create_writes_payload() {
        let dir = TempDir::new().unwrap();
        let staged = StagedFile::create(dir.path(), "mp4", b"payload").await.unwrap();

        assert!(staged.path().exists());
        assert_eq!(std::fs::read(staged.path()).unwrap(), b"payload");
    }

    #[tokio::test]
    async fn remove_deletes_the_file() {
        let dir = TempDir::new().unwrap();
        let staged = StagedFile::create(dir.path(), "mp4", b"x").await.unwrap();
        let path = staged.path().to_path_buf();

        staged.remove().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn drop_cleans_up_on_early_exit() {
        let dir = TempDir::new().unwrap();
        let path = {
            let staged = StagedFile::create(dir.path(), "mp4", b"x").await.unwrap();
            staged.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn adopt_takes_ownership_of_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.mp4.processed");
        std::fs::write(&path, b"optimized").unwrap();

        {
            let _adopted = StagedFile::adopt(path.clone());
        }
        assert!(!path.exists());
    }
}
