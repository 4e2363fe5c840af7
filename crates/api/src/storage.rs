//! Local blob store for uploaded issue images.
//!
//! Accepts a named byte payload, writes it under the configured upload
//! directory with a freshly generated UUID prefix (so distinct uploads of
//! the same filename never collide), and returns the durable public URL at
//! which the file is served back (`/uploads/{name}` via `ServeDir`).

use std::path::PathBuf;

use uuid::Uuid;

/// Stores uploaded blobs on the local filesystem.
pub struct BlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    /// Persist a payload and return its public retrieval URL.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<String> {
        let name = format!("{}-{}", Uuid::new_v4(), sanitize_filename(original_name));

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&name), bytes).await?;

        Ok(format!(
            "{}/uploads/{}",
            self.public_base_url.trim_end_matches('/'),
            name
        ))
    }
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Keeps ASCII alphanumerics, `.`, `-`, and `_`; everything else becomes
/// `_`. An empty result falls back to `"upload"`.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches(|c| c == '.' || c == '_').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_filename("pothole-1.jpg"), "pothole-1.jpg");
        assert_eq!(sanitize_filename("my photo (2).png"), "my_photo__2_.png");
    }

    #[test]
    fn sanitize_strips_path_separators() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "______etc_passwd");
        assert_eq!(sanitize_filename("a/b\\c.jpg"), "a_b_c.jpg");
    }

    #[test]
    fn sanitize_falls_back_on_empty_names() {
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename("///"), "upload");
        assert_eq!(sanitize_filename("..."), "upload");
    }

    #[tokio::test]
    async fn store_writes_file_and_returns_url() {
        let dir = std::env::temp_dir().join(format!("civica-blob-test-{}", Uuid::new_v4()));
        let store = BlobStore::new(&dir, "http://localhost:3000/");

        let url = store.store("pothole.jpg", b"jpegdata").await.unwrap();

        assert!(url.starts_with("http://localhost:3000/uploads/"));
        assert!(url.ends_with("-pothole.jpg"));

        let name = url.rsplit('/').next().unwrap();
        let written = tokio::fs::read(dir.join(name)).await.unwrap();
        assert_eq!(written, b"jpegdata");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn store_gives_distinct_names_for_same_filename() {
        let dir = std::env::temp_dir().join(format!("civica-blob-test-{}", Uuid::new_v4()));
        let store = BlobStore::new(&dir, "http://localhost:3000");

        let first = store.store("same.jpg", b"one").await.unwrap();
        let second = store.store("same.jpg", b"two").await.unwrap();
        assert_ne!(first, second);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
