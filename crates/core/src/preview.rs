//! Revocable local preview URLs for the selected video.
//!
//! A [`PreviewHandle`] maps a `preview://<uuid>` URL to a file on disk for as
//! long as the handle lives. Dropping the handle revokes the URL, so the
//! owner only has to replace or drop it to release the resource.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use uuid::Uuid;

pub const PREVIEW_SCHEME: &str = "preview://";

#[derive(Clone, Default)]
pub struct PreviewRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

#[derive(Default)]
struct RegistryInner {
    live: HashMap<Uuid, PathBuf>,
    created: u64,
    released: u64,
}

pub struct PreviewHandle {
    id: Uuid,
    url: String,
    path: PathBuf,
    registry: Arc<Mutex<RegistryInner>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, path: &Path) -> PreviewHandle {
        let id = Uuid::new_v4();
        let mut inner = self.inner.lock().expect("PreviewRegistry poisoned");
        inner.live.insert(id, path.to_path_buf());
        inner.created += 1;
        drop(inner);

        tracing::debug!(%id, path = %path.display(), "preview created");

        PreviewHandle {
            id,
            url: format!("{PREVIEW_SCHEME}{id}"),
            path: path.to_path_buf(),
            registry: Arc::clone(&self.inner),
        }
    }

    /// Path behind a live preview URL, `None` once revoked.
    pub fn resolve(&self, url: &str) -> Option<PathBuf> {
        let id = url
            .strip_prefix(PREVIEW_SCHEME)
            .and_then(|raw| Uuid::parse_str(raw).ok())?;

        self.inner
            .lock()
            .expect("PreviewRegistry poisoned")
            .live
            .get(&id)
            .cloned()
    }

    pub fn live(&self) -> usize {
        self.inner.lock().expect("PreviewRegistry poisoned").live.len()
    }

    pub fn created(&self) -> u64 {
        self.inner.lock().expect("PreviewRegistry poisoned").created
    }

    pub fn released(&self) -> u64 {
        self.inner.lock().expect("PreviewRegistry poisoned").released
    }
}

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Revoke now rather than at end of scope.
    pub fn release(self) {}
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        let mut inner = self.registry.lock().expect("PreviewRegistry poisoned");
        if inner.live.remove(&self.id).is_some() {
            inner.released += 1;
        }
        drop(inner);

        tracing::debug!(id = %self.id, "preview released");
    }
}

impl std::fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("url", &self.url)
            .field("path", &self.path)
            .finish()
    }
}
