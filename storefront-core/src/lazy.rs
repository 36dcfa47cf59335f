//! Deferred-source image registry.
//!
//! Each registered image moves from `Pending` to `Loaded` exactly once; the
//! first intersection hands back the deferred source and every later one is
//! ignored.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Pending,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LazyImage {
    src: String,
    state: LoadState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LazyImages {
    images: Vec<LazyImage>,
}

impl LazyImages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track an image by its deferred source; returns its id.
    pub fn register(&mut self, deferred_src: impl Into<String>) -> usize {
        self.images.push(LazyImage {
            src: deferred_src.into(),
            state: LoadState::Pending,
        });
        self.images.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn state(&self, id: usize) -> Option<LoadState> {
        self.images.get(id).map(|img| img.state)
    }

    /// Mark `id` visible. Returns the source to load on the first call only.
    pub fn reveal(&mut self, id: usize) -> Option<&str> {
        let image = self.images.get_mut(id)?;
        if image.state == LoadState::Loaded {
            return None;
        }
        image.state = LoadState::Loaded;
        Some(image.src.as_str())
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.images
            .iter()
            .filter(|img| img.state == LoadState::Pending)
            .count()
    }

    #[must_use]
    pub fn loaded(&self) -> usize {
        self.len() - self.pending()
    }
}
