//! Decoded page cache.
//!
//! Keeps full-resolution decoded pages under an LRU policy so that a resize
//! re-scales without touching the disk and flipping back a page is instant.

use image::DynamicImage;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// LRU cache for storing decoded pages.
pub struct ImageCache {
    cache: LruCache<PathBuf, Rc<DynamicImage>>,
}

impl ImageCache {
    /// Creates a new image cache with the specified capacity (at least one entry).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Retrieves a page from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<Rc<DynamicImage>> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::debug!("Cache HIT: {}", path.display());
        } else {
            log::debug!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores a page in the cache.
    pub fn put(&mut self, path: PathBuf, image: Rc<DynamicImage>) {
        log::debug!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.cache.put(path, image);
    }

    /// Drops every cached page.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[cfg(test)]
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }
}
