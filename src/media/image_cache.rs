use std::num::NonZeroUsize;

use actix_web::web::Bytes;

use lru::LruCache;

use parking_lot::Mutex;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// One rendition of a gallery image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetKey {
    pub id: u32,
    pub width: u32,
}

/// Image bytes as the CDN served them
#[derive(Debug, Clone, PartialEq)]
pub struct CachedImage {
    pub content_type: String,
    pub bytes: Bytes,
}

/// Fetched gallery images, least recently used evicted first
///
/// Keeps hot images in memory across page views so repeat visits to the
/// portfolio don't go back to the CDN.
#[derive(Debug)]
pub struct ImageCache {
    entries: Mutex<LruCache<AssetKey, CachedImage>>,
}

impl ImageCache {
    /// A zero capacity falls back to the default
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CAPACITY);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Look an image up and mark it as recently used
    pub fn get(&self, key: &AssetKey) -> Option<CachedImage> {
        self.entries.lock().get(key).cloned()
    }

    /// Store an image, returns the key evicted to make room
    pub fn insert(&self, key: AssetKey, image: CachedImage) -> Option<AssetKey> {
        self.entries
            .lock()
            .push(key, image)
            .map(|(evicted, _)| evicted)
            .filter(|evicted| *evicted != key)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }
}
