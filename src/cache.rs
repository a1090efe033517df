//! Normalized pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::error::PatternError;
use crate::pattern::NumberPattern;

/// Global cache of normalized patterns, keyed by (locale code, pattern).
static CACHE: Mutex<Option<LruCache<(String, String), NumberPattern>>> = Mutex::new(None);

const CACHE_SIZE: usize = 100;

/// Get or normalize a pattern for a locale, using the cache.
pub fn get_or_normalize(pattern: &str, locale: &str) -> Result<NumberPattern, PatternError> {
    let key = (locale.to_ascii_lowercase(), pattern.to_string());

    let mut cache_guard = CACHE.lock().unwrap();
    let cache =
        cache_guard.get_or_insert_with(|| LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));

    if let Some(spec) = cache.get(&key) {
        return Ok(spec.clone());
    }

    let spec = crate::pattern::normalize(pattern, locale)?;
    cache.put(key, spec.clone());
    Ok(spec)
}
