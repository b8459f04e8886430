//! Keyed asset stores.
//!
//! A single-owner map from string keys to loaded assets (textures, fonts).
//! Assets are acquired once during [`create`](crate::game::create) and
//! released once during [`dispose`](crate::game::dispose).
//!
//! Raylib assets unload themselves when dropped, so releasing an asset means
//! dropping the store's only handle to it. The store refuses to overwrite a
//! key, since the replaced asset would be released behind the caller's back.
//!
//! Note: the concrete stores are non-send resources because raylib GPU
//! handles must be accessed from the main thread only.

use log::debug;
use raylib::prelude::{Font, Texture2D};
use rustc_hash::FxHashMap;

/// Loaded textures keyed by name.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
pub type TextureStore = AssetStore<Texture2D>;

/// Loaded fonts keyed by name.
///
/// This is a non-send resource; use `NonSend<FontStore>` in system parameters.
pub type FontStore = AssetStore<Font>;

/// Map of asset keys to loaded assets.
pub struct AssetStore<T> {
    assets: FxHashMap<String, T>,
}

impl<T> Default for AssetStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AssetStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            assets: FxHashMap::default(),
        }
    }

    /// Add an asset under the given key.
    ///
    /// Fails if the key is already taken.
    pub fn insert(&mut self, id: impl Into<String>, asset: T) -> Result<(), String> {
        let id = id.into();
        if self.assets.contains_key(&id) {
            return Err(format!("Asset '{}' is already loaded", id));
        }
        debug!("Acquired asset '{}'", id);
        self.assets.insert(id, asset);
        Ok(())
    }

    /// Get an asset by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&T> {
        self.assets.get(id.as_ref())
    }

    /// Number of held assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Release every held asset and return how many were released.
    ///
    /// The store is empty afterwards, so a second call releases nothing.
    pub fn release_all(&mut self) -> usize {
        let mut released = 0;
        for (id, asset) in self.assets.drain() {
            debug!("Releasing asset '{}'", id);
            drop(asset);
            released += 1;
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records its key in a shared log when dropped.
    struct Tracked {
        id: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    fn tracked(id: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Tracked {
        Tracked {
            id,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store: AssetStore<u32> = AssetStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = AssetStore::new();
        store.insert("sprite", 7u32).unwrap();
        assert_eq!(store.get("sprite"), Some(&7));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_key_is_rejected_and_keeps_original() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = AssetStore::new();
        store.insert("bg", tracked("first", &log)).unwrap();

        let err = store.insert("bg", tracked("second", &log)).unwrap_err();
        assert!(err.contains("bg"));

        // The rejected asset is dropped by the caller side, the held one is untouched.
        assert_eq!(*log.borrow(), vec!["second"]);
        assert_eq!(store.get("bg").map(|t| t.id), Some("first"));
    }

    #[test]
    fn test_release_all_drops_each_asset_exactly_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = AssetStore::new();
        store.insert("sprite", tracked("sprite", &log)).unwrap();
        store.insert("secondary", tracked("secondary", &log)).unwrap();
        store.insert("background", tracked("background", &log)).unwrap();

        assert_eq!(store.release_all(), 3);
        assert!(store.is_empty());

        let mut released = log.borrow().clone();
        released.sort();
        assert_eq!(released, vec!["background", "secondary", "sprite"]);

        // Nothing left to release.
        assert_eq!(store.release_all(), 0);
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_dropping_store_releases_held_assets() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut store = AssetStore::new();
            store.insert("font", tracked("font", &log)).unwrap();
        }
        assert_eq!(*log.borrow(), vec!["font"]);
    }
}
