//! Colors bookmarked under a name, kept in an injected store.

use log::warn;
use thiserror::Error;

use crate::hex::HexColor;

/// A bookmarked color. The name may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FavoriteColor {
    /// The bookmarked color.
    pub color: HexColor,
    /// A free form name for the color.
    pub name: String,
}

impl FavoriteColor {
    /// Create an unnamed favorite.
    pub fn new(color: HexColor) -> Self {
        Self {
            color,
            name: String::new(),
        }
    }
}

/// Errors raised by a [`FavoritesStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be read or written.
    #[error("favorites storage error: {0}")]
    Io(#[from] std::io::Error),
    /// The store holds data that is not a list of favorites.
    #[error("malformed favorites data: {0}")]
    Format(String),
}

/// Durable storage for the favorites list.
pub trait FavoritesStore {
    /// Load the saved favorites. A store that was never saved to loads an
    /// empty list.
    fn load(&self) -> Result<Vec<FavoriteColor>, StoreError>;

    /// Replace the saved favorites.
    fn save(&mut self, favorites: &[FavoriteColor]) -> Result<(), StoreError>;

    /// Remove the saved favorites altogether.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// A store that keeps the favorites in memory only.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saved: Option<Vec<FavoriteColor>>,
}

impl MemoryStore {
    /// Whether anything is currently saved.
    pub fn is_saved(&self) -> bool {
        self.saved.is_some()
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> Result<Vec<FavoriteColor>, StoreError> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, favorites: &[FavoriteColor]) -> Result<(), StoreError> {
        self.saved = Some(favorites.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.saved = None;
        Ok(())
    }
}

/// The favorites list, newest first, with every change written through to
/// its store.
///
/// When writing to the store fails the change is still kept in memory and
/// the error is returned to the caller.
#[derive(Debug)]
pub struct Favorites<S = MemoryStore> {
    entries: Vec<FavoriteColor>,
    store: S,
}

impl Default for Favorites<MemoryStore> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            store: MemoryStore::default(),
        }
    }
}

impl<S: FavoritesStore> Favorites<S> {
    /// Load the favorites saved in `store`.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let entries = store.load()?;
        Ok(Self { entries, store })
    }

    /// Add `color` to the front of the list. Returns `false` without touching
    /// the list when the color is already a favorite.
    pub fn add(&mut self, color: HexColor) -> Result<bool, StoreError> {
        if self.contains(color) {
            return Ok(false);
        }
        self.entries.insert(0, FavoriteColor::new(color));
        self.persist()?;
        Ok(true)
    }

    /// Remove the favorite at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Option<FavoriteColor>, StoreError> {
        if index >= self.entries.len() {
            return Ok(None);
        }
        let removed = self.entries.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Rename the favorite at `index`. Returns `false` if there is no such
    /// favorite.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<bool, StoreError> {
        let Some(entry) = self.entries.get_mut(index) else {
            return Ok(false);
        };
        entry.name = name.into();
        self.persist()?;
        Ok(true)
    }

    /// Remove every favorite, and the saved list with them.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        self.store.clear().inspect_err(|err| {
            warn!("could not clear saved favorites: {}", err);
        })
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.entries).inspect_err(|err| {
            warn!("could not save {} favorites: {}", self.entries.len(), err);
        })
    }
}

impl<S> Favorites<S> {
    /// Whether `color` is a favorite.
    pub fn contains(&self, color: HexColor) -> bool {
        self.entries.iter().any(|entry| entry.color == color)
    }

    /// The favorite at `index`.
    pub fn get(&self, index: usize) -> Option<&FavoriteColor> {
        self.entries.get(index)
    }

    /// The number of favorites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the favorites, newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, FavoriteColor> {
        self.entries.iter()
    }

    /// The store backing the list.
    pub fn store(&self) -> &S {
        &self.store
    }
}
