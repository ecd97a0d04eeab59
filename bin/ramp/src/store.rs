//! Favorites kept as JSON in a file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use shadekit::{FavoriteColor, FavoritesStore, StoreError};

/// A [`FavoritesStore`] backed by a JSON file. A missing file is an empty
/// list.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<Vec<FavoriteColor>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&text).map_err(|err| StoreError::Format(err.to_string()))
    }

    fn save(&mut self, favorites: &[FavoriteColor]) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(favorites)
            .map_err(|err| StoreError::Format(err.to_string()))?;
        fs::write(&self.path, text)?;
        debug!("saved {} favorites to {}", favorites.len(), self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
