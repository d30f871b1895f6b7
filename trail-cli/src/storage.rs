//! JSON save file on local disk.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use trail_game::{GameState, GameStorage};

/// Local-disk game storage: one JSON document per save file.
pub struct FileStorage {
    path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum FileStorageError {
    #[error("This file is empty.")]
    Empty { path: PathBuf },
    #[error("Storage error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Save file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> FileStorageError {
        FileStorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl GameStorage for FileStorage {
    type Error = FileStorageError;

    fn save_game(&self, game_state: &GameState) -> Result<(), Self::Error> {
        let json = serde_json::to_string_pretty(game_state)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        log::info!("saved journey to {}", self.path.display());
        Ok(())
    }

    fn load_game(&self) -> Result<Option<GameState>, Self::Error> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        if raw.trim().is_empty() {
            return Err(FileStorageError::Empty {
                path: self.path.clone(),
            });
        }
        let state = serde_json::from_str(&raw).map_err(|source| FileStorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        log::info!("loaded journey from {}", self.path.display());
        Ok(Some(state))
    }

    fn delete_save(&self) -> Result<(), Self::Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trail_game::{Party, Player, Profession};

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "wagon-trail-storage-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    fn state() -> GameState {
        let player = Player::new("Ezra", Profession::Farmer).unwrap();
        let party = Party::from_names(["Mary", "John", "Sarah", "Elijah"]).unwrap();
        GameState::new(player, party, 9, 500)
    }

    #[test]
    fn missing_file_is_no_save() {
        let storage = FileStorage::new(temp_path("missing"));
        assert!(storage.load_game().unwrap().is_none());
        storage.delete_save().unwrap();
    }

    #[test]
    fn empty_and_corrupt_files_are_distinguished() {
        let path = temp_path("empty");
        fs::write(&path, "").unwrap();
        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.load_game(),
            Err(FileStorageError::Empty { .. })
        ));
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            storage.load_game(),
            Err(FileStorageError::Corrupt { .. })
        ));
        storage.delete_save().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn save_then_load_restores_the_state() {
        let storage = FileStorage::new(temp_path("roundtrip"));
        let mut gs = state();
        gs.miles_remaining = 321;
        storage.save_game(&gs).unwrap();
        assert_eq!(storage.load_game().unwrap(), Some(gs));
        storage.delete_save().unwrap();
    }
}
