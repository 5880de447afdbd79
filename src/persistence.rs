// File: src/persistence.rs
use crate::config::EngineConfig;
use crate::core::engine::ArabicEngine;
use crate::error::Result;
use crate::keyboard::KeyboardMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use tempfile::NamedTempFile;

/// What survives a restart: the configuration and the keyboard mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SerializableState {
    config: EngineConfig,
    keyboard_mode: KeyboardMode,
}

/// Writes the engine state next to `path` and renames it into place, so a
/// crash mid-write never leaves a truncated file behind.
pub fn save_to_disk(engine: &ArabicEngine, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        config: engine.config().clone(),
        keyboard_mode: engine.keyboard_mode(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let writer = BufWriter::new(&temp_file);
        bincode::serialize_into(writer, &state)?;
    }
    temp_file.persist(path)?;
    tracing::debug!("saved engine state to {}", path.display());
    Ok(())
}

/// Reads the whole file before decoding, so a corrupt length prefix is
/// checked against the bytes actually present.
pub fn load_from_disk(path: &Path) -> Result<ArabicEngine> {
    let bytes = fs::read(path)?;
    let state: SerializableState = bincode::deserialize(&bytes)?;

    let mut engine = ArabicEngine::new(state.config)?;
    engine.set_keyboard_mode(state.keyboard_mode);
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("engine.bin");

        let config = EngineConfig {
            locale: "ar-EG".to_string(),
            currency: "EGP".to_string(),
            ..EngineConfig::default()
        };
        let mut engine = ArabicEngine::new(config.clone()).unwrap();
        engine.toggle_keyboard();
        save_to_disk(&engine, &path).unwrap();

        let restored = load_from_disk(&path).unwrap();
        assert_eq!(restored.config(), &config);
        assert_eq!(restored.keyboard_mode(), KeyboardMode::English);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("engine.bin");
        fs::write(&path, [0xff; 9]).unwrap();
        assert!(load_from_disk(&path).is_err());
    }
}
