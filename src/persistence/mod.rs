use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

use crate::audio::TtsSettings;
use crate::core::TangoError;
use crate::session::StickerBook;

const APP_NAME: &str = "tangocard";

pub const SETTINGS_FILE: &str = "settings.json";
pub const STICKERS_FILE: &str = "stickers.json";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), TangoError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    log::debug!("data saved to {}", file_path.display());
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    filename: &str,
) -> Result<T, TangoError> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

/// Missing or corrupt state is indistinguishable from absence: both
/// load as the default, never as an error.
pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(error) => {
            log::warn!("failed to load {}: {}. Using defaults.", filename, error);
            T::default()
        }
    }
}

pub fn delete_data_file(filename: &str) -> Result<(), TangoError> {
    let file_path = get_data_file_path(filename);
    if file_path.exists() {
        fs::remove_file(&file_path)?;
        log::debug!("deleted {}", file_path.display());
    }
    Ok(())
}

pub fn data_file_exists(filename: &str) -> bool {
    get_data_file_path(filename).exists()
}

/// User-editable configuration, one JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub session_size: usize,
    pub tts: TtsSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self { session_size: 5, tts: TtsSettings::default() }
    }
}

impl Settings {
    pub fn load() -> Self {
        load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) -> Result<(), TangoError> {
        save_json(self, SETTINGS_FILE)
    }
}

/// The set of words a sticker has ever been earned for.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarnedStickers {
    earned: BTreeSet<u32>,
}

impl EarnedStickers {
    pub fn load() -> Self {
        load_json_or_default(STICKERS_FILE)
    }

    pub fn save(&self) -> Result<(), TangoError> {
        save_json(self, STICKERS_FILE)
    }

    /// Returns whether the sticker was newly earned.
    pub fn earn(&mut self, sequence: u32) -> bool {
        self.earned.insert(sequence)
    }

    pub fn contains(&self, sequence: u32) -> bool {
        self.earned.contains(&sequence)
    }

    pub fn len(&self) -> usize {
        self.earned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earned.is_empty()
    }
}

impl StickerBook for EarnedStickers {
    fn earn(&mut self, sequence: u32) -> bool {
        EarnedStickers::earn(self, sequence)
    }
}
