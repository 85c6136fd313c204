use futures::future::BoxFuture;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    TangoError,
    VocabEntry,
};

/// One request to the platform speech subsystem.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Platform voice name; `None` lets the platform pick its default
    /// for the language.
    pub voice: Option<String>,
}

/// Pronunciation parameters, persisted with the rest of the settings.
/// The defaults are tuned for a child listener: slightly slow, slightly
/// high, not too loud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsSettings {
    pub word_language: String,
    pub translation_language: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Preferred voice for the word side, persisted by name.
    pub voice_name: Option<String>,
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            word_language: "en-US".to_string(),
            translation_language: "ja-JP".to_string(),
            rate: 0.95,
            pitch: 1.05,
            volume: 0.7,
            voice_name: None,
        }
    }
}

impl TtsSettings {
    pub fn word_utterance(&self, text: &str) -> Utterance {
        Utterance {
            text: text.to_string(),
            language: self.word_language.clone(),
            rate: self.rate,
            pitch: self.pitch,
            volume: self.volume,
            voice: self.voice_name.clone(),
        }
    }

    pub fn translation_utterance(&self, text: &str) -> Utterance {
        Utterance {
            text: text.to_string(),
            language: self.translation_language.clone(),
            rate: self.rate,
            pitch: self.pitch,
            volume: self.volume,
            voice: None,
        }
    }
}

/// Seam to the platform speech subsystem.
///
/// `speak` resolves when the utterance has finished playing (or failed).
/// Implementations must interrupt any in-flight playback when `speak`
/// is called again; `cancel` interrupts without starting a new one.
pub trait SpeechPlayer: Send + Sync {
    fn speak<'a>(&'a self, utterance: &'a Utterance) -> BoxFuture<'a, Result<(), TangoError>>;
    fn cancel(&self);
}

/// Pronounces a card: the word first, fully finished, then its
/// translation. The strict ordering is the point; a learner hears the
/// word before the gloss every time.
///
/// Playback errors (missing voice, denied audio permission) are logged
/// and treated as completion so the session never stalls on audio.
pub async fn pronounce_entry<P: SpeechPlayer + ?Sized>(
    player: &P,
    entry: &VocabEntry,
    settings: &TtsSettings,
) {
    player.cancel();

    let word = settings.word_utterance(&entry.word);
    if let Err(error) = player.speak(&word).await {
        log::warn!("pronunciation of {:?} failed: {}", entry.word, error);
    }

    let translation = settings.translation_utterance(&entry.translation);
    if let Err(error) = player.speak(&translation).await {
        log::warn!("pronunciation of {:?} failed: {}", entry.translation, error);
    }
}

/// Replays just the word, for the repeat button.
pub async fn pronounce_word<P: SpeechPlayer + ?Sized>(
    player: &P,
    entry: &VocabEntry,
    settings: &TtsSettings,
) {
    player.cancel();

    let word = settings.word_utterance(&entry.word);
    if let Err(error) = player.speak(&word).await {
        log::warn!("pronunciation of {:?} failed: {}", entry.word, error);
    }
}
