//! Vocabulary flashcard sessions for children: a CSV word list, spoken
//! prompts, four-choice rounds with same-part-of-speech distractors,
//! and a sticker for every completed session.
//!
//! The crate is the app core only. Rendering, the actual speech engine
//! and the confetti canvas live behind the [`audio::SpeechPlayer`] and
//! [`reward::RewardAnimator`] seams.

pub mod audio;
pub mod core;
pub mod parent;
pub mod persistence;
pub mod quiz;
pub mod reward;
pub mod session;
pub mod vocab;

pub use crate::core::{ FilterCriteria, QuizOption, TangoError, VocabEntry };
pub use crate::session::{ Answer, Round, SessionController, SessionPhase, SessionProgress };
pub use crate::vocab::VocabStore;
