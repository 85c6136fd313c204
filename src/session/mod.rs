mod feedback;

pub use feedback::play_feedback;

use rand::Rng;

use crate::core::{
    FilterCriteria,
    QuizOption,
    TangoError,
    VocabEntry,
};
use crate::quiz::{
    self,
    RecentHistory,
    MIN_POOL,
};
use crate::vocab::VocabStore;

/// Where a session currently is. `AwaitingNext` covers the window
/// between a correct pick and the end of its audio/animation feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    InRound,
    AwaitingNext,
    Complete,
}

/// Everything the presentation layer needs to render one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub target: VocabEntry,
    pub options: Vec<QuizOption>,
    pub progress: usize,
    pub session_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Correct,
    /// `show_hint` asks the UI to mark the correct option, from the
    /// second consecutive miss on the same word onward.
    Incorrect { show_hint: bool },
    /// Answer arrived outside `InRound` (e.g. while feedback is still
    /// playing) and was dropped. Guards against double-counting from
    /// rapid taps.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionProgress {
    NextRound(Round),
    Complete,
}

/// Sink for "sticker earned" events. Recording an already-earned word
/// must be a no-op.
pub trait StickerBook {
    fn earn(&mut self, sequence: u32) -> bool;
}

/// The session state machine:
/// `Idle -> InRound -> AwaitingNext -> (InRound | Complete)`.
///
/// The controller owns a snapshot of the filtered pool for the whole
/// session and is driven from a single thread by discrete events; it
/// never advances on its own.
pub struct SessionController {
    phase: SessionPhase,
    pool: Vec<VocabEntry>,
    session_size: usize,
    progress_count: usize,
    history: RecentHistory,
    current: Option<Round>,
    miss_count: u32,
}

impl SessionController {
    pub fn new(session_size: usize) -> Self {
        Self {
            phase: SessionPhase::Idle,
            pool: Vec::new(),
            session_size: session_size.max(1),
            progress_count: 0,
            history: RecentHistory::new(),
            current: None,
            miss_count: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn progress_count(&self) -> usize {
        self.progress_count
    }

    pub fn session_size(&self) -> usize {
        self.session_size
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    /// Starts (or restarts) a session over the entries matching
    /// `criteria`. Refused with `InsufficientMaterial` when fewer than
    /// four entries match; nothing is mutated on refusal, so the
    /// previous session state survives an over-narrow filter.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        store: &VocabStore,
        criteria: &FilterCriteria,
        rng: &mut R,
    ) -> Result<Round, TangoError> {
        let pool = store.filtered_pool(criteria);
        if pool.len() < MIN_POOL {
            return Err(TangoError::InsufficientMaterial { available: pool.len() });
        }

        self.pool = pool;
        self.progress_count = 0;
        self.history.clear();
        self.miss_count = 0;
        self.phase = SessionPhase::InRound;
        Ok(self.next_round(rng))
    }

    fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Round {
        let target = quiz::select_next(&self.pool, &mut self.history, rng).clone();
        let options = quiz::build_options(&self.pool, &target, rng);
        self.miss_count = 0;

        let round = Round {
            target,
            options,
            progress: self.progress_count,
            session_size: self.session_size,
        };
        self.current = Some(round.clone());
        round
    }

    /// Applies one answer pick. Correct picks count progress, record
    /// the sticker and park the session in `AwaitingNext` until the
    /// feedback join has settled and `advance` is called.
    pub fn answer(&mut self, option_sequence: u32, stickers: &mut dyn StickerBook) -> Answer {
        if self.phase != SessionPhase::InRound {
            return Answer::Ignored;
        }
        let Some(round) = &self.current else {
            return Answer::Ignored;
        };

        let correct =
            round.options.iter().any(|o| o.is_correct && o.sequence == option_sequence);

        if correct {
            self.progress_count += 1;
            stickers.earn(round.target.sequence);
            self.miss_count = 0;
            self.phase = SessionPhase::AwaitingNext;
            Answer::Correct
        } else {
            self.miss_count += 1;
            Answer::Incorrect { show_hint: self.miss_count >= 2 }
        }
    }

    /// Moves past a completed round once both feedback signals have
    /// settled. Returns `None` outside `AwaitingNext`.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SessionProgress> {
        if self.phase != SessionPhase::AwaitingNext {
            return None;
        }

        if self.progress_count >= self.session_size {
            self.phase = SessionPhase::Complete;
            self.current = None;
            Some(SessionProgress::Complete)
        } else {
            self.phase = SessionPhase::InRound;
            Some(SessionProgress::NextRound(self.next_round(rng)))
        }
    }
}
