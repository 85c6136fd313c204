use crate::audio::{
    pronounce_entry,
    SpeechPlayer,
    TtsSettings,
};
use crate::core::VocabEntry;
use crate::reward::{
    ConfettiConfig,
    RewardAnimator,
};

/// Runs the correct-answer feedback: the card's pronunciation (word,
/// then translation) and the reward animation, started together and
/// joined. Returns only once **both** have settled, so the next round
/// never appears while the learner is still hearing or watching
/// feedback; total wait is the longer of the two, not their sum.
///
/// Neither side can fail out of the join: playback errors are already
/// downgraded to log lines inside `pronounce_entry`, and the animation
/// resolves by elapsed time.
pub async fn play_feedback<P, A>(
    player: &P,
    animator: &A,
    entry: &VocabEntry,
    settings: &TtsSettings,
    confetti: &ConfettiConfig,
) where
    P: SpeechPlayer + ?Sized,
    A: RewardAnimator + ?Sized,
{
    let speech = pronounce_entry(player, entry, settings);
    let animation = animator.celebrate(confetti);
    tokio::join!(speech, animation);
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{
        AtomicBool,
        Ordering,
    };
    use std::sync::Mutex;
    use std::time::Duration;

    use futures::future::BoxFuture;

    use super::*;
    use crate::audio::Utterance;
    use crate::core::TangoError;

    struct SlowPlayer {
        delay: Duration,
        spoken: Mutex<Vec<String>>,
    }

    impl SpeechPlayer for SlowPlayer {
        fn speak<'a>(
            &'a self,
            utterance: &'a Utterance,
        ) -> BoxFuture<'a, Result<(), TangoError>> {
            Box::pin(async move {
                tokio::time::sleep(self.delay).await;
                self.spoken.lock().unwrap().push(utterance.text.clone());
                Ok(())
            })
        }

        fn cancel(&self) {}
    }

    struct TimedAnimator {
        finished: AtomicBool,
    }

    impl RewardAnimator for TimedAnimator {
        fn celebrate<'a>(&'a self, config: &'a ConfettiConfig) -> BoxFuture<'a, ()> {
            Box::pin(async move {
                tokio::time::sleep(config.duration).await;
                self.finished.store(true, Ordering::SeqCst);
            })
        }
    }

    fn entry() -> VocabEntry {
        VocabEntry {
            sequence: 1,
            word: "cat".to_string(),
            translation: "ねこ".to_string(),
            part_of_speech: "noun".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn feedback_waits_for_both_signals() {
        // Animation outlasts both utterances together.
        let player = SlowPlayer { delay: Duration::from_millis(10), spoken: Mutex::new(Vec::new()) };
        let animator = TimedAnimator { finished: AtomicBool::new(false) };
        let confetti = ConfettiConfig {
            duration: Duration::from_millis(500),
            ..ConfettiConfig::default()
        };

        play_feedback(&player, &animator, &entry(), &TtsSettings::default(), &confetti).await;

        assert!(animator.finished.load(Ordering::SeqCst));
        let spoken = player.spoken.lock().unwrap();
        assert_eq!(*spoken, vec!["cat".to_string(), "ねこ".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_speech_also_holds_the_join() {
        let player =
            SlowPlayer { delay: Duration::from_millis(400), spoken: Mutex::new(Vec::new()) };
        let animator = TimedAnimator { finished: AtomicBool::new(false) };
        let confetti = ConfettiConfig {
            duration: Duration::from_millis(50),
            ..ConfettiConfig::default()
        };

        play_feedback(&player, &animator, &entry(), &TtsSettings::default(), &confetti).await;

        // Both settled even though the animation finished long before
        // the second utterance.
        assert!(animator.finished.load(Ordering::SeqCst));
        assert_eq!(player.spoken.lock().unwrap().len(), 2);
    }
}
