//! Review loop and session protocol.
//!
//! The engine drives its collaborators through three trait seams:
//! [`StudyPrompt`] for terminal interaction, [`SetSource`] for queue
//! replenishment and [`ScoreStore`] for score persistence. Randomness
//! comes in as an explicit `rand::Rng` so shuffled rounds stay testable.

use std::io;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SessionError};
use crate::queue::SessionQueue;
use crate::score::first_pass_score;
use crate::types::{Card, CardSet, StudySettings};

/// Terminal-facing verbs of the review loop. Every input method strips
/// line terminators and nothing else; comparisons in the loop are exact.
pub trait StudyPrompt {
    /// A set is about to be reviewed.
    fn begin_set(&mut self, set: &CardSet) -> io::Result<()>;

    /// Show a card's prompt field and read the user's attempt.
    fn prompt_card(&mut self, prompt: &str) -> io::Result<String>;

    /// Show the literal correct answer and read the retype attempt.
    fn prompt_recovery(&mut self, answer: &str) -> io::Result<String>;

    /// The retype attempt did not match; called before re-prompting.
    fn recovery_failed(&mut self) -> io::Result<()>;

    /// A card has been dealt with, right or recovered.
    fn end_card(&mut self) -> io::Result<()>;

    /// A round over `missed` cards is about to start.
    fn begin_missed_round(&mut self, missed: usize) -> io::Result<()>;

    /// Announce the first-pass score.
    fn report_score(&mut self, score: u8) -> io::Result<()>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> io::Result<bool>;

    /// Surface a non-fatal problem.
    fn warn(&mut self, message: &str) -> io::Result<()>;
}

/// Supplies additional card sets when the queue is replenished.
pub trait SetSource {
    /// Sets to append to the queue tail, in order. Empty means the user
    /// declined to add any.
    fn request_sets(&mut self) -> io::Result<Vec<CardSet>>;
}

/// Persists a first-pass score to a set's backing storage.
pub trait ScoreStore {
    fn persist_score(&mut self, set: &CardSet, score: u8) -> io::Result<()>;
}

/// What one full review of a set produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    /// Cards in the set.
    pub total: usize,
    /// Cards missed on the first attempt of round 0.
    pub first_pass_missed: usize,
    /// First-pass score, persisted once per review.
    pub score: u8,
    /// Rounds it took until a round completed with zero misses.
    pub rounds: usize,
}

/// Reviews completed over one session, in order.
#[derive(Debug, Default)]
pub struct SessionSummary {
    pub reviews: Vec<ReviewOutcome>,
}

impl SessionSummary {
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

/// Run one review of `set`: round 0 over the full card list, then
/// iterated rounds over each round's missed cards until a round completes
/// clean.
///
/// Scoring fires exactly once, from round 0's miss count, immediately
/// after round 0 completes; missed rounds never touch the score. A
/// persistence failure is reported through [`StudyPrompt::warn`] and the
/// review continues.
pub fn run_review(
    set: &CardSet,
    settings: &StudySettings,
    ui: &mut impl StudyPrompt,
    store: &mut impl ScoreStore,
    rng: &mut impl Rng,
) -> Result<ReviewOutcome> {
    if set.is_empty() {
        return Err(SessionError::EmptySet(set.name.clone()));
    }

    ui.begin_set(set)?;

    let flip = settings.flip();
    let total = set.len();
    let mut working: Vec<Card> = set.cards.clone();
    let mut outcome = ReviewOutcome {
        total,
        first_pass_missed: 0,
        score: 0,
        rounds: 0,
    };
    let mut round = 0;

    loop {
        if settings.shuffle() {
            working.shuffle(rng);
        }

        let mut missed: Vec<Card> = Vec::new();
        for card in &working {
            let answer = card.answer(flip);
            let attempt = ui.prompt_card(card.prompt(flip))?;
            if attempt != answer {
                missed.push(card.clone());
                loop {
                    let retyped = ui.prompt_recovery(answer)?;
                    if retyped == answer {
                        break;
                    }
                    ui.recovery_failed()?;
                }
            }
            ui.end_card()?;
        }

        if round == 0 {
            outcome.first_pass_missed = missed.len();
            outcome.score = first_pass_score(missed.len(), total)?;
            ui.report_score(outcome.score)?;
            if let Err(err) = store.persist_score(set, outcome.score) {
                ui.warn(&format!("score was not saved: {err}"))?;
            }
        }

        round += 1;
        if missed.is_empty() {
            outcome.rounds = round;
            return Ok(outcome);
        }

        ui.begin_missed_round(missed.len())?;
        working = missed;
    }
}

/// Drive a whole study session over `queue`.
///
/// Before every dequeue the `source` is asked for more sets, which join
/// the tail. An empty queue after that offer ends the session cleanly.
/// After each review the user may repeat the set, which reruns the review
/// over the original full card list from round 0 and re-persists the
/// score.
pub fn run_session(
    queue: &mut SessionQueue,
    settings: &StudySettings,
    ui: &mut impl StudyPrompt,
    source: &mut impl SetSource,
    store: &mut impl ScoreStore,
    rng: &mut impl Rng,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    loop {
        for set in source.request_sets()? {
            queue.enqueue(set);
        }

        let set = match queue.dequeue() {
            Some(set) => set,
            None => return Ok(summary),
        };

        loop {
            let outcome = run_review(&set, settings, ui, store, rng)?;
            summary.reviews.push(outcome);
            if !ui.confirm("Repeat this set?")? {
                break;
            }
        }
    }
}
