//! Core study-session library for two-field flashcard sets.
//!
//! Provides:
//! - Plain-text card set parser (`definition: term` lines)
//! - Review loop with retype-until-correct recovery and missed-card rounds
//! - First-pass score calculator and score-marker rewriting
//! - FIFO session queue and the session protocol driving it
//! - Shared types (Card, CardSet, StudySettings)
//!
//! The library does no I/O of its own; terminal interaction, set storage
//! and score persistence are supplied through the traits in [`session`].

pub mod error;
pub mod parser;
pub mod queue;
pub mod score;
pub mod session;
pub mod types;

pub use error::{MalformedCard, Result, SessionError};
pub use parser::{parse, ParsedSet, FIELD_SEPARATOR};
pub use queue::SessionQueue;
pub use score::{apply_score, first_pass_score, read_score, SCORE_PREFIX};
pub use session::{
    run_review, run_session, ReviewOutcome, ScoreStore, SessionSummary, SetSource, StudyPrompt,
};
pub use types::{Card, CardSet, StudySettings, ToggleSetting, FLIP, SHUFFLE};
