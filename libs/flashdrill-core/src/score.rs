//! First-pass score computation and the on-disk score marker.
//!
//! A set's most recent score lives in a single leading comment line of its
//! own storage, `# Score: <integer>`. Everything below the marker is the
//! set's content and is preserved verbatim when the marker is rewritten.

use crate::error::{Result, SessionError};

/// Leading marker recognized and rewritten by [`apply_score`].
pub const SCORE_PREFIX: &str = "# Score:";

/// Percentage of cards answered correctly on the first attempt.
///
/// Rounds half away from zero. Fails with [`SessionError::EmptyRound`]
/// when `total` is zero; callers must not score an empty round.
pub fn first_pass_score(wrong: usize, total: usize) -> Result<u8> {
    if total == 0 {
        return Err(SessionError::EmptyRound);
    }
    let correct = total.saturating_sub(wrong);
    Ok(((correct as f64 / total as f64) * 100.0).round() as u8)
}

/// Read the score recorded in `content`'s marker line, if one is present
/// and parses as an integer.
pub fn read_score(content: &str) -> Option<u8> {
    let first_line = content.lines().next()?;
    let value = first_line.strip_prefix(SCORE_PREFIX)?;
    value.trim().parse().ok()
}

/// Rewrite `content` so its first line is a marker carrying `score`.
///
/// An existing marker line is replaced; any other first line is kept and
/// the new marker is prepended above it. Only lines bearing
/// [`SCORE_PREFIX`] are ever discarded.
pub fn apply_score(content: &str, score: u8) -> String {
    let rest = if content.starts_with(SCORE_PREFIX) {
        match content.split_once('\n') {
            Some((_, rest)) => rest,
            None => "",
        }
    } else {
        content
    };
    format!("{} {}\n{}", SCORE_PREFIX, score, rest)
}
