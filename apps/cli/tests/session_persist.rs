//! End-to-end reviews against real set files on disk.

use std::collections::VecDeque;
use std::fs;
use std::io;

use flashdrill_core::{
    run_review, run_session, CardSet, SessionQueue, SetSource, StudyPrompt, StudySettings, SHUFFLE,
};
use flashdrill_cli::storage::{load_set, FileScoreStore};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Scripted stand-in for the terminal.
#[derive(Default)]
struct Scripted {
    answers: VecDeque<String>,
    confirms: VecDeque<bool>,
    prompts: Vec<String>,
    warnings: Vec<String>,
}

impl Scripted {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }

    fn with_confirms(mut self, confirms: &[bool]) -> Self {
        self.confirms = confirms.iter().copied().collect();
        self
    }
}

impl StudyPrompt for Scripted {
    fn begin_set(&mut self, _set: &CardSet) -> io::Result<()> {
        Ok(())
    }

    fn prompt_card(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }

    fn prompt_recovery(&mut self, _answer: &str) -> io::Result<String> {
        Ok(self.answers.pop_front().unwrap_or_default())
    }

    fn recovery_failed(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn end_card(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn begin_missed_round(&mut self, _missed: usize) -> io::Result<()> {
        Ok(())
    }

    fn report_score(&mut self, _score: u8) -> io::Result<()> {
        Ok(())
    }

    fn confirm(&mut self, _message: &str) -> io::Result<bool> {
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        self.warnings.push(message.to_string());
        Ok(())
    }
}

struct NoMoreSets;

impl SetSource for NoMoreSets {
    fn request_sets(&mut self) -> io::Result<Vec<CardSet>> {
        Ok(Vec::new())
    }
}

/// Flip on, shuffle off: deterministic order, term-first prompts.
fn flip_only() -> StudySettings {
    let mut settings = StudySettings::default();
    settings.toggle(SHUFFLE);
    settings
}

#[test]
fn review_rewrites_marker_and_keeps_every_other_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("djur.txt");
    fs::write(
        &path,
        "# Score: 10\nhund: dog\n\n# kommentar\nkatt: cat\nbroken line\n",
    )
    .unwrap();

    let loaded = load_set(&path).unwrap();
    assert_eq!(loaded.set.len(), 2);
    assert_eq!(loaded.last_score, Some(10));
    assert_eq!(loaded.malformed, 1);

    // Miss "cat" once, recover, clear it in round 1.
    let mut ui = Scripted::new(&["hund", "fel", "katt", "katt"]);
    let mut store = FileScoreStore::default();

    let outcome = run_review(
        &loaded.set,
        &flip_only(),
        &mut ui,
        &mut store,
        &mut rand::rng(),
    )
    .unwrap();

    assert_eq!(ui.prompts, vec!["dog", "cat", "cat"]);
    assert_eq!(outcome.score, 50);
    assert_eq!(outcome.rounds, 2);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "# Score: 50\nhund: dog\n\n# kommentar\nkatt: cat\nbroken line\n"
    );
}

#[test]
fn perfect_session_marks_an_unmarked_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("verb.txt");
    fs::write(&path, "springa: run\nhoppa: jump\n").unwrap();

    let loaded = load_set(&path).unwrap();
    let mut queue = SessionQueue::new();
    queue.enqueue(loaded.set);

    let mut ui = Scripted::new(&["springa", "hoppa"]).with_confirms(&[false]);
    let mut store = FileScoreStore::default();

    let summary = run_session(
        &mut queue,
        &flip_only(),
        &mut ui,
        &mut NoMoreSets,
        &mut store,
        &mut rand::rng(),
    )
    .unwrap();

    assert_eq!(summary.len(), 1);
    assert_eq!(summary.reviews[0].score, 100);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# Score: 100\nspringa: run\nhoppa: jump\n"
    );
}

#[test]
fn vanished_file_warns_but_review_finishes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("djur.txt");
    fs::write(&path, "hund: dog\n").unwrap();

    let loaded = load_set(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let mut ui = Scripted::new(&["hund"]);
    let mut store = FileScoreStore::default();

    let outcome = run_review(
        &loaded.set,
        &flip_only(),
        &mut ui,
        &mut store,
        &mut rand::rng(),
    )
    .unwrap();

    assert_eq!(outcome.score, 100);
    assert_eq!(ui.warnings.len(), 1);
    assert!(ui.warnings[0].contains("score was not saved"));
}
