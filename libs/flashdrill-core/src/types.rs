//! Core types for the study session engine.

use serde::{Deserialize, Serialize};

/// A single two-field flashcard.
///
/// On disk a card line reads `definition: term`. Which field is shown as
/// the prompt depends on the flip setting at review time; the storage order
/// of the fields never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub definition: String,
    pub term: String,
}

impl Card {
    pub fn new(definition: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            term: term.into(),
        }
    }

    /// The field shown to the user. A flipped review prompts with the term.
    pub fn prompt(&self, flip: bool) -> &str {
        if flip {
            &self.term
        } else {
            &self.definition
        }
    }

    /// The field the user must type back.
    pub fn answer(&self, flip: bool) -> &str {
        if flip {
            &self.definition
        } else {
            &self.term
        }
    }
}

/// An ordered card set plus its storage identity.
///
/// The card sequence is fixed at parse time. Reviews shuffle a working copy
/// of the cards, never this canonical order, and the score persister
/// rewrites the backing storage identified by `source` without ever
/// re-serializing cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    /// Storage location the score marker is written back to.
    pub source: String,
    /// Display name, usually the file stem.
    pub name: String,
    pub cards: Vec<Card>,
}

impl CardSet {
    pub fn new(source: impl Into<String>, name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Index of the flip toggle in [`StudySettings`].
pub const FLIP: usize = 0;
/// Index of the shuffle toggle in [`StudySettings`].
pub const SHUFFLE: usize = 1;

/// One named boolean toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSetting {
    pub name: String,
    pub enabled: bool,
}

/// Ordered study settings, consumed read-only by the review loop.
///
/// The review loop requires exactly two entries: index 0 flips which card
/// field is the prompt, index 1 shuffles the working order before each
/// round. Both default to enabled. The settings editor is the only mutator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudySettings {
    toggles: Vec<ToggleSetting>,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            toggles: vec![
                ToggleSetting {
                    name: "Flip term and definition".to_string(),
                    enabled: true,
                },
                ToggleSetting {
                    name: "Shuffle cards".to_string(),
                    enabled: true,
                },
            ],
        }
    }
}

impl StudySettings {
    /// Whether prompts show the term instead of the definition.
    pub fn flip(&self) -> bool {
        self.enabled(FLIP)
    }

    /// Whether each round's working order is shuffled.
    pub fn shuffle(&self) -> bool {
        self.enabled(SHUFFLE)
    }

    fn enabled(&self, index: usize) -> bool {
        self.toggles.get(index).map(|t| t.enabled).unwrap_or(false)
    }

    pub fn get(&self, index: usize) -> Option<&ToggleSetting> {
        self.toggles.get(index)
    }

    /// Flip entry `index`, returning its new value, or None if out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let toggle = self.toggles.get_mut(index)?;
        toggle.enabled = !toggle.enabled;
        Some(toggle.enabled)
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToggleSetting> {
        self.toggles.iter()
    }

    /// Normalize a deserialized value onto the canonical toggle list.
    ///
    /// Stored enabled flags are matched by name onto the defaults, so a
    /// stale or hand-edited config can never leave the review loop without
    /// its two required entries.
    pub fn reconcile(self) -> Self {
        let mut base = Self::default();
        for stored in self.toggles {
            if let Some(slot) = base.toggles.iter_mut().find(|t| t.name == stored.name) {
                slot.enabled = stored.enabled;
            }
        }
        base
    }
}
