//! Line-oriented card set parsing.
//!
//! A set file holds one card per line as `definition: term`. Blank lines
//! and lines whose first non-whitespace character is `#` are skipped, which
//! also makes the score marker on the first line invisible to the parser.

use crate::error::MalformedCard;
use crate::types::Card;

/// Separator between the definition and term fields of a card line.
pub const FIELD_SEPARATOR: &str = ": ";

/// Outcome of parsing one set's content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSet {
    pub cards: Vec<Card>,
    pub malformed: Vec<MalformedCard>,
}

impl ParsedSet {
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

/// Parse set content into cards, collecting malformed lines as diagnostics.
///
/// A card line is trimmed, then must contain exactly one `": "` with
/// non-empty text on both sides. Anything else that is not blank or a
/// comment is recorded in `malformed` with its 1-based line number and
/// skipped.
pub fn parse(content: &str) -> ParsedSet {
    let mut parsed = ParsedSet::default();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.splitn(3, FIELD_SEPARATOR);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(definition), Some(term), None)
                if !definition.is_empty() && !term.is_empty() =>
            {
                parsed.cards.push(Card::new(definition, term));
            }
            _ => parsed.malformed.push(MalformedCard {
                line: index + 1,
                text: trimmed.to_string(),
            }),
        }
    }

    parsed
}
