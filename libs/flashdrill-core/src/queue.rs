use std::collections::VecDeque;

use crate::types::CardSet;

/// FIFO queue of card sets waiting to be reviewed.
///
/// Sets join at the tail and leave from the head; the queue is never
/// reordered.
#[derive(Debug, Default)]
pub struct SessionQueue {
    sets: VecDeque<CardSet>,
}

impl SessionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, set: CardSet) {
        self.sets.push_back(set);
    }

    pub fn dequeue(&mut self) -> Option<CardSet> {
        self.sets.pop_front()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
