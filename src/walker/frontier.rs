//! Frontier queue of traversal candidates
//!
//! The frontier is an ordered list: seeds first, then opponents in discovery
//! order. Enqueueing never deduplicates; a player found in several responses
//! is queued several times, and the traversal discards the extra copies when
//! they are dequeued (the visited set decides, not the queue). Selection
//! removes from arbitrary positions, so the backing store is a `Vec` rather
//! than a deque.

use crate::client::UserRating;

/// Ordered queue of users waiting to be processed
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: Vec<UserRating>,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a frontier holding the given seeds, in order
    pub fn with_seeds(seeds: &[UserRating]) -> Self {
        Self {
            entries: seeds.to_vec(),
        }
    }

    /// Append one candidate
    pub fn push(&mut self, user: UserRating) {
        self.entries.push(user);
    }

    /// Append candidates in the order given. Duplicates are kept.
    pub fn extend<I>(&mut self, users: I)
    where
        I: IntoIterator<Item = UserRating>,
    {
        self.entries.extend(users);
    }

    /// Remove and return the candidate at `index`, shifting later entries up
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> UserRating {
        self.entries.remove(index)
    }

    /// Remove and return the most recently queued candidate
    pub fn pop(&mut self) -> Option<UserRating> {
        self.entries.pop()
    }

    /// Number of queued candidates, duplicates included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate candidates front to back
    pub fn iter(&self) -> impl Iterator<Item = &UserRating> {
        self.entries.iter()
    }
}
