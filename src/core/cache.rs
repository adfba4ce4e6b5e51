//! In-memory cache of resolved player identifiers
//!
//! Keys are display names exactly as typed (case-sensitive). The cache grows
//! for the lifetime of the process and entries are never evicted or
//! overwritten: the first identifier stored for a name wins.

use std::collections::HashMap;

use crate::PlayerId;

#[derive(Debug, Default, Clone)]
pub struct ResolverCache {
    entries: HashMap<String, PlayerId>,
}

impl ResolverCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<PlayerId> {
        self.entries.get(name).copied()
    }

    /// Store `id` for `name` unless the name is already cached.
    ///
    /// Returns the identifier now held for `name`.
    pub fn insert(&mut self, name: &str, id: PlayerId) -> PlayerId {
        *self.entries.entry(name.to_string()).or_insert(id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
