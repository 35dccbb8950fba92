//! The deduplicated set of edit directives. The set is the contract;
//! ordering is only imposed at emission for reproducible runs.

use spanify_core::types::collections::FxHashSet;

#[derive(Debug, Default)]
pub struct ChangeSet {
    entries: FxHashSet<String>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, directive: impl Into<String>) {
        self.entries.insert(directive.into());
    }

    pub fn contains(&self, directive: &str) -> bool {
        self.entries.contains(directive)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain into a lexicographically sorted list for emission.
    pub fn into_sorted(self) -> Vec<String> {
        let mut out: Vec<String> = self.entries.into_iter().collect();
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let mut set = ChangeSet::new();
        set.insert("edit");
        set.insert("edit");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn into_sorted_is_lexicographic() {
        let mut set = ChangeSet::new();
        set.insert("b");
        set.insert("a");
        set.insert("c");
        assert_eq!(set.into_sorted(), vec!["a", "b", "c"]);
    }
}
