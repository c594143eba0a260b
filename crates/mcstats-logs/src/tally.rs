use std::collections::HashMap;

/// Counter that remembers the order in which keys were first seen, so that
/// sorting by count keeps ties in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, amount: u64) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn get(&self, key: &str) -> u64 {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Up to `limit` entries, highest count first; ties keep first-seen order.
    pub fn most_common(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut tally = Tally::new();
        tally.increment("Alice");
        tally.add("Alice", 4);
        tally.increment("Bob");

        assert_eq!(tally.get("Alice"), 5);
        assert_eq!(tally.get("Bob"), 1);
        assert_eq!(tally.get("Charlie"), 0);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_most_common_is_stable_on_ties() {
        let mut tally = Tally::new();
        for key in ["c", "a", "b", "a", "b"] {
            tally.increment(key);
        }

        assert_eq!(tally.most_common(10), vec![("a", 2), ("b", 2), ("c", 1)]);
        assert_eq!(tally.most_common(1), vec![("a", 2)]);
        assert!(tally.most_common(0).is_empty());
    }
}
