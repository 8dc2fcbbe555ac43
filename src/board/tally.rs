//! Trait tally.
//!
//! `TraitTally` keeps one counter per trait label, in the order labels were
//! first counted. Counters never go below zero.
//!
//! `TraitCounts` is the read-only snapshot handed to presentation: only
//! traits with a positive count, same order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One trait label and its count.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitCount {
    pub label: String,
    pub count: u32,
}

/// Running per-trait counters.
#[derive(Clone, Debug, Default)]
pub struct TraitTally {
    entries: Vec<TraitCount>,
    index: FxHashMap<String, usize>,
}

impl TraitTally {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, label: &str) -> &mut TraitCount {
        let i = match self.index.get(label) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(label.to_string(), i);
                self.entries.push(TraitCount {
                    label: label.to_string(),
                    count: 0,
                });
                i
            }
        };
        &mut self.entries[i]
    }

    /// Add one to a trait's count.
    pub fn increment(&mut self, label: &str) {
        self.slot(label).count += 1;
    }

    /// Subtract one from a trait's count, flooring at zero.
    ///
    /// Returns `false` if the count was already zero.
    pub fn decrement(&mut self, label: &str) -> bool {
        let Some(&i) = self.index.get(label) else {
            return false;
        };
        let entry = &mut self.entries[i];
        if entry.count == 0 {
            return false;
        }
        entry.count -= 1;
        true
    }

    /// Current count for a label (0 if never counted).
    #[must_use]
    pub fn get(&self, label: &str) -> u32 {
        self.index.get(label).map_or(0, |&i| self.entries[i].count)
    }

    /// Reset every counter to zero. Label order is kept.
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.count = 0;
        }
    }

    /// Snapshot of traits with a positive count.
    #[must_use]
    pub fn active(&self) -> TraitCounts {
        TraitCounts(
            self.entries
                .iter()
                .filter(|e| e.count > 0)
                .cloned()
                .collect(),
        )
    }
}

/// Active trait counts, in first-counted order.
///
/// ```
/// use synergy_board::board::TraitTally;
///
/// let mut tally = TraitTally::new();
/// tally.increment("Noble");
/// tally.increment("Juggernaut");
/// tally.increment("Noble");
///
/// let counts = tally.active();
/// assert_eq!(counts.get("Noble"), 2);
/// assert_eq!(counts.to_string(), "Noble x 2\nJuggernaut x 1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitCounts(Vec<TraitCount>);

impl TraitCounts {
    /// Count for a label (0 if not active).
    #[must_use]
    pub fn get(&self, label: &str) -> u32 {
        self.0
            .iter()
            .find(|e| e.label == label)
            .map_or(0, |e| e.count)
    }

    /// Number of active traits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no trait is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over active traits.
    pub fn iter(&self) -> impl Iterator<Item = &TraitCount> {
        self.0.iter()
    }

    /// `(label, count)` pairs in order.
    #[must_use]
    pub fn as_pairs(&self) -> Vec<(&str, u32)> {
        self.0.iter().map(|e| (e.label.as_str(), e.count)).collect()
    }

    /// Order-insensitive view.
    #[must_use]
    pub fn to_map(&self) -> FxHashMap<String, u32> {
        self.0.iter().map(|e| (e.label.clone(), e.count)).collect()
    }
}

impl std::fmt::Display for TraitCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} x {}", entry.label, entry.count)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TraitCounts {
    type Item = &'a TraitCount;
    type IntoIter = std::slice::Iter<'a, TraitCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
