//! Trait tags carried by cards.
//!
//! A `Trait` is a synergy tag like "Noble" or "Goblin". Its identity is the
//! `TraitKey`; the label is what the tally and the presentation layer show.

use serde::{Deserialize, Serialize};

/// Internal key identifying a trait.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TraitKey(pub String);

impl TraitKey {
    /// Create a new trait key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TraitKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TraitKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A synergy tag.
///
/// Two traits are equal when their keys are equal; the label does not
/// participate in identity.
///
/// ```
/// use synergy_board::cards::Trait;
///
/// let noble = Trait::new("Noble", "貴族");
/// assert_eq!(noble.key.as_str(), "Noble");
/// assert_eq!(noble.label, "貴族");
/// assert_eq!(noble, Trait::new("Noble", "Noble"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trait {
    /// Identity of the trait.
    pub key: TraitKey,

    /// Display label, used as the tally key.
    pub label: String,
}

impl Trait {
    /// Create a new trait.
    pub fn new(key: impl Into<TraitKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

impl PartialEq for Trait {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Trait {}

impl std::hash::Hash for Trait {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.key.hash(hasher);
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
