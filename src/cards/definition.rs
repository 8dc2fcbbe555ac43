//! Card definitions - static card data.
//!
//! A `Card` is immutable once the catalog is built. The board never owns
//! cards; cells reference them by display name, and the same card may sit
//! in any number of cells at once.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::trait_tag::Trait;

/// Trait list of a card. Cards carry one or two traits in practice.
pub type TraitList = SmallVec<[Trait; 2]>;

/// Static card definition.
///
/// ## Example
///
/// ```
/// use synergy_board::cards::{Card, Trait};
///
/// let knight = Card::new("knight", "騎士")
///     .with_trait(Trait::new("Noble", "貴族"))
///     .with_trait(Trait::new("Juggernaut", "坦克"));
///
/// assert_eq!(knight.traits.len(), 2);
/// assert!(knight.has_trait(&"Noble".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Asset identifier (names the card image).
    pub id: String,

    /// Display name, unique within a catalog.
    pub display_name: String,

    /// Traits in display order.
    pub traits: TraitList,
}

impl Card {
    /// Create a card with no traits.
    ///
    /// Add traits with [`Card::with_trait`] before registering it; catalogs
    /// reject cards without traits.
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            traits: SmallVec::new(),
        }
    }

    /// Add a trait (builder pattern).
    #[must_use]
    pub fn with_trait(mut self, tag: Trait) -> Self {
        self.traits.push(tag);
        self
    }

    /// Add several traits at once.
    #[must_use]
    pub fn with_traits(mut self, tags: impl IntoIterator<Item = Trait>) -> Self {
        self.traits.extend(tags);
        self
    }

    /// Check whether the card carries a trait.
    #[must_use]
    pub fn has_trait(&self, key: &super::TraitKey) -> bool {
        self.traits.iter().any(|t| &t.key == key)
    }

    /// Labels of the card's traits, in order.
    pub fn trait_labels(&self) -> impl Iterator<Item = &str> {
        self.traits.iter().map(|t| t.label.as_str())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name)
    }
}
