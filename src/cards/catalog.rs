//! Card catalog for display-name lookup.
//!
//! The `CardCatalog` holds the card pool in display order and indexes it by
//! display name. It is built once and never mutated afterwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::core::error::{BoardError, BoardResult};

/// Ordered, immutable card pool.
///
/// ## Example
///
/// ```
/// use synergy_board::cards::{Card, CardCatalog, Trait};
///
/// let catalog = CardCatalog::from_cards(vec![
///     Card::new("knight", "knight").with_trait(Trait::new("Noble", "Noble")),
/// ]);
///
/// let found = catalog.find_by_display_name("knight").unwrap();
/// assert_eq!(found.id, "knight");
/// assert!(catalog.find_by_display_name("wizard").is_none());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct CardCatalog {
    cards: Vec<Card>,
    by_name: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from cards in display order.
    ///
    /// Panics if a display name repeats, a card has no traits, or a card
    /// lists the same trait (by key or label) twice.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        match Self::try_from_cards(cards) {
            Ok(catalog) => catalog,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build a catalog from cards in display order, rejecting malformed cards.
    pub fn try_from_cards(cards: Vec<Card>) -> BoardResult<Self> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.try_push(card)?;
        }
        Ok(catalog)
    }

    fn try_push(&mut self, card: Card) -> BoardResult<()> {
        if self.by_name.contains_key(&card.display_name) {
            return Err(BoardError::DuplicateCard {
                name: card.display_name,
            });
        }
        if card.traits.is_empty() {
            return Err(BoardError::EmptyTraits {
                name: card.display_name,
            });
        }
        // Each trait label counts once per occupied cell.
        for (i, tag) in card.traits.iter().enumerate() {
            let earlier = &card.traits[..i];
            if earlier.iter().any(|t| t.key == tag.key || t.label == tag.label) {
                return Err(BoardError::DuplicateTrait {
                    name: card.display_name.clone(),
                    key: tag.key.as_str().to_string(),
                });
            }
        }
        self.by_name.insert(card.display_name.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// All cards in display order.
    #[must_use]
    pub fn all(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over all cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find a card by display name.
    #[must_use]
    pub fn find_by_display_name(&self, name: &str) -> Option<&Card> {
        self.by_name.get(name).map(|&i| &self.cards[i])
    }

    /// Find a card by display name, returning `UnknownCard` on a miss.
    pub fn try_resolve(&self, name: &str) -> BoardResult<&Card> {
        self.find_by_display_name(name)
            .ok_or_else(|| BoardError::unknown_card(name))
    }

    /// Find a card by display name, panicking if not found.
    ///
    /// Use for names that were drawn from this catalog.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &Card {
        match self.try_resolve(name) {
            Ok(card) => card,
            Err(err) => panic!("{err}"),
        }
    }

    /// Check if a display name is in the catalog.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl TryFrom<Vec<Card>> for CardCatalog {
    type Error = BoardError;

    fn try_from(cards: Vec<Card>) -> BoardResult<Self> {
        Self::try_from_cards(cards)
    }
}

impl From<CardCatalog> for Vec<Card> {
    fn from(catalog: CardCatalog) -> Self {
        catalog.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Trait;

    fn card(name: &str, traits: &[&str]) -> Card {
        Card::new(name, name).with_traits(traits.iter().map(|t| Trait::new(*t, *t)))
    }

    #[test]
    fn test_lookup() {
        let catalog = CardCatalog::from_cards(vec![
            card("knight", &["Noble", "Juggernaut"]),
            card("archer", &["Clan", "Ranger"]),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("archer"));
        assert_eq!(catalog.resolve("knight").traits.len(), 2);
        assert!(catalog.find_by_display_name("goblin").is_none());
    }

    #[test]
    fn test_display_order_preserved() {
        let catalog = CardCatalog::from_cards(vec![
            card("c", &["X"]),
            card("a", &["X"]),
            card("b", &["X"]),
        ]);

        let names: Vec<_> = catalog.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(catalog.all()[1].display_name, "a");
    }

    #[test]
    fn test_try_resolve_miss() {
        let catalog = CardCatalog::from_cards(vec![card("knight", &["Noble"])]);
        assert_eq!(
            catalog.try_resolve("wizard").unwrap_err(),
            BoardError::unknown_card("wizard")
        );
    }

    #[test]
    #[should_panic(expected = "unknown card")]
    fn test_resolve_miss_panics() {
        let catalog = CardCatalog::new();
        let _ = catalog.resolve("knight");
    }

    #[test]
    #[should_panic(expected = "already in catalog")]
    fn test_duplicate_name_panics() {
        let _ = CardCatalog::from_cards(vec![card("knight", &["Noble"]), card("knight", &["Ace"])]);
    }

    #[test]
    #[should_panic(expected = "has no traits")]
    fn test_traitless_card_panics() {
        let _ = CardCatalog::from_cards(vec![Card::new("blank", "blank")]);
    }

    #[test]
    #[should_panic(expected = "lists trait")]
    fn test_repeated_trait_panics() {
        let _ = CardCatalog::from_cards(vec![card("knight", &["Noble", "Noble"])]);
    }

    #[test]
    #[should_panic(expected = "lists trait")]
    fn test_repeated_trait_label_panics() {
        let _ = CardCatalog::from_cards(vec![Card::new("twin", "twin")
            .with_trait(Trait::new("Noble", "Royal"))
            .with_trait(Trait::new("Prince", "Royal"))]);
    }

    #[test]
    fn test_try_from_cards_reports_malformed_cards() {
        assert_eq!(
            CardCatalog::try_from_cards(vec![card("x", &["A"]), card("x", &["B"])]).unwrap_err(),
            BoardError::DuplicateCard { name: "x".into() }
        );
        assert_eq!(
            CardCatalog::try_from_cards(vec![Card::new("blank", "blank")]).unwrap_err(),
            BoardError::EmptyTraits {
                name: "blank".into()
            }
        );
        assert_eq!(
            CardCatalog::try_from_cards(vec![card("knight", &["Noble", "Noble"])]).unwrap_err(),
            BoardError::DuplicateTrait {
                name: "knight".into(),
                key: "Noble".into()
            }
        );
        assert_eq!(
            CardCatalog::try_from_cards(vec![card("knight", &["Noble"])])
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_malformed_catalog_json_is_an_error() {
        let duplicate_name = r#"[
            {"id":"x","display_name":"x","traits":[{"key":"A","label":"A"}]},
            {"id":"y","display_name":"x","traits":[{"key":"B","label":"B"}]}
        ]"#;
        assert!(serde_json::from_str::<CardCatalog>(duplicate_name).is_err());

        let no_traits = r#"[{"id":"x","display_name":"x","traits":[]}]"#;
        assert!(serde_json::from_str::<CardCatalog>(no_traits).is_err());

        let repeated_trait = r#"[
            {"id":"x","display_name":"x","traits":[
                {"key":"A","label":"A"},{"key":"A","label":"A"}
            ]}
        ]"#;
        assert!(serde_json::from_str::<CardCatalog>(repeated_trait).is_err());
    }

    #[test]
    fn test_catalog_serialization() {
        let catalog = CardCatalog::from_cards(vec![
            card("knight", &["Noble", "Juggernaut"]),
            card("archer", &["Clan", "Ranger"]),
        ]);

        let json = serde_json::to_string(&catalog).unwrap();
        let back: CardCatalog = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 2);
        assert_eq!(back.resolve("archer"), catalog.resolve("archer"));
    }
}
