//! Built-in card pool.
//!
//! Seventeen cards over eleven traits. Display names and trait labels are
//! the traditional Chinese names shown on the board; ids name the card
//! images.

use super::catalog::CardCatalog;
use super::definition::Card;
use super::trait_tag::Trait;

/// Keys and labels of the built-in traits.
const TRAITS: [(&str, &str); 11] = [
    ("Ace", "王牌"),
    ("Assassin", "刺客"),
    ("Avenger", "復仇者"),
    ("Brawler", "英雄"),
    ("Clan", "部落"),
    ("Goblin", "哥布林"),
    ("Juggernaut", "坦克"),
    ("Noble", "貴族"),
    ("Ranger", "遊俠"),
    ("Thrower", "投手"),
    ("Undead", "不死"),
];

/// (id, trait keys, display name) in pool order.
const CARDS: [(&str, [&str; 2], &str); 17] = [
    ("knight", ["Noble", "Juggernaut"], "騎士"),
    ("archer", ["Clan", "Ranger"], "弓箭手"),
    ("goblin", ["Goblin", "Assassin"], "哥布林"),
    ("spear_goblin", ["Goblin", "Thrower"], "哥布林投矛手"),
    ("bomber", ["Undead", "Thrower"], "炸彈兵"),
    ("barbarian", ["Clan", "Brawler"], "多個野蠻人"),
    ("valkyrie", ["Clan", "Avenger"], "瓦基麗武神"),
    ("pekka", ["Ace", "Juggernaut"], "皮卡超人"),
    ("prince", ["Noble", "Brawler"], "王子"),
    ("giant_skeleton", ["Undead", "Brawler"], "骷髏巨人"),
    ("dart_goblin", ["Goblin", "Ranger"], "吹箭哥布林"),
    ("executioner", ["Ace", "Thrower"], "飛斧屠夫"),
    ("princess", ["Noble", "Ranger"], "公主"),
    ("bandit", ["Ace", "Brawler"], "幻影刺客"),
    ("goblin_machine", ["Goblin", "Juggernaut"], "哥布林機甲"),
    ("skeleton_king", ["Undead", "Juggernaut"], "骷髏之王"),
    ("golden_knight", ["Noble", "Assassin"], "金甲騎士"),
];

/// All built-in traits.
#[must_use]
pub fn builtin_traits() -> Vec<Trait> {
    TRAITS
        .iter()
        .map(|&(key, label)| Trait::new(key, label))
        .collect()
}

fn builtin_trait(key: &str) -> Trait {
    TRAITS
        .iter()
        .find(|&&(k, _)| k == key)
        .map(|&(k, label)| Trait::new(k, label))
        .unwrap_or_else(|| panic!("Unknown built-in trait {key:?}"))
}

impl CardCatalog {
    /// The built-in seventeen-card pool.
    ///
    /// ```
    /// use synergy_board::cards::CardCatalog;
    ///
    /// let catalog = CardCatalog::builtin();
    /// assert_eq!(catalog.len(), 17);
    /// assert_eq!(catalog.all()[0].id, "knight");
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        let cards = CARDS
            .iter()
            .map(|&(id, keys, name)| Card::new(id, name).with_traits(keys.map(builtin_trait)))
            .collect();
        Self::from_cards(cards)
    }
}
