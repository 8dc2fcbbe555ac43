//! Card system: traits, definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `Trait`: Synergy tag with a key and a display label
//! - `Card`: Static card data (asset id, display name, traits)
//! - `CardCatalog`: Ordered card pool with display-name lookup
//!
//! Cards are never consumed. The board references them by display name.

pub mod builtin;
pub mod catalog;
pub mod definition;
pub mod trait_tag;

pub use builtin::builtin_traits;
pub use catalog::CardCatalog;
pub use definition::{Card, TraitList};
pub use trait_tag::{Trait, TraitKey};
