//! Card system: definitions, catalog, and the default card set.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: Static card data (type, cost, stats, keywords)
//! - `CardCatalog`: Card definition lookup

pub mod definition;
pub mod registry;
pub mod starter;

pub use definition::{Card, CardId, CardType, Keyword};
pub use registry::CardCatalog;
