//! Synthetic identifiers for products created locally.
//!
//! Ids are derived from the current catalog size alone. Remote ids at or
//! above the offset can coincide with synthesized ones, and so can an id
//! synthesized before a delete shrank the catalog. The store appends anyway
//! and logs the duplicate; lookups by id then resolve to the first match.

use crate::catalog::ProductId;

pub const SYNTHETIC_ID_OFFSET: u64 = 101;

/// Id for a product appended to a catalog currently holding `catalog_size` records.
pub fn next_id(catalog_size: usize) -> ProductId {
    ProductId(catalog_size as u64 + SYNTHETIC_ID_OFFSET)
}
