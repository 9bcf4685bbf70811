//! In-memory catalog state.
//!
//! Holds the ordered product list, the create-form draft, and the single
//! edit slot. Every mutation is applied locally and synchronously; there is
//! no remote commit to wait for.

pub mod allocator;
mod error;
mod session;
mod store;
mod types;

pub use error::CatalogError;
pub use session::EditSession;
pub use store::CatalogStore;
pub use types::{CatalogSnapshot, ImageMode, Outcome, Product, ProductId, RecordState};
