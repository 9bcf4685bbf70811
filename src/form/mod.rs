//! Draft-field state shared by the create form and the edit session.

mod field;
mod intent;
mod state;

pub use field::{DraftField, UnknownField};
pub use intent::FormIntent;
pub use state::ProductForm;
