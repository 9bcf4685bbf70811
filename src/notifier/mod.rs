//! Outcome reporting and confirmation prompts.
//!
//! The editor reports every applied mutation through a [`Notifier`] and asks
//! it before deleting. Confirmations are single-shot: the notifier hands back
//! a receiver and answers whenever the user does, so the editor keeps
//! processing other events in the meantime.

mod terminal;

use std::fmt;

use tokio::sync::oneshot;

use crate::catalog::CatalogError;
use crate::form::DraftField;

pub use terminal::TerminalNotifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info { title: String, body: String },
    ValidationError { fields: Vec<DraftField> },
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Info {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn product_added() -> Self {
        Self::info(
            "Product Added!",
            "Your new product has been added successfully.",
        )
    }

    pub fn product_updated() -> Self {
        Self::info("Updated!", "The product has been updated successfully.")
    }

    pub fn product_deleted() -> Self {
        Self::info("Deleted!", "The product has been deleted.")
    }

    /// Notice for a rejected create.
    pub fn from_create_error(err: &CatalogError) -> Self {
        match err {
            CatalogError::Validation { missing } => Self::ValidationError {
                fields: missing.clone(),
            },
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Info { title, .. } => title,
            Self::ValidationError { .. } => "Oops...",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info { title, body } => write!(f, "{} {}", title, body),
            Self::ValidationError { fields } => {
                let err = CatalogError::Validation {
                    missing: fields.clone(),
                };
                write!(f, "{} {}!", self.title(), err)
            }
        }
    }
}

/// A yes/no question for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub body: String,
}

impl Prompt {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn delete_product() -> Self {
        Self::new("Are you sure?", "You won't be able to undo this!")
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    /// Ask the user a question. Dropping the sender counts as "no".
    fn confirm(&self, prompt: Prompt) -> oneshot::Receiver<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_notice_renders_fields() {
        let notice = Notice::ValidationError {
            fields: vec![DraftField::Title, DraftField::Description],
        };
        assert_eq!(
            notice.to_string(),
            "Oops... Title and Description are required!"
        );
    }

    #[test]
    fn create_error_maps_to_validation_notice() {
        let notice = Notice::from_create_error(&CatalogError::Validation {
            missing: vec![DraftField::ImageUrl],
        });
        assert_eq!(notice.title(), "Oops...");
        assert_eq!(notice.to_string(), "Oops... Image URL is required!");
    }
}
