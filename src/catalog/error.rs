use thiserror::Error;

use crate::form::DraftField;

/// Errors returned by catalog mutations.
///
/// Operations on unknown ids are not errors; they report
/// [`Outcome::NotFound`](crate::catalog::Outcome::NotFound) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{} required", join_labels(.missing))]
    Validation { missing: Vec<DraftField> },
}

fn join_labels(fields: &[DraftField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
    match labels.split_last() {
        None => String::new(),
        Some((last, [])) => format!("{} is", last),
        Some((last, rest)) => format!("{} and {} are", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_fields() {
        let err = CatalogError::Validation {
            missing: vec![DraftField::Title, DraftField::Description],
        };
        assert_eq!(err.to_string(), "Title and Description are required");

        let err = CatalogError::Validation {
            missing: vec![DraftField::Title],
        };
        assert_eq!(err.to_string(), "Title is required");

        let err = CatalogError::Validation {
            missing: DraftField::ALL.to_vec(),
        };
        assert_eq!(
            err.to_string(),
            "Title, Description and Image URL are required"
        );
    }
}
