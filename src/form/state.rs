use crate::catalog::ImageMode;
use crate::form::{DraftField, FormIntent};

/// Free-text values of a product form.
///
/// Values are kept exactly as typed; nothing is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl ProductForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Apply one edit in place.
    pub fn apply(&mut self, intent: FormIntent) {
        match intent {
            FormIntent::SetField { field, value } => match field {
                DraftField::Title => self.title = value,
                DraftField::Description => self.description = value,
                DraftField::ImageUrl => {
                    self.image_url = if value.is_empty() { None } else { Some(value) };
                }
            },
            FormIntent::Prefill { product } => {
                self.title = product.title;
                self.description = product.description;
                self.image_url = product.image_url;
            }
            FormIntent::Clear => *self = Self::default(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        self.apply(FormIntent::SetField {
            field,
            value: value.into(),
        });
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::ImageUrl => self.image_url.as_deref().unwrap_or(""),
        }
    }

    /// Required fields that are blank, in display order.
    ///
    /// Whitespace-only input counts as blank. The image URL is only
    /// required when the catalog models images.
    pub fn missing_fields(&self, mode: ImageMode) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| *field != DraftField::ImageUrl || mode.requires_image())
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.image_url.is_none()
    }
}
