use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An editable text field of a product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Description,
    ImageUrl,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [Self::Title, Self::Description, Self::ImageUrl];

    /// Human-readable label used in notices.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::ImageUrl => "Image URL",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field '{0}' (expected title, description or image)")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" | "name" => Ok(Self::Title),
            "description" | "desc" => Ok(Self::Description),
            "image" | "image_url" | "img" => Ok(Self::ImageUrl),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}
