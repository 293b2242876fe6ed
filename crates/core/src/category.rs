//! Category names for portfolio items.
//!
//! Items carry a free-text `category` string. The UI offers a fixed set of
//! named categories plus an "Other" escape hatch that accepts arbitrary
//! text; both end up as plain strings on the committed item.

use crate::error::CoreError;

/// Sentinel group name for items whose stored category is empty.
///
/// Applied only in the derived grouping view -- stored items keep whatever
/// category string they were committed with.
pub const UNCATEGORIZED: &str = "Uncategorized";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The fixed set of named categories offered by the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Photography,
    Videography,
    Design,
    Illustration,
    DigitalArt,
    Fashion,
    FineArt,
    /// User supplies their own category text.
    Other,
}

impl Category {
    /// All selectable categories, in display order.
    pub const ALL: &'static [Category] = &[
        Category::Photography,
        Category::Videography,
        Category::Design,
        Category::Illustration,
        Category::DigitalArt,
        Category::Fashion,
        Category::FineArt,
        Category::Other,
    ];

    /// Display label, also the string stored on committed items.
    pub fn label(self) -> &'static str {
        match self {
            Category::Photography => "Photography",
            Category::Videography => "Videography",
            Category::Design => "Design",
            Category::Illustration => "Illustration",
            Category::DigitalArt => "Digital Art",
            Category::Fashion => "Fashion",
            Category::FineArt => "Fine Art",
            Category::Other => "Other",
        }
    }

    /// Parse a display label back into a category (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }
}

// ---------------------------------------------------------------------------
// CategoryChoice
// ---------------------------------------------------------------------------

/// A category selection made in the upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    /// One of the fixed [`Category`] entries.
    Named(Category),
    /// Free text entered after choosing "Other".
    Custom(String),
}

impl CategoryChoice {
    /// Resolve the choice to the category string stored on the item.
    ///
    /// A custom choice must contain non-whitespace text; a bare
    /// [`Category::Other`] without custom text is likewise rejected, so a
    /// committed item never carries an empty category.
    pub fn resolve(&self) -> Result<String, CoreError> {
        match self {
            CategoryChoice::Named(Category::Other) => Err(CoreError::Validation(
                "category 'Other' requires custom category text".to_string(),
            )),
            CategoryChoice::Named(category) => Ok(category.label().to_string()),
            CategoryChoice::Custom(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::Validation(
                        "custom category must not be empty".to_string(),
                    ));
                }
                Ok(trimmed.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
