use serde::Serialize;

use crate::slug::{slugify, trim_newlines};

/// A top-level section of the listing page.
///
/// `ordinal` is the position of the originating heading among all top-level
/// headings; two categories with the same text are still distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    #[serde(skip)]
    pub ordinal: usize,
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn from_heading(ordinal: usize, text: &str) -> Self {
        Category {
            ordinal,
            id: slugify(text),
            name: trim_newlines(text).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub category: Option<Category>,
    pub title: String,
    pub title_slug: String,
    pub index: usize,
    pub image: Option<String>,
    pub zip_url: Option<String>,
    pub body_text: String,
}

impl Sample {
    pub fn from_heading(category: Option<Category>, index: usize, text: &str) -> Self {
        Sample {
            category,
            title: trim_newlines(text).to_string(),
            title_slug: slugify(text),
            index,
            image: None,
            zip_url: None,
            body_text: String::new(),
        }
    }

    /// Id of the owning category, empty for samples listed before any category.
    pub fn category_id(&self) -> &str {
        self.category.as_ref().map(|c| c.id.as_str()).unwrap_or("")
    }
}
