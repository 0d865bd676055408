//! # Product Records
//!
//! A product is a catalog entry users can leave feedback on.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Serialized with PascalCase field names to match the public JSON contract:
///
/// ```text
/// {"Id":1,"Name":"Scatterplot","Slug":"scatter-plot","Description":"..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// URL-safe identifier used in `/products/{slug}/feedback`.
    pub slug: String,
    pub description: String,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            description: description.into(),
        }
    }
}
