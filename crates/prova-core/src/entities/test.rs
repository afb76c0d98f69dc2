use serde::{Deserialize, Serialize};

use crate::entities::Category;

/// An exam document: a title, a PDF URL, a category, and a view counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    pub id: i32,
    pub name: String,
    pub pdf_url: String,
    pub category: Category,
    #[serde(default)]
    pub views: i32,
}
