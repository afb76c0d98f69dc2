use serde::{Deserialize, Serialize};

/// A classification label for tests (e.g., exam type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
