//! Catalog category.

use serde::{Deserialize, Serialize};

use bookstall_core::{CategoryId, Entity};

/// A named book category. Names are unique server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }
}
