//! The fixed COCO category taxonomy.
//!
//! The table is part of an external standard and is reproduced verbatim:
//! ids are not contiguous, and consumers that map model predictions to
//! labels rely on these exact id/name pairs.

mod table;

use std::fmt;

use serde::Serialize;

use crate::ir::CategoryId;
use table::COCO_CATEGORIES;

/// One entry of the COCO category table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CocoCategory {
    /// Coarse grouping label (e.g. "vehicle").
    pub supercategory: &'static str,

    /// Official COCO category id.
    pub id: CategoryId,

    /// Fine-grained category name (e.g. "bicycle").
    pub name: &'static str,
}

impl CocoCategory {
    const fn new(supercategory: &'static str, id: u64, name: &'static str) -> Self {
        Self {
            supercategory,
            id: CategoryId::new(id),
            name,
        }
    }
}

impl fmt::Display for CocoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {} ({})", self.id, self.name, self.supercategory)
    }
}

/// Returns the whole table, ordered by id.
pub fn all() -> &'static [CocoCategory] {
    &COCO_CATEGORIES
}

/// Looks up a category by its COCO id.
pub fn by_id(id: impl Into<CategoryId>) -> Option<&'static CocoCategory> {
    let id = id.into();
    COCO_CATEGORIES
        .binary_search_by_key(&id, |category| category.id)
        .ok()
        .map(|idx| &COCO_CATEGORIES[idx])
}

/// Looks up a category by its exact name.
pub fn by_name(name: &str) -> Option<&'static CocoCategory> {
    COCO_CATEGORIES.iter().find(|category| category.name == name)
}

/// Returns the categories of one supercategory, in id order.
pub fn in_supercategory(supercategory: &str) -> impl Iterator<Item = &'static CocoCategory> + '_ {
    COCO_CATEGORIES
        .iter()
        .filter(move |category| category.supercategory == supercategory)
}

/// Returns the distinct supercategory names in table order.
pub fn supercategories() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for category in &COCO_CATEGORIES {
        if !names.contains(&category.supercategory) {
            names.push(category.supercategory);
        }
    }
    names
}
