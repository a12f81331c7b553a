//! Newtype IDs for type-safe identification of COCO elements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier of a COCO category.
///
/// COCO category ids are not contiguous: the official 80-class table skips
/// a dozen ids (12, 26, 29, ...) that were defined but never annotated.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl CategoryId {
    /// Creates a new CategoryId.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId({})", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        CategoryId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_equality() {
        assert_eq!(CategoryId(1), CategoryId(1));
        assert_ne!(CategoryId(1), CategoryId(2));
    }

    #[test]
    fn test_id_ordering() {
        assert!(CategoryId(10) > CategoryId(5));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(CategoryId::from(90).to_string(), "90");
        assert_eq!(format!("{:?}", CategoryId(1)), "CategoryId(1)");
    }
}
