//! Core value types shared by the box, drawing and category modules.
//!
//! # Design Principles
//!
//! 1. **Two explicit layouts**: [`BBoxXYWH`] and [`BBoxXYXY`] are distinct
//!    types, so a box can never be passed in the wrong layout.
//!
//! 2. **Inclusive corners**: a box of width `w` spans columns
//!    `[x1, x1 + w - 1]`, which is why conversions add or subtract one.
//!
//! 3. **Permissive Construction**: malformed boxes (negative sizes, swapped
//!    corners) can be represented; nothing panics on them.
//!
//! # Example
//!
//! ```
//! use cocoplus::ir::{BBoxXYWH, BBoxXYXY, Coord};
//!
//! let annotation_box = BBoxXYWH::new(10.0, 20.0, 5.0, 8.0);
//! let corners = BBoxXYXY::new(Coord::new(10.0, 20.0), Coord::new(14.0, 27.0));
//! assert!(corners.is_ordered());
//! assert_eq!(annotation_box.to_array(), [10.0, 20.0, 5.0, 8.0]);
//! ```

mod bbox;
mod coord;
mod ids;

pub use bbox::{BBoxXYWH, BBoxXYXY};
pub use coord::Coord;
pub use ids::CategoryId;
