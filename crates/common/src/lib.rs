//! Common utilities and types shared by the grid crates.

pub mod geometry;
pub mod error;
pub mod units;

pub use geometry::{Point, Size, Rect};
pub use error::{LayoutError, LayoutResult};
pub use units::{Length, LengthContext};
