//! Tabstrip Group Headers
//!
//! Each group in the vertical strip is introduced by a header row:
//! a disclosure triangle, the group title in bold, and a member count
//! badge while the group is collapsed.
//!
//! The header cell only computes geometry and issues drawing commands.
//! Click dispatch belongs to the control that owns the groups.

mod cell;
mod context;
mod error;
mod geometry;
mod layout;

pub use cell::{Disclosure, GroupHeaderCell, HeaderHit, SharedGroup};
pub use context::{DrawCommand, DrawContext, FontWeight, RecordingContext, TextStyle};
pub use error::HeaderError;
pub use geometry::{Point, Rect, Size};
pub use layout::{HeaderLayout, HeaderStyle};

pub type Result<T> = std::result::Result<T, HeaderError>;
