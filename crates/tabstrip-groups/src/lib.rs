//! Tabstrip Groups
//!
//! A group is a named, collapsible run of tabs in the vertical strip.
//! Groups reference tabs by identifier only; the tabs themselves live
//! in a registry owned elsewhere.

mod color;
mod error;
mod group;
mod snapshot;

pub use color::Color;
pub use error::GroupError;
pub use group::{GroupPatch, TabGroup};
pub use snapshot::Snapshot;

pub type Result<T> = std::result::Result<T, GroupError>;
