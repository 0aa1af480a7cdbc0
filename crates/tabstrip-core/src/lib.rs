//! Tabstrip Core
//!
//! The owning side of the vertical tab strip's groups: keeps every group
//! and its header cell, lays out rows, routes disclosure clicks back to
//! the groups, and saves/restores the group arrangement.
//!
//! All of it runs on the UI thread. Hosts mutating groups from elsewhere
//! must hop back to the UI thread first.

mod config;
mod error;
mod strip;

pub use config::StripConfig;
pub use error::StripError;
pub use strip::{ClickOutcome, GroupStrip, Row, RowKind};

// Re-export the model and header surface
pub use tabstrip_groups::{Color, GroupError, GroupPatch, Snapshot, TabGroup};
pub use tabstrip_header::{
    Disclosure, DrawCommand, DrawContext, FontWeight, GroupHeaderCell, HeaderError, HeaderHit,
    HeaderLayout, HeaderStyle, Point, RecordingContext, Rect, SharedGroup, Size, TextStyle,
};

pub type Result<T> = std::result::Result<T, StripError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
