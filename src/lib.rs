//! Swatch - inline color-literal decorations for editor hosts
//!
//! Scans document text for color literals (hex variants, `rgb()`, `rgba()`)
//! and keeps a small colored swatch marker beside every occurrence, reusing
//! one marker per distinct literal as text changes. The embedding editor is
//! abstracted behind the [`EditorHost`] trait; everything else is intrinsic.

pub mod cli;
pub mod color;
pub mod engine;
pub mod host;
pub mod marker;
pub mod matcher;
pub mod style;
pub mod trace;

// Re-export commonly used types
pub use color::{parse_color, Rgba};
pub use engine::SwatchEngine;
pub use host::{
    DocumentId, EditorHost, HostEvent, MarkerId, Position, PositionIndex, Range, ViewId,
};
pub use marker::MarkerCache;
pub use matcher::{find_colors, ColorMatch};
pub use style::SwatchStyle;
