//! Host editor boundary
//!
//! The engine talks to the embedding editor exclusively through
//! [`EditorHost`]. The host owns views, documents and marker rendering;
//! the engine owns matching and the literal → marker mapping. Offsets
//! cross the boundary already converted to (line, column) positions via
//! [`PositionIndex`].

use ropey::Rope;

use crate::style::SwatchStyle;

/// Identifies an open view (one presentation of a document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub u64);

/// Identifies a document, possibly presented in several views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// Opaque handle to a host-rendered swatch marker
///
/// Minted by the host, one per distinct color literal, never destroyed
/// while the engine lives. "Clearing" a marker means replacing its range
/// set for a view with the empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

/// A (line, column) position, both zero-indexed; column counts chars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open document range covering one literal occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// External triggers that cause views to be re-decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// First activation: decorate every visible view
    Activated,
    /// A document's text changed
    DocumentChanged(DocumentId),
    /// The focused view changed (`None` when focus left the editor)
    ActiveViewChanged(Option<ViewId>),
    /// The set of visible views changed
    VisibleViewsChanged,
}

/// Everything the engine needs from the embedding editor
pub trait EditorHost {
    /// Views currently visible on screen
    fn visible_views(&self) -> Vec<ViewId>;

    /// Visible views currently presenting `doc`
    fn views_of(&self, doc: DocumentId) -> Vec<ViewId>;

    /// Full text of the view's document
    fn view_text(&self, view: ViewId) -> String;

    /// Create a marker rendering a fixed-size colored box styled per
    /// `style`, with `css_color` as its fill, positioned immediately
    /// before the decorated text
    fn create_marker(&mut self, css_color: &str, style: &SwatchStyle)
        -> anyhow::Result<MarkerId>;

    /// Replace the set of ranges `marker` decorates in `view`
    fn set_marker_ranges(&mut self, view: ViewId, marker: MarkerId, ranges: &[Range]);
}

/// Byte-offset to position conversion for one scan of a document
///
/// Built once per refresh from the extracted text; ropey gives O(log n)
/// byte→char and char→line lookups, so converting every match stays cheap
/// even for large documents.
pub struct PositionIndex {
    rope: Rope,
}

impl PositionIndex {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Convert a byte offset into a (line, column) position
    ///
    /// Offsets past the end of the text clamp to the final position.
    pub fn position_at(&self, byte_offset: usize) -> Position {
        let clamped = byte_offset.min(self.rope.len_bytes());
        let char_idx = self.rope.byte_to_char(clamped);
        let line = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(line);
        Position::new(line, char_idx - line_start)
    }

    /// Range covering `len` bytes starting at byte offset `start`
    pub fn range(&self, start: usize, len: usize) -> Range {
        Range::new(self.position_at(start), self.position_at(start + len))
    }
}
