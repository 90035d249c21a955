//! Marker cache
//!
//! Maps each color literal to the host marker that renders its swatch.
//! Insert-only: a literal that disappears from every view keeps its marker
//! with its ranges cleared, ready for reuse when the literal comes back.
//! Owned by the engine, constructed and dropped with it.

use std::collections::{HashMap, HashSet};

use anyhow::{anyhow, Context};

use crate::color::parse_color;
use crate::host::{EditorHost, MarkerId};
use crate::style::SwatchStyle;

#[derive(Debug, Default)]
pub struct MarkerCache {
    markers: HashMap<String, MarkerId>,
}

impl MarkerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct literals ever seen
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// The marker for a literal, if one was ever created
    pub fn get(&self, literal: &str) -> Option<MarkerId> {
        self.markers.get(literal).copied()
    }

    /// Return the marker for `literal`, creating it on first sight.
    ///
    /// Cache keys are the raw literal, byte for byte: `#FA0` and `#fa0`
    /// are distinct entries even though they render the same color. On a
    /// miss the literal is re-encoded to its CSS display string and the
    /// host mints a new marker with that fill.
    ///
    /// Only literals the matcher validated should reach this point; an
    /// unparsable literal is a caller bug and comes back as an error
    /// instead of a panic.
    pub fn get_or_create(
        &mut self,
        literal: &str,
        style: &SwatchStyle,
        host: &mut dyn EditorHost,
    ) -> anyhow::Result<MarkerId> {
        if let Some(&id) = self.markers.get(literal) {
            return Ok(id);
        }

        let rgba = parse_color(literal)
            .ok_or_else(|| anyhow!("not a valid color literal: {:?}", literal))?;
        let id = host
            .create_marker(&rgba.to_css(), style)
            .with_context(|| format!("creating marker for {:?}", literal))?;
        self.markers.insert(literal.to_string(), id);
        Ok(id)
    }

    /// Iterate over every (literal, marker) pair
    pub fn iter(&self) -> impl Iterator<Item = (&str, MarkerId)> {
        self.markers.iter().map(|(lit, &id)| (lit.as_str(), id))
    }

    /// Cached literals absent from `active`: their markers should have
    /// their ranges cleared for the view being refreshed
    pub fn stale_literals(&self, active: &HashSet<&str>) -> Vec<(&str, MarkerId)> {
        self.markers
            .iter()
            .filter(|(lit, _)| !active.contains(lit.as_str()))
            .map(|(lit, &id)| (lit.as_str(), id))
            .collect()
    }
}
