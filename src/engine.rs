//! Render coordination
//!
//! Owns the marker cache and drives the per-view pipeline: extract text →
//! match colors → group by literal → resolve ranges → apply markers →
//! clear stale markers. Each [`HostEvent`] re-runs the full pipeline for
//! the views it affects; there is no incremental diffing, a scan is linear
//! in document size and the host debounces change events.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::host::{EditorHost, HostEvent, PositionIndex, Range, ViewId};
use crate::marker::MarkerCache;
use crate::matcher::{find_colors, ColorMatch};
use crate::style::SwatchStyle;

pub struct SwatchEngine {
    cache: MarkerCache,
    style: SwatchStyle,
}

impl SwatchEngine {
    pub fn new(style: SwatchStyle) -> Self {
        Self {
            cache: MarkerCache::new(),
            style,
        }
    }

    /// The literal → marker cache, for inspection
    pub fn cache(&self) -> &MarkerCache {
        &self.cache
    }

    /// Dispatch one host trigger to the views it affects
    pub fn handle_event(&mut self, event: HostEvent, host: &mut dyn EditorHost) {
        match event {
            HostEvent::Activated | HostEvent::VisibleViewsChanged => self.refresh_all(host),
            HostEvent::DocumentChanged(doc) => {
                for view in host.views_of(doc) {
                    self.refresh_view(view, host);
                }
            }
            HostEvent::ActiveViewChanged(Some(view)) => self.refresh_view(view, host),
            HostEvent::ActiveViewChanged(None) => {}
        }
    }

    /// Re-decorate every visible view
    pub fn refresh_all(&mut self, host: &mut dyn EditorHost) {
        for view in host.visible_views() {
            self.refresh_view(view, host);
        }
    }

    /// Run the full pipeline for one view
    pub fn refresh_view(&mut self, view: ViewId, host: &mut dyn EditorHost) {
        let text = host.view_text(view);
        let matches = find_colors(&text);
        debug!(
            view = view.0,
            matches = matches.len(),
            "refreshing swatches"
        );

        let index = PositionIndex::new(&text);
        let groups = group_by_literal(&matches);

        let mut active: HashSet<&str> = HashSet::new();
        for &(literal, ref occurrences) in &groups {
            let ranges: Vec<Range> = occurrences
                .iter()
                .map(|m| index.range(m.start, m.len))
                .collect();

            match self.cache.get_or_create(literal, &self.style, host) {
                Ok(id) => {
                    host.set_marker_ranges(view, id, &ranges);
                    active.insert(literal);
                }
                Err(e) => {
                    // One bad literal must not abort the rest of the view
                    warn!("skipping swatch for {:?}: {:#}", literal, e);
                }
            }
        }

        for (_, id) in self.cache.stale_literals(&active) {
            host.set_marker_ranges(view, id, &[]);
        }
    }
}

/// Group matches by literal, preserving first-occurrence order
fn group_by_literal(matches: &[ColorMatch]) -> Vec<(&str, Vec<&ColorMatch>)> {
    let mut groups: Vec<(&str, Vec<&ColorMatch>)> = Vec::new();
    for m in matches {
        match groups.iter_mut().find(|(lit, _)| *lit == m.literal) {
            Some((_, occurrences)) => occurrences.push(m),
            None => groups.push((m.literal.as_str(), vec![m])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_literal_preserves_first_occurrence_order() {
        let matches = find_colors("#fff rgb(1, 2, 3) #fff");
        let groups = group_by_literal(&matches);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "#fff");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "rgb(1, 2, 3)");
    }
}
