//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::HashMap;

use swatch::{DocumentId, EditorHost, MarkerId, Range, SwatchStyle, ViewId};

/// In-memory stand-in for the host editor: a set of documents, each shown
/// in exactly one view (view id mirrors document id), plus a record of
/// every marker created and every range set applied.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub docs: HashMap<u64, String>,
    /// Markers in creation order, with the CSS color each was created with
    pub created: Vec<(MarkerId, String)>,
    /// Last range set applied per (view, marker)
    pub ranges: HashMap<(ViewId, MarkerId), Vec<Range>>,
    /// When set, `create_marker` fails (for error-path tests)
    pub fail_creation: bool,
    next_marker: u64,
}

impl FakeHost {
    /// Host with a single document/view (id 0) holding `text`
    pub fn with_doc(text: &str) -> Self {
        let mut host = Self::default();
        host.docs.insert(0, text.to_string());
        host
    }

    pub fn set_text(&mut self, doc: u64, text: &str) {
        self.docs.insert(doc, text.to_string());
    }

    /// CSS color a marker was created with
    pub fn css_of(&self, marker: MarkerId) -> &str {
        self.created
            .iter()
            .find(|(id, _)| *id == marker)
            .map(|(_, css)| css.as_str())
            .unwrap_or_else(|| panic!("marker {:?} was never created", marker))
    }

    /// Last range set applied for a marker in a view (empty if never set)
    pub fn ranges_of(&self, view: ViewId, marker: MarkerId) -> &[Range] {
        self.ranges
            .get(&(view, marker))
            .map(|r| r.as_slice())
            .unwrap_or(&[])
    }
}

impl EditorHost for FakeHost {
    fn visible_views(&self) -> Vec<ViewId> {
        let mut views: Vec<ViewId> = self.docs.keys().copied().map(ViewId).collect();
        views.sort();
        views
    }

    fn views_of(&self, doc: DocumentId) -> Vec<ViewId> {
        if self.docs.contains_key(&doc.0) {
            vec![ViewId(doc.0)]
        } else {
            Vec::new()
        }
    }

    fn view_text(&self, view: ViewId) -> String {
        self.docs.get(&view.0).cloned().unwrap_or_default()
    }

    fn create_marker(
        &mut self,
        css_color: &str,
        _style: &SwatchStyle,
    ) -> anyhow::Result<MarkerId> {
        if self.fail_creation {
            anyhow::bail!("marker creation disabled");
        }
        let id = MarkerId(self.next_marker);
        self.next_marker += 1;
        self.created.push((id, css_color.to_string()));
        Ok(id)
    }

    fn set_marker_ranges(&mut self, view: ViewId, marker: MarkerId, ranges: &[Range]) {
        self.ranges.insert((view, marker), ranges.to_vec());
    }
}
