//! Breadcrumb path as an explicit stack of navigation frames.
//!
//! The displayed path is `workspace`, then the current section (if any), then
//! `[label, "Details"]` for every open frame. Opening pushes a frame and
//! closing pops one, so the path can never be left with a dangling half frame.
//! The breadcrumb is display state only and is not tied to the router URL.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Trailing label rendered after every open frame.
pub const DETAILS_LABEL: &str = "Details";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavFrame {
    pub label: String,
}

/// A clickable breadcrumb segment and the stack depth clicking it restores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub depth: usize,
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    workspace: String,
    section: Option<String>,
    frames: Vec<NavFrame>,
}

impl Breadcrumb {
    #[must_use]
    pub fn new(workspace: impl Into<String>) -> Self {
        Self {
            workspace: workspace.into(),
            section: None,
            frames: Vec::new(),
        }
    }

    #[must_use]
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    #[must_use]
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    #[must_use]
    pub fn frames(&self) -> &[NavFrame] {
        &self.frames
    }

    #[must_use]
    pub fn top(&self) -> Option<&NavFrame> {
        self.frames.last()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.frames.is_empty()
    }

    /// Switch to `section`, discarding any drill-down.
    pub fn enter_section(&mut self, section: impl Into<String>) {
        self.section = Some(section.into());
        self.frames.clear();
    }

    pub fn leave_section(&mut self) {
        self.section = None;
        self.frames.clear();
    }

    /// Push a detail frame: the path gains `[label, "Details"]`.
    pub fn open(&mut self, label: impl Into<String>) {
        self.frames.push(NavFrame { label: label.into() });
    }

    /// Pop the most recent frame. With no open frame this is a no-op.
    pub fn close(&mut self) -> Option<NavFrame> {
        self.frames.pop()
    }

    /// Keep only the first `depth` frames.
    pub fn truncate_to(&mut self, depth: usize) {
        self.frames.truncate(depth);
    }

    /// Flattened display labels.
    #[must_use]
    pub fn path(&self) -> Vec<String> {
        self.crumbs().into_iter().map(|crumb| crumb.label).collect()
    }

    /// Display segments with the depth each one navigates back to.
    #[must_use]
    pub fn crumbs(&self) -> Vec<Crumb> {
        let depth = self.depth();
        let mut crumbs = Vec::with_capacity(2 + depth * 2);
        crumbs.push(Crumb {
            label: self.workspace.clone(),
            depth: 0,
            current: false,
        });
        if let Some(section) = &self.section {
            crumbs.push(Crumb {
                label: section.clone(),
                depth: 0,
                current: false,
            });
        }
        for (index, frame) in self.frames.iter().enumerate() {
            crumbs.push(Crumb {
                label: frame.label.clone(),
                depth: index + 1,
                current: false,
            });
            crumbs.push(Crumb {
                label: DETAILS_LABEL.to_owned(),
                depth: index + 1,
                current: false,
            });
        }
        if let Some(last) = crumbs.last_mut() {
            last.current = true;
        }
        crumbs
    }
}
