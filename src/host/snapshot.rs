//! Recorded window and element measurements.
//!
//! Snapshots stand in for a live page anywhere a browser is not available:
//! scene files, tests, server-side layout checks.

use super::{ElementSource, WindowSource};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A window's readings at one instant.
///
/// Missing fields deserialize as `None`, which makes the fallback chain
/// move on to the next source.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSnapshot {
    /// `window.scrollY`.
    #[serde(default)]
    pub scroll_y: Option<f64>,
    /// `window.pageYOffset`.
    #[serde(default)]
    pub page_y_offset: Option<f64>,
    /// `document.body.scrollTop`.
    #[serde(default)]
    pub body_scroll_top: Option<f64>,
    /// `document.documentElement.scrollTop`.
    #[serde(default)]
    pub document_element_scroll_top: Option<f64>,
    /// `window.innerHeight`.
    #[serde(default)]
    pub inner_height: Option<f64>,
    /// `window.innerWidth`.
    #[serde(default)]
    pub inner_width: Option<f64>,
    /// `document.body.clientHeight`.
    #[serde(default)]
    pub body_client_height: Option<f64>,
    /// `document.body.clientWidth`.
    #[serde(default)]
    pub body_client_width: Option<f64>,
}

impl WindowSnapshot {
    /// A window of the given inner size scrolled to `scroll_y`.
    pub fn new(scroll_y: f64, inner_width: f64, inner_height: f64) -> Self {
        Self {
            scroll_y: Some(scroll_y),
            inner_width: Some(inner_width),
            inner_height: Some(inner_height),
            ..Self::default()
        }
    }

    /// Copy of this snapshot with `scroll_y` replaced.
    pub fn scrolled_to(&self, scroll_y: f64) -> Self {
        Self {
            scroll_y: Some(scroll_y),
            ..*self
        }
    }
}

impl WindowSource for WindowSnapshot {
    fn scroll_y(&self) -> Option<f64> {
        self.scroll_y
    }

    fn page_y_offset(&self) -> Option<f64> {
        self.page_y_offset
    }

    fn body_scroll_top(&self) -> Option<f64> {
        self.body_scroll_top
    }

    fn document_element_scroll_top(&self) -> Option<f64> {
        self.document_element_scroll_top
    }

    fn inner_height(&self) -> Option<f64> {
        self.inner_height
    }

    fn inner_width(&self) -> Option<f64> {
        self.inner_width
    }

    fn body_client_height(&self) -> Option<f64> {
        self.body_client_height
    }

    fn body_client_width(&self) -> Option<f64> {
        self.body_client_width
    }
}

/// An element's readings at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSnapshot {
    /// Bounding rectangle relative to the viewport.
    pub rect: Rect,
    /// Rendered height including padding and border.
    pub outer_height: f64,
    /// Inner height.
    pub client_height: f64,
    /// Clipping box height.
    pub offset_height: f64,
    /// Full content height.
    pub scroll_height: f64,
    /// Top edge relative to the document origin.
    pub document_top: f64,
}

impl ElementSnapshot {
    /// A non-overflowing element whose heights all equal the rectangle's height.
    ///
    /// `scroll_top` is the window scroll offset at the time `rect` was taken;
    /// it places the element in the document.
    pub fn from_rect(rect: Rect, scroll_top: f64) -> Self {
        let height = rect.height();
        Self {
            rect,
            outer_height: height,
            client_height: height,
            offset_height: height,
            scroll_height: height,
            document_top: rect.top + scroll_top,
        }
    }

    /// Replace the content height, e.g. for a clipped box holding more text than fits.
    pub fn with_scroll_height(mut self, scroll_height: f64) -> Self {
        self.scroll_height = scroll_height;
        self
    }
}

impl ElementSource for ElementSnapshot {
    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn outer_height(&self) -> f64 {
        self.outer_height
    }

    fn client_height(&self) -> f64 {
        self.client_height
    }

    fn offset_height(&self) -> f64 {
        self.offset_height
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn document_top(&self) -> f64 {
        self.document_top
    }
}
