//! Viewport facade
//!
//! [`Viewport`] is the crate's public query surface: it reads a
//! [`WindowSource`] and an [`ElementSource`] and delegates the arithmetic
//! to [`crate::geometry`]. It caches nothing, so call it again on every
//! scroll or resize event with fresh element handles.
//!
//! # Example
//!
//! ```
//! use viewmaster::geometry::{Rect, ScrollDirection, ScrollTracker};
//! use viewmaster::host::{ElementSnapshot, WindowSnapshot};
//! use viewmaster::viewport::Viewport;
//!
//! let viewport = Viewport::new(WindowSnapshot::new(0.0, 1280.0, 800.0));
//! let card = ElementSnapshot::from_rect(Rect::vertical(100.0, 400.0), 0.0);
//!
//! assert_eq!(viewport.visible_element_height(&card), 300.0);
//! assert!(!viewport.is_element_cut_off(&card));
//!
//! let mut tracker = ScrollTracker::new();
//! assert_eq!(viewport.scroll_direction(&mut tracker), ScrollDirection::Up);
//! ```

use crate::geometry::{
    self, buffer_or_zero, first_positive_reading, first_reading, ScrollDirection, ScrollTracker,
};
use crate::host::{ElementSource, WindowSource};
use tracing::{trace, warn};

/// Geometry queries against one window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport<W> {
    window: W,
}

impl<W: WindowSource> Viewport<W> {
    /// Wrap a window source.
    pub fn new(window: W) -> Self {
        Self { window }
    }

    /// The underlying window source.
    pub fn window(&self) -> &W {
        &self.window
    }

    /// Mutable access to the window source, e.g. to feed a new scroll reading.
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Vertical distance the document has scrolled from its top.
    ///
    /// Reads `scrollY`, then `pageYOffset`, then the body's `scrollTop`,
    /// then the document element's `scrollTop`, and returns the first one
    /// the host provides. `NaN` when none is available.
    pub fn scroll_top(&self) -> f64 {
        let reading = first_reading([
            self.window.scroll_y(),
            self.window.page_y_offset(),
            self.window.body_scroll_top(),
            self.window.document_element_scroll_top(),
        ]);
        or_nan(reading, "scroll_top")
    }

    /// Viewport height: `innerHeight`, else the body's client height.
    ///
    /// A zero reading counts as missing.
    pub fn height(&self) -> f64 {
        let reading =
            first_positive_reading([self.window.inner_height(), self.window.body_client_height()]);
        or_nan(reading, "height")
    }

    /// Viewport width: `innerWidth`, else the body's client width.
    ///
    /// A zero reading counts as missing.
    pub fn width(&self) -> f64 {
        let reading =
            first_positive_reading([self.window.inner_width(), self.window.body_client_width()]);
        or_nan(reading, "width")
    }

    /// Element's top edge relative to the viewport top; negative once scrolled past.
    pub fn element_top<E: ElementSource + ?Sized>(&self, element: &E) -> f64 {
        element.bounding_rect().top
    }

    /// How much of the element's height is inside the viewport.
    ///
    /// See [`geometry::visible_height`] for the exact rules, including the
    /// approximation used once the element's top has left the viewport.
    pub fn visible_element_height<E: ElementSource + ?Sized>(&self, element: &E) -> f64 {
        let visible =
            geometry::visible_height(element.bounding_rect(), element.outer_height(), self.height());
        trace!(visible, "visible element height");
        visible
    }

    /// Whether the element is partly, but not fully, visible.
    ///
    /// Sample usage: a long sticky side navigation on a search results page.
    pub fn is_element_cut_off<E: ElementSource + ?Sized>(&self, element: &E) -> bool {
        geometry::is_cut_off(self.visible_element_height(element), element.outer_height())
    }

    /// Whether the element's top edge is still below the viewport top, shifted by `buffer`.
    pub fn is_element_top_in_view<E: ElementSource + ?Sized>(
        &self,
        element: &E,
        buffer: Option<f64>,
    ) -> bool {
        geometry::is_top_in_view(self.element_top(element), buffer_or_zero(buffer))
    }

    /// Whether the element is visible and its bottom edge clears the viewport bottom.
    ///
    /// The viewport bottom is `scroll_top + innerHeight`; the raw inner height
    /// is used here, without the body fallback.
    pub fn is_element_bottom_in_view<E: ElementSource + ?Sized>(
        &self,
        element: &E,
        buffer: Option<f64>,
    ) -> bool {
        let visible = self.visible_element_height(element);
        let inner_height = or_nan(self.window.inner_height(), "inner_height");
        let viewport_bottom = self.scroll_top() + inner_height;
        let element_bottom = element.document_top() + element.client_height();
        geometry::is_bottom_in_view(visible, element_bottom, viewport_bottom, buffer_or_zero(buffer))
    }

    /// Whether the element's top has risen above the viewport bottom, shifted by `buffer`.
    ///
    /// One-sided: elements scrolled far past the top still count. Sample
    /// usage: hide a "back to top" arrow once the footer is in view.
    pub fn is_element_in_viewport<E: ElementSource + ?Sized>(
        &self,
        element: &E,
        buffer: Option<f64>,
    ) -> bool {
        geometry::is_in_viewport(self.element_top(element), buffer_or_zero(buffer), self.height())
    }

    /// Direction moved since the tracker's last observation; updates the tracker.
    pub fn scroll_direction(&self, tracker: &mut ScrollTracker) -> ScrollDirection {
        let previous = tracker.previous();
        let direction = tracker.observe(self.scroll_top());
        trace!(previous, current = tracker.previous(), %direction, "scroll direction");
        direction
    }

    /// Gap between the bottom of `upper` and the top of `lower`.
    ///
    /// Usage: how much room a fixed element has left before it meets a static one.
    pub fn vertical_distance<U, L>(&self, upper: &U, lower: &L) -> f64
    where
        U: ElementSource + ?Sized,
        L: ElementSource + ?Sized,
    {
        geometry::vertical_distance(upper.document_top(), upper.client_height(), lower.document_top())
    }

    /// Whether a fixed-height, clipped element holds more content than it shows.
    pub fn has_element_overflown<E: ElementSource + ?Sized>(&self, element: &E) -> bool {
        geometry::has_overflown(element.scroll_height(), element.offset_height())
    }
}

fn or_nan(reading: Option<f64>, metric: &'static str) -> f64 {
    reading.unwrap_or_else(|| {
        warn!(metric, "no window source available");
        f64::NAN
    })
}
