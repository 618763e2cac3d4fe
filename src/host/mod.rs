//! Host abstraction: what a window and an element can report.
//!
//! The geometry queries never own or mutate the page. They read through
//! these two traits, so the same code runs against a live browser
//! (`web`, wasm32 only) or against recorded measurements (`snapshot`).

pub mod snapshot;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use snapshot::{ElementSnapshot, WindowSnapshot};

#[cfg(target_arch = "wasm32")]
pub use web::{HostError, WebElement, WebWindow};

use crate::geometry::Rect;

/// Window-level readings.
///
/// Every reading is optional because hosts disagree on which properties
/// they provide. The viewport facade walks them in priority order.
pub trait WindowSource {
    /// `window.scrollY`.
    fn scroll_y(&self) -> Option<f64>;
    /// `window.pageYOffset`.
    fn page_y_offset(&self) -> Option<f64>;
    /// `document.body.scrollTop`.
    fn body_scroll_top(&self) -> Option<f64>;
    /// `document.documentElement.scrollTop`.
    fn document_element_scroll_top(&self) -> Option<f64>;
    /// `window.innerHeight`.
    fn inner_height(&self) -> Option<f64>;
    /// `window.innerWidth`.
    fn inner_width(&self) -> Option<f64>;
    /// `document.body.clientHeight`.
    fn body_client_height(&self) -> Option<f64>;
    /// `document.body.clientWidth`.
    fn body_client_width(&self) -> Option<f64>;
}

/// Element-level readings, all in CSS pixels.
pub trait ElementSource {
    /// Bounding rectangle relative to the viewport.
    fn bounding_rect(&self) -> Rect;
    /// Rendered height including padding and border.
    fn outer_height(&self) -> f64;
    /// Inner height excluding borders and horizontal scrollbar.
    fn client_height(&self) -> f64;
    /// Layout height of the clipping box.
    fn offset_height(&self) -> f64;
    /// Full content height, clipped portion included.
    fn scroll_height(&self) -> f64;
    /// Top edge relative to the document origin.
    fn document_top(&self) -> f64;
}

impl<W: WindowSource + ?Sized> WindowSource for &W {
    fn scroll_y(&self) -> Option<f64> {
        (**self).scroll_y()
    }

    fn page_y_offset(&self) -> Option<f64> {
        (**self).page_y_offset()
    }

    fn body_scroll_top(&self) -> Option<f64> {
        (**self).body_scroll_top()
    }

    fn document_element_scroll_top(&self) -> Option<f64> {
        (**self).document_element_scroll_top()
    }

    fn inner_height(&self) -> Option<f64> {
        (**self).inner_height()
    }

    fn inner_width(&self) -> Option<f64> {
        (**self).inner_width()
    }

    fn body_client_height(&self) -> Option<f64> {
        (**self).body_client_height()
    }

    fn body_client_width(&self) -> Option<f64> {
        (**self).body_client_width()
    }
}
