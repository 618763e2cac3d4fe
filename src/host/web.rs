//! Live browser bindings via `web-sys`.

use super::{ElementSource, WindowSource};
use crate::geometry::Rect;
use thiserror::Error;
use wasm_bindgen::JsCast;

/// Failures acquiring browser handles.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No global `window` (e.g. running inside a worker).
    #[error("no global window object")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The element is not an `HtmlElement`, so it has no offset geometry.
    #[error("element <{tag}> is not an HtmlElement")]
    NotHtmlElement {
        /// Tag name of the rejected element.
        tag: String,
    },
}

/// The page's window and document.
#[derive(Debug, Clone)]
pub struct WebWindow {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebWindow {
    /// Bind to the global window.
    pub fn current() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Wrap a DOM element so it can be measured against this window.
    pub fn element(&self, element: web_sys::Element) -> Result<WebElement, HostError> {
        WebElement::new(element, self.window.clone())
    }
}

fn js_number(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> Option<f64> {
    value.ok().and_then(|v| v.as_f64())
}

impl WindowSource for WebWindow {
    fn scroll_y(&self) -> Option<f64> {
        self.window.scroll_y().ok()
    }

    fn page_y_offset(&self) -> Option<f64> {
        self.window.page_y_offset().ok()
    }

    fn body_scroll_top(&self) -> Option<f64> {
        self.document.body().map(|body| f64::from(body.scroll_top()))
    }

    fn document_element_scroll_top(&self) -> Option<f64> {
        self.document
            .document_element()
            .map(|root| f64::from(root.scroll_top()))
    }

    fn inner_height(&self) -> Option<f64> {
        js_number(self.window.inner_height())
    }

    fn inner_width(&self) -> Option<f64> {
        js_number(self.window.inner_width())
    }

    fn body_client_height(&self) -> Option<f64> {
        self.document
            .body()
            .map(|body| f64::from(body.client_height()))
    }

    fn body_client_width(&self) -> Option<f64> {
        self.document.body().map(|body| f64::from(body.client_width()))
    }
}

/// A DOM element measured against its window.
#[derive(Debug, Clone)]
pub struct WebElement {
    element: web_sys::HtmlElement,
    window: web_sys::Window,
}

impl WebElement {
    fn new(element: web_sys::Element, window: web_sys::Window) -> Result<Self, HostError> {
        let tag = element.tag_name();
        let element = element
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| HostError::NotHtmlElement { tag })?;
        Ok(Self { element, window })
    }
}

impl ElementSource for WebElement {
    fn bounding_rect(&self) -> Rect {
        let rect = self.element.get_bounding_client_rect();
        Rect::new(rect.top(), rect.bottom(), rect.left(), rect.right())
    }

    fn outer_height(&self) -> f64 {
        f64::from(self.element.offset_height())
    }

    fn client_height(&self) -> f64 {
        f64::from(self.element.client_height())
    }

    fn offset_height(&self) -> f64 {
        f64::from(self.element.offset_height())
    }

    fn scroll_height(&self) -> f64 {
        f64::from(self.element.scroll_height())
    }

    fn document_top(&self) -> f64 {
        // Same origin jQuery's offset() uses.
        let scroll = self.window.page_y_offset().unwrap_or(0.0);
        self.element.get_bounding_client_rect().top() + scroll
    }
}
